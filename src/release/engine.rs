use log::debug;

use crate::context::ContextStore;
use crate::error::Result;
use crate::git::Git;
use crate::release::apply::{apply, ApplyOutcome};
use crate::release::mode::{effective_dry_run, Mode};
use crate::release::strategy::{resolve, Resolved, Source, Strategy};
use crate::ui;

/// Chooses the next release tag and applies it.
///
/// Owns the context store it reads the current version from and persists
/// the new one to, and the git implementation tags are created and pushed
/// with.
pub struct TagEngine<S, G> {
    store: S,
    git: G,
}

impl<S: ContextStore, G: Git> TagEngine<S, G> {
    /// Create an engine over an already opened store
    pub fn new(store: S, git: G) -> Self {
        TagEngine { store, git }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    /// Resolve `strategy` against the stored version, without side effects.
    pub fn resolve(&self, strategy: &Strategy) -> Result<Resolved> {
        let current = self.store.get().current_version();
        debug!("current version {}", current);
        resolve(strategy, &current)
    }

    /// Resolve `strategy` and apply the result.
    ///
    /// An incremented version is shown with the current branch and the
    /// branch listing first; failing to list branches aborts before anything
    /// is tagged. So does a selected field that cannot be bumped.
    pub fn run(&mut self, strategy: Strategy, mode: Option<Mode>) -> Result<ApplyOutcome> {
        let strategy = strategy.settle();
        let resolved = self.resolve(&strategy)?;
        let tag = resolved.version.to_string();

        match resolved.source {
            Source::Incremented => {
                ui::display_incremented(&tag);
                let listing = self.git.branches()?;
                ui::display_branches(&listing);
            }
            Source::Flags => ui::display_new(&tag),
            Source::Semver => debug!("semver {}", tag),
        }

        let dry_run = effective_dry_run(mode, self.store.get().dry_mode);
        debug!("dry run: {}", dry_run);

        apply(&mut self.store, &self.git, &resolved.version, dry_run)
    }

    /// Give back the store and git implementation
    pub fn into_parts(self) -> (S, G) {
        (self.store, self.git)
    }
}
