//! Apply protocol: tag, push, then record the version.

use log::info;

use crate::context::ContextStore;
use crate::domain::Version;
use crate::error::{Result, VcError};
use crate::git::{Git, GitCommand};
use crate::ui;

/// What an apply did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// The tag name, i.e. the rendered version
    pub tag: String,
    pub dry_run: bool,
    /// Tag and push commands, in the order they ran (or would have run)
    pub commands: Vec<GitCommand>,
}

/// Tag `version`, push the tag, then persist `version` as current.
///
/// In dry mode the tag and push commands are printed instead of run; the
/// version is persisted either way. The push is never attempted when the
/// tag fails, and nothing is persisted after a failure. Git failures are
/// labelled `run tag` / `run push`.
pub fn apply<S: ContextStore, G: Git>(
    store: &mut S,
    git: &G,
    version: &Version,
    dry_run: bool,
) -> Result<ApplyOutcome> {
    let tag = version.to_string();
    let remote = store.get().remote.clone();

    let steps = [
        ("tag", GitCommand::tag(&tag)),
        ("push", GitCommand::push_tag(&remote, &tag)),
    ];

    if dry_run {
        ui::display_dry_mode_notice();
    }

    for (stage, command) in &steps {
        if dry_run {
            ui::display_planned_command(command);
        } else {
            info!("{}: `{}`", stage, command);
            git.run(command).map_err(|e| VcError::stage(*stage, e))?;
        }
    }

    store.set().set_current_version(version);
    store.flush()?;

    Ok(ApplyOutcome {
        tag,
        dry_run,
        commands: steps.into_iter().map(|(_, command)| command).collect(),
    })
}
