//! Thin git shortcuts: overview, status, add, commit, push, dry switch.

use log::debug;
use std::process::Command;

use crate::context::ContextStore;
use crate::error::Result;
use crate::git::pipe::{self, StatusSelection, PICKER};
use crate::git::{Git, GitCommand};
use crate::release::{effective_dry_run, Mode};
use crate::ui;

/// Last commit (full log with `more`) followed by the short status.
pub fn overview<G: Git>(git: &G, more: bool) -> Result<()> {
    ui::clear_screen()?;

    println!();
    let mut log = vec!["log"];
    if !more {
        log.push("-1");
    }
    git.run(&GitCommand::new(log))?;

    println!();
    git.run(&GitCommand::new(["status", "-s"]))
}

/// `git status -u`
pub fn status<G: Git>(git: &G) -> Result<()> {
    git.run(&GitCommand::new(["status", "-u"]))
}

/// `git commit -v --allow-empty`, optionally amending
pub fn commit<G: Git>(git: &G, amend: bool) -> Result<()> {
    let mut args = vec!["commit", "-v", "--allow-empty"];
    if amend {
        args.push("--amend");
    }
    git.run(&GitCommand::new(args))
}

/// Stage files.
///
/// With `auto`, commits every tracked change (`git commit -av`). Otherwise
/// the short status is piped through the fuzzy finder and the picked path
/// is staged.
pub fn add<G: Git>(git: &G, auto: bool) -> Result<Option<StatusSelection>> {
    if auto {
        git.run(&GitCommand::new(["commit", "-av"]))?;
        return Ok(None);
    }

    let status = GitCommand::new(["status", "-s", "-u"]).to_command();
    let picked = pipe::pipe_capture(status, Command::new(PICKER))?;
    add_picked(git, &picked)
}

/// Stage the path named by a picked `git status -s` line.
pub fn add_picked<G: Git>(git: &G, picked: &str) -> Result<Option<StatusSelection>> {
    let selection = match StatusSelection::parse(picked) {
        Some(selection) => selection,
        None => {
            ui::display_status("nothing selected");
            return Ok(None);
        }
    };
    debug!("state={} filename={}", selection.state, selection.path);

    git.capture(&GitCommand::new(["add", selection.path.as_str()]))?;
    ui::display_success(&format!("added {}", selection.path));
    Ok(Some(selection))
}

/// Push the current branch to the configured remote, skipping CI.
///
/// Returns the push command; in dry mode it is only printed.
pub fn push<S: ContextStore, G: Git>(store: &S, git: &G, mode: Option<Mode>) -> Result<GitCommand> {
    let head = git.current_branch()?;
    let command = GitCommand::push_branch(&store.get().remote, &head);

    if effective_dry_run(mode, store.get().dry_mode) {
        println!("dry mode: {}", command);
        return Ok(command);
    }

    git.run(&command)?;
    Ok(command)
}

/// Flip the persisted dry-run switch relative to the effective one.
///
/// Returns the new persisted value.
pub fn switch_dry<S: ContextStore>(store: &mut S, mode: Option<Mode>) -> Result<bool> {
    let now_dry = !effective_dry_run(mode, store.get().dry_mode);
    ui::display_dry_switch(now_dry);

    store.set().dry_mode = now_dry;
    store.flush()?;
    Ok(now_dry)
}
