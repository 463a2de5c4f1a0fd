//! Git operations abstraction layer
//!
//! Every git interaction goes through the [Git] trait, so the tag engine and
//! the shortcut commands can run against a real `git` executable or a
//! recording fake.
//!
//! - [process::ProcessGit]: spawns `git` with inherited standard streams
//! - [mock::MockGit]: records commands and replays scripted output for tests
//!
//! Commands are plain data ([GitCommand]) so that dry mode can print exactly
//! what would have run.

pub mod command;
pub mod mock;
pub mod pipe;
pub mod process;

pub use command::GitCommand;
pub use mock::MockGit;
pub use process::ProcessGit;

use crate::error::{Result, VcError};

/// Local branches as reported by `git branch`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchListing {
    /// The checked-out branch, if any
    pub head: Option<String>,
    /// Every listed branch, in output order
    pub all: Vec<String>,
}

impl BranchListing {
    /// Parse `git branch` output.
    ///
    /// The line starting with `* ` names the current branch. A detached HEAD
    /// shows up as `* (HEAD detached at ...)` and is reported as such.
    pub fn parse(output: &str) -> Self {
        let mut listing = BranchListing::default();

        for line in output.lines().filter(|line| !line.trim().is_empty()) {
            match line.strip_prefix("* ") {
                Some(head) => {
                    listing.head = Some(head.trim().to_string());
                    listing.all.push(head.trim().to_string());
                }
                None => listing.all.push(line.trim().to_string()),
            }
        }

        listing
    }
}

/// Common git operation trait
pub trait Git {
    /// Run a command to completion with inherited standard streams.
    ///
    /// # Returns
    /// * `Ok(())` - The command exited successfully
    /// * `Err` - It could not be spawned or exited non-zero
    fn run(&self, command: &GitCommand) -> Result<()>;

    /// Run a command and capture its standard output.
    fn capture(&self, command: &GitCommand) -> Result<String>;

    /// Current branch and the full local branch listing.
    ///
    /// Any failure to run `git branch` is reported as a lookup error.
    fn branches(&self) -> Result<BranchListing> {
        let output = self
            .capture(&GitCommand::branch())
            .map_err(|e| VcError::lookup(e.to_string()))?;
        Ok(BranchListing::parse(&output))
    }

    /// Name of the checked-out branch
    fn current_branch(&self) -> Result<String> {
        self.branches()?
            .head
            .ok_or_else(|| VcError::lookup("no branch is checked out"))
    }
}
