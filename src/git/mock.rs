use crate::error::{Result, VcError};
use crate::git::{Git, GitCommand};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock git for testing without spawning processes
///
/// Records every command it is asked to run or capture. Captured output is
/// scripted per subcommand; subcommands registered with
/// [`MockGit::fail_on`] fail as if git had exited with status 128.
#[derive(Debug, Default)]
pub struct MockGit {
    calls: RefCell<Vec<GitCommand>>,
    outputs: HashMap<String, String>,
    failing: Vec<String>,
}

impl MockGit {
    /// Create a new mock with no scripted output
    pub fn new() -> Self {
        MockGit::default()
    }

    /// Script the captured output of a subcommand
    pub fn with_output(mut self, subcommand: impl Into<String>, output: impl Into<String>) -> Self {
        self.outputs.insert(subcommand.into(), output.into());
        self
    }

    /// Make a subcommand fail
    pub fn fail_on(mut self, subcommand: impl Into<String>) -> Self {
        self.failing.push(subcommand.into());
        self
    }

    /// Commands seen so far, in order
    pub fn calls(&self) -> Vec<GitCommand> {
        self.calls.borrow().clone()
    }

    /// Commands seen so far, rendered as command lines
    pub fn call_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    fn record(&self, command: &GitCommand) -> Result<()> {
        self.calls.borrow_mut().push(command.clone());

        let subcommand = command.subcommand().unwrap_or_default();
        if self.failing.iter().any(|failing| failing == subcommand) {
            return Err(VcError::ExitStatus {
                command: command.to_string(),
                status: "exit status: 128".to_string(),
            });
        }
        Ok(())
    }
}

impl Git for MockGit {
    fn run(&self, command: &GitCommand) -> Result<()> {
        self.record(command)
    }

    fn capture(&self, command: &GitCommand) -> Result<String> {
        self.record(command)?;
        let subcommand = command.subcommand().unwrap_or_default();
        Ok(self.outputs.get(subcommand).cloned().unwrap_or_default())
    }
}
