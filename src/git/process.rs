use crate::error::{Result, VcError};
use crate::git::{Git, GitCommand};
use log::debug;
use std::process::Stdio;

/// Runs the real `git` executable found on `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessGit;

impl ProcessGit {
    pub fn new() -> Self {
        ProcessGit
    }
}

impl Git for ProcessGit {
    fn run(&self, command: &GitCommand) -> Result<()> {
        debug!("Running `{}`", command);

        let status = command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(VcError::exit_status(command.to_string(), status))
        }
    }

    fn capture(&self, command: &GitCommand) -> Result<String> {
        debug!("Capturing `{}`", command);

        let output = command.to_command().stderr(Stdio::inherit()).output()?;

        if !output.status.success() {
            return Err(VcError::exit_status(command.to_string(), output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
