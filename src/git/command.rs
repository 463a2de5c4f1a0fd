use std::fmt;
use std::process::Command;

/// Name of the git executable every command runs.
pub const GIT: &str = "git";

/// A git invocation, kept as data so it can be printed in dry mode, recorded
/// by [`crate::git::MockGit`], or turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GitCommand {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `git tag <name>`
    pub fn tag(name: &str) -> Self {
        GitCommand::new(["tag", name])
    }

    /// `git push <remote> <tag>`
    pub fn push_tag(remote: &str, tag: &str) -> Self {
        GitCommand::new(["push", remote, tag])
    }

    /// `git push -o ci.skip <remote> <branch>`
    pub fn push_branch(remote: &str, branch: &str) -> Self {
        GitCommand::new(["push", "-o", "ci.skip", remote, branch])
    }

    /// `git branch`
    pub fn branch() -> Self {
        GitCommand::new(["branch"])
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The git subcommand, e.g. `tag` or `push`
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(GIT);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", GIT)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
