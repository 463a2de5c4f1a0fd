//! Pipe one process into another and capture the result
//!
//! Used to feed `git status` into an interactive fuzzy finder. The consumer
//! keeps the terminal (it reads keystrokes from the tty) while its stdin
//! comes from the producer and its stdout is captured.

use crate::error::{Result, VcError};
use log::{debug, error};
use std::process::{Command, Stdio};

/// Fuzzy finder used to pick a line from piped input
pub const PICKER: &str = "sk";

/// Run `producer` with its stdout connected to `consumer`'s stdin and
/// return everything `consumer` wrote to stdout.
pub fn pipe_capture(mut producer: Command, mut consumer: Command) -> Result<String> {
    let result = run_pipe(&mut producer, &mut consumer);
    if let Err(e) = &result {
        error!("pipe {:?} into {:?}: {}", producer.get_program(), consumer.get_program(), e);
    }
    result
}

fn run_pipe(producer: &mut Command, consumer: &mut Command) -> Result<String> {
    debug!("Spawning {:?}", consumer.get_program());
    let mut child = consumer
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| VcError::pipe("spawn consumer", e))?;

    let input = child
        .stdin
        .take()
        .ok_or_else(|| VcError::pipe("open consumer stdin", missing_pipe()))?;

    let status = producer
        .stdout(Stdio::from(input))
        .status()
        .map_err(|e| VcError::pipe("run producer", e))?;

    // Dropping the producer's stdout handle closes the write end of the
    // pipe; until then the consumer never sees end of input.
    producer.stdout(Stdio::null());

    if !status.success() {
        let _ = child.kill();
        let _ = child.wait();
        return Err(VcError::exit_status(
            format!("{:?}", producer.get_program()),
            status,
        ));
    }

    let output = child
        .wait_with_output()
        .map_err(|e| VcError::pipe("wait consumer", e))?;

    if !output.status.success() {
        return Err(VcError::exit_status(
            format!("{:?}", consumer.get_program()),
            output.status,
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn missing_pipe() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin was not piped")
}

/// A line picked from `git status -s` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSelection {
    /// Short status code, e.g. `M` or `??`
    pub state: String,
    /// Path of the entry; for renames, the destination
    pub path: String,
}

impl StatusSelection {
    /// Parse the picker's output: first word is the state, last word the path.
    ///
    /// Returns `None` when nothing was picked.
    pub fn parse(output: &str) -> Option<Self> {
        let mut words = output.split_whitespace();
        let state = words.next()?;
        let path = words.last().unwrap_or(state);

        Some(StatusSelection {
            state: state.to_string(),
            path: path.to_string(),
        })
    }
}
