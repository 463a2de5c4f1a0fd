//! Command-line surface
//!
//! Argument definitions live here; [orchestration] maps them onto the
//! library.

pub mod orchestration;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONTEXT_PATH;
use crate::domain::Increment;
use crate::release::{ExplicitRequest, Mode, PlainRequest, Strategy, VersionFields};

#[derive(Debug, Parser)]
#[command(
    name = "vc",
    about = "Short git aliases and a dry-run guarded release tagger"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        help = "--mode=dry or --mode=run overrides the persisted dry-run state"
    )]
    pub mode: Option<Mode>,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = DEFAULT_CONTEXT_PATH,
        help = "Context file holding dry-run state, remote and current tag"
    )]
    pub context: PathBuf,

    #[arg(long, help = "Show the full log in the overview")]
    pub more: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// git status -u
    #[command(name = "s")]
    Status,

    /// Stage a file picked with the fuzzy finder
    #[command(name = "a")]
    Add(AddArgs),

    /// git commit -v --allow-empty
    #[command(name = "c")]
    Commit(CommitArgs),

    /// Push the current branch to the configured remote
    #[command(name = "p")]
    Push,

    /// Tag a release, incrementing the current tag unless --new is given
    #[command(name = "t")]
    Tag(TagArgs),

    /// Tag a release by incrementing the current tag
    #[command(name = "inc")]
    Inc(IncArgs),

    /// Tag a release from an explicit version
    #[command(name = "new")]
    New(NewArgs),

    /// Toggle persisted switches
    #[command(name = "switch")]
    Switch {
        #[command(subcommand)]
        target: SwitchTarget,
    },
}

#[derive(Debug, Subcommand)]
pub enum SwitchTarget {
    /// Toggle dry-run mode
    Dry,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(short, long, help = "Stage all tracked files (git commit -av)")]
    pub auto: bool,
}

#[derive(Debug, Args)]
pub struct CommitArgs {
    #[arg(long, help = "Stick --amend to git commit")]
    pub amend: bool,

    #[arg(long, help = "--amend alias")]
    pub update: bool,
}

#[derive(Debug, Args)]
pub struct TagArgs {
    #[arg(long, default_value_t = 0, help = "Set major version (with --new)")]
    pub major: u32,

    #[arg(long, default_value_t = 1, help = "Set minor version (with --new)")]
    pub minor: u32,

    #[arg(long, default_value_t = 0, help = "Set patch version (with --new)")]
    pub patch: u32,

    #[arg(long, default_value_t = 1, help = "Set pre-release count (with --new)")]
    pub rc: u32,

    #[arg(long = "rc-name", default_value = "alpha", help = "Set pre-release name (with --new)")]
    pub rc_name: String,

    #[arg(long, help = "Build a new tag from flags instead of incrementing")]
    pub new: bool,

    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Increment the current tag"
    )]
    pub inc: bool,

    #[arg(long, help = "Increment major")]
    pub imajor: bool,

    #[arg(long, help = "Increment minor")]
    pub iminor: bool,

    #[arg(long, help = "Increment patch")]
    pub ipatch: bool,

    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Increment pre-release count"
    )]
    pub irc: bool,
}

impl TagArgs {
    pub fn strategy(&self) -> Strategy {
        Strategy::PlainDefault(PlainRequest {
            new: self.new,
            inc: self.inc,
            increment: Increment {
                major: self.imajor,
                minor: self.iminor,
                patch: self.ipatch,
                revision: self.irc,
            },
            explicit: ExplicitRequest {
                semver: None,
                fields: VersionFields {
                    major: self.major,
                    minor: self.minor,
                    patch: self.patch,
                    pre_release_name: self.rc_name.clone(),
                    pre_release_count: self.rc,
                },
            },
        })
    }
}

#[derive(Debug, Args)]
pub struct IncArgs {
    #[arg(long = "maj", help = "Increment major semantic version")]
    pub major: bool,

    #[arg(long = "min", help = "Increment minor semantic version")]
    pub minor: bool,

    #[arg(long = "p", help = "Increment patch semantic version")]
    pub patch: bool,

    #[arg(
        long = "c",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Increment pre-release count"
    )]
    pub revision: bool,
}

impl IncArgs {
    pub fn strategy(&self) -> Strategy {
        Strategy::Increment(Increment {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            revision: self.revision,
        })
    }
}

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(long = "maj", default_value_t = 0, help = "Set new major")]
    pub major: u32,

    #[arg(long = "min", default_value_t = 1, help = "Set new minor")]
    pub minor: u32,

    #[arg(long = "p", default_value_t = 0, help = "Set new patch")]
    pub patch: u32,

    #[arg(long = "c", default_value_t = 1, help = "Set new pre-release count")]
    pub count: u32,

    #[arg(long = "rc", default_value = "alpha", help = "Set new pre-release name")]
    pub name: String,

    #[arg(
        short = 'v',
        long = "version",
        help = "Set with a semantic version, e.g. v0.1.0-alpha.1"
    )]
    pub version: Option<String>,
}

impl NewArgs {
    pub fn strategy(&self) -> Strategy {
        Strategy::Explicit(ExplicitRequest {
            semver: self.version.clone(),
            fields: VersionFields {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                pre_release_name: self.name.clone(),
                pre_release_count: self.count,
            },
        })
    }
}
