//! How a target version is chosen.
//!
//! The three tag commands (`t`, `inc`, `new`) each build one [`Strategy`] at
//! the CLI boundary. [`Strategy::settle`] collapses the plain alias onto one
//! of the other two, and [`resolve`] turns a settled strategy into a
//! [`Version`].

use crate::domain::{Increment, Version};
use crate::error::Result;

/// Field values for a version built from flags.
///
/// Defaults to `0.1.0-alpha.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFields {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release_name: String,
    pub pre_release_count: u32,
}

impl Default for VersionFields {
    fn default() -> Self {
        VersionFields {
            major: 0,
            minor: 1,
            patch: 0,
            pre_release_name: "alpha".to_string(),
            pre_release_count: 1,
        }
    }
}

impl VersionFields {
    pub fn to_version(&self) -> Version {
        Version::new(
            self.major,
            self.minor,
            self.patch,
            &self.pre_release_name,
            self.pre_release_count,
        )
    }
}

/// Inputs of the explicit (non-increment) path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplicitRequest {
    /// Semantic version given with `--version`, tried first
    pub semver: Option<String>,
    /// Fallback field values
    pub fields: VersionFields,
}

/// Everything the plain `t` alias was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainRequest {
    /// `--new`
    pub new: bool,
    /// `--inc`
    pub inc: bool,
    pub increment: Increment,
    pub explicit: ExplicitRequest,
}

/// A way of choosing the next version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Bump fields of the stored version (`inc`)
    Increment(Increment),
    /// Build a version from `--version` or flags (`new`)
    Explicit(ExplicitRequest),
    /// Plain alias; `--new`/`--inc` pick one of the above (`t`)
    PlainDefault(PlainRequest),
}

impl Strategy {
    /// Resolve the plain alias into the strategy it stands for.
    pub fn settle(self) -> Strategy {
        match self {
            Strategy::PlainDefault(plain) => {
                if plain_alias_increments(plain.new, plain.inc) {
                    Strategy::Increment(plain.increment)
                } else {
                    Strategy::Explicit(plain.explicit)
                }
            }
            settled => settled,
        }
    }
}

/// Increment decision for the plain alias.
///
/// `--new` wins over `--inc`, and with neither flag the alias increments.
/// `--inc` on its own therefore never changes the outcome; that precedence
/// is kept as is.
pub fn plain_alias_increments(flag_new: bool, flag_inc: bool) -> bool {
    let mut increment = false;
    if !flag_new || flag_inc {
        increment = true;
    }
    if flag_new {
        increment = false;
    }
    increment
}

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Incremented,
    Semver,
    Flags,
}

/// A target version and how it was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub version: Version,
    pub source: Source,
}

type Attempt = fn(&ExplicitRequest) -> Option<Version>;

/// Fallible attempts of the explicit path, in order; the first applicable
/// one wins. Building from flags comes last and always applies.
const EXPLICIT_ATTEMPTS: [(Source, Attempt); 1] = [(Source::Semver, from_semver)];

fn from_semver(request: &ExplicitRequest) -> Option<Version> {
    request.semver.as_deref().and_then(Version::parse_semver)
}

/// Resolve `strategy` against the currently stored version.
///
/// Only the increment path can fail, when a selected field is already at
/// its maximum.
pub fn resolve(strategy: &Strategy, current: &Version) -> Result<Resolved> {
    match strategy {
        Strategy::Increment(increment) => Ok(Resolved {
            version: current.increment(increment)?,
            source: Source::Incremented,
        }),
        Strategy::Explicit(request) => Ok(resolve_explicit(request)),
        Strategy::PlainDefault(_) => resolve(&strategy.clone().settle(), current),
    }
}

fn resolve_explicit(request: &ExplicitRequest) -> Resolved {
    EXPLICIT_ATTEMPTS
        .iter()
        .find_map(|(source, attempt)| {
            attempt(request).map(|version| Resolved {
                version,
                source: *source,
            })
        })
        .unwrap_or_else(|| Resolved {
            version: request.fields.to_version(),
            source: Source::Flags,
        })
}
