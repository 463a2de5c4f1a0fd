use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::Version;
use crate::error::Result;

/// Default location of the context document, relative to the working directory.
pub const DEFAULT_CONTEXT_PATH: &str = ".vc.toml";

/// The persisted release context.
///
/// Holds the dry-run switch, the remote tags are pushed to and the fields of
/// the last version the tool applied. Serialised as:
///
/// ```toml
/// dry_mode = true
/// remote = "origin"
///
/// [current.tag]
/// revision = 1
///
/// [current.tag.version]
/// major = 0
/// minor = 0
/// patch = 0
///
/// [current.tag.release]
/// name = "alpha"
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseContext {
    #[serde(default = "default_dry_mode")]
    pub dry_mode: bool,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub current: CurrentConfig,

    /// Keys this tool does not know about, written back untouched. Every
    /// nested table below keeps its own.
    #[serde(flatten)]
    pub extra: toml::Table,
}

fn default_dry_mode() -> bool {
    true
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_revision() -> u32 {
    1
}

fn default_release_name() -> String {
    "alpha".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CurrentConfig {
    #[serde(default)]
    pub tag: TagConfig,

    #[serde(flatten)]
    pub extra: toml::Table,
}

/// The last applied tag, split the way it is stored on disk.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_revision")]
    pub revision: u32,

    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            revision: default_revision(),
            version: VersionConfig::default(),
            release: ReleaseConfig::default(),
            extra: toml::Table::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct VersionConfig {
    #[serde(default)]
    pub major: u32,

    #[serde(default)]
    pub minor: u32,

    #[serde(default)]
    pub patch: u32,

    #[serde(flatten)]
    pub extra: toml::Table,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_release_name")]
    pub name: String,

    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            name: default_release_name(),
            extra: toml::Table::new(),
        }
    }
}

impl Default for ReleaseContext {
    fn default() -> Self {
        ReleaseContext {
            dry_mode: default_dry_mode(),
            remote: default_remote(),
            current: CurrentConfig::default(),
            extra: toml::Table::new(),
        }
    }
}

impl ReleaseContext {
    /// The last applied version
    pub fn current_version(&self) -> Version {
        let tag = &self.current.tag;
        Version::new(
            tag.version.major,
            tag.version.minor,
            tag.version.patch,
            &tag.release.name,
            tag.revision,
        )
    }

    /// Record `version` as the last applied version
    pub fn set_current_version(&mut self, version: &Version) {
        let tag = &mut self.current.tag;
        tag.version.major = version.major();
        tag.version.minor = version.minor();
        tag.version.patch = version.patch();
        tag.release.name = version.pre_release_name().to_string();
        tag.revision = version.pre_release_count();
    }

    /// Parse a context document; missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Loads the context document at `path`.
///
/// # Returns
/// * `Ok(Some(ReleaseContext))` - The parsed document
/// * `Ok(None)` - If no file exists at `path`
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_context(path: &Path) -> Result<Option<ReleaseContext>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    ReleaseContext::from_toml(&content).map(Some)
}

/// Overwrites the document at `path` with `context`.
pub fn write_context(path: &Path, context: &ReleaseContext) -> Result<()> {
    fs::write(path, context.to_toml()?)?;
    Ok(())
}
