use crate::domain::slug::slugify;
use crate::error::{Result, VcError};
use log::debug;
use std::fmt;

/// Release version: semantic version core plus a named, counted pre-release.
///
/// Fields are private so the pre-release name is always a slug; every
/// change goes through [`Version::new`] or [`Version::increment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release_name: String,
    pre_release_count: u32,
}

/// Which fields an increment bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Increment {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub revision: bool,
}

impl Increment {
    /// Bump only the pre-release counter
    pub fn revision_only() -> Self {
        Increment {
            revision: true,
            ..Increment::default()
        }
    }
}

impl Version {
    /// Create a new version, slugifying the pre-release name
    pub fn new(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release_name: &str,
        pre_release_count: u32,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release_name: slugify(pre_release_name),
            pre_release_count,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn pre_release_name(&self) -> &str {
        &self.pre_release_name
    }

    pub fn pre_release_count(&self) -> u32 {
        self.pre_release_count
    }

    /// Derive a new version with every selected field bumped by one.
    ///
    /// A selected field already at `u32::MAX` is an error.
    pub fn increment(&self, selection: &Increment) -> Result<Self> {
        let bump = |field: &'static str, value: u32, selected: bool| {
            if !selected {
                return Ok(value);
            }
            value
                .checked_add(1)
                .ok_or_else(|| VcError::overflow(field, self.to_string()))
        };

        Ok(Version {
            major: bump("major", self.major, selection.major)?,
            minor: bump("minor", self.minor, selection.minor)?,
            patch: bump("patch", self.patch, selection.patch)?,
            pre_release_name: self.pre_release_name.clone(),
            pre_release_count: bump("revision", self.pre_release_count, selection.revision)?,
        })
    }

    /// Parse an explicit semantic version such as `v2.3.4-rc.5`.
    ///
    /// A leading `v`/`V` is accepted. The pre-release part is read as
    /// `<name>.<count>` only when it has exactly two components and the first
    /// is not numeric; otherwise the name is empty and the count zero.
    ///
    /// Returns `None` for anything the semver grammar rejects, including
    /// the empty string.
    pub fn parse_semver(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let clean = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

        let parsed = match semver::Version::parse(clean) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("semver: cannot parse {:?}: {}", input, e);
                return None;
            }
        };

        let (name, count) = split_pre_release(parsed.pre.as_str());
        debug!(
            "semver: major={} minor={} patch={} pre={:?}",
            parsed.major,
            parsed.minor,
            parsed.patch,
            parsed.pre.as_str()
        );

        Some(Version::new(
            u32::try_from(parsed.major).ok()?,
            u32::try_from(parsed.minor).ok()?,
            u32::try_from(parsed.patch).ok()?,
            name,
            count,
        ))
    }
}

fn split_pre_release(pre: &str) -> (&str, u32) {
    let parts: Vec<&str> = pre.split('.').collect();
    if parts.len() != 2 || parts[0].chars().all(|c| c.is_ascii_digit()) {
        return ("", 0);
    }
    (parts[0], parts[1].parse::<u32>().unwrap_or(0))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{}.{}.{}-{}.{}",
            self.major, self.minor, self.patch, self.pre_release_name, self.pre_release_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3, "alpha", 4);
        assert_eq!(v.to_string(), "v1.2.3-alpha.4");
    }

    #[test]
    fn test_new_slugifies_name() {
        let v = Version::new(0, 1, 0, "Release Candidate", 1);
        assert_eq!(v.pre_release_name(), "release_candidate");
        assert_eq!(v.to_string(), "v0.1.0-release_candidate.1");
    }

    #[test]
    fn test_increment_revision_only() {
        let v = Version::new(0, 1, 0, "alpha", 1);
        assert_eq!(
            v.increment(&Increment::revision_only()).unwrap(),
            Version::new(0, 1, 0, "alpha", 2)
        );
    }

    #[test]
    fn test_increment_does_not_reset_lower_fields() {
        let v = Version::new(1, 2, 3, "beta", 4);
        let bumped = v
            .increment(&Increment {
                major: true,
                ..Increment::default()
            })
            .unwrap();
        assert_eq!(bumped, Version::new(2, 2, 3, "beta", 4));
    }

    #[test]
    fn test_increment_changes_exactly_selected_fields() {
        let v = Version::new(3, 5, 7, "rc", 9);

        for bits in 0u8..16 {
            let selection = Increment {
                major: bits & 1 != 0,
                minor: bits & 2 != 0,
                patch: bits & 4 != 0,
                revision: bits & 8 != 0,
            };
            let bumped = v.increment(&selection).unwrap();

            assert_eq!(bumped.major(), 3 + selection.major as u32);
            assert_eq!(bumped.minor(), 5 + selection.minor as u32);
            assert_eq!(bumped.patch(), 7 + selection.patch as u32);
            assert_eq!(bumped.pre_release_count(), 9 + selection.revision as u32);
            assert_eq!(bumped.pre_release_name(), "rc");
        }
    }

    #[test]
    fn test_increment_leaves_receiver_untouched() {
        let v = Version::new(0, 1, 0, "alpha", 1);
        let _ = v.increment(&Increment::revision_only());
        assert_eq!(v.to_string(), "v0.1.0-alpha.1");
    }

    #[test]
    fn test_increment_at_field_limit_is_an_error() {
        let v = Version::new(1, 2, 3, "rc", u32::MAX);

        let err = v.increment(&Increment::revision_only()).unwrap_err();
        assert!(matches!(err, VcError::VersionOverflow { field: "revision", .. }));

        let v = Version::new(u32::MAX, 0, 0, "rc", 1);
        assert!(v.increment(&Increment { major: true, ..Increment::default() }).is_err());
        // unselected fields at the limit are left alone
        assert_eq!(
            v.increment(&Increment::revision_only()).unwrap().pre_release_count(),
            2
        );
    }

    #[test]
    fn test_parse_semver_with_prefix() {
        let v = Version::parse_semver("v2.3.4-rc.5").unwrap();
        assert_eq!(v, Version::new(2, 3, 4, "rc", 5));
        assert_eq!(v.to_string(), "v2.3.4-rc.5");
    }

    #[test]
    fn test_parse_semver_without_prefix() {
        let v = Version::parse_semver("1.0.0-beta.2").unwrap();
        assert_eq!(v.to_string(), "v1.0.0-beta.2");

        let v = Version::parse_semver("V1.0.0-beta.2").unwrap();
        assert_eq!(v.major(), 1);
    }

    #[test]
    fn test_parse_semver_slugifies_name() {
        let v = Version::parse_semver("1.0.0-Nightly-Build.3").unwrap();
        assert_eq!(v.pre_release_name(), "nightly_build");
        assert_eq!(v.pre_release_count(), 3);
    }

    #[test]
    fn test_parse_semver_without_two_part_pre_release() {
        let v = Version::parse_semver("1.2.3").unwrap();
        assert_eq!(v.pre_release_name(), "");
        assert_eq!(v.pre_release_count(), 0);

        let v = Version::parse_semver("1.2.3-alpha").unwrap();
        assert_eq!(v.pre_release_name(), "");

        let v = Version::parse_semver("1.2.3-alpha.1.2").unwrap();
        assert_eq!(v.pre_release_count(), 0);
    }

    #[test]
    fn test_parse_semver_numeric_name_is_ignored() {
        let v = Version::parse_semver("1.2.3-4.5").unwrap();
        assert_eq!(v.pre_release_name(), "");
        assert_eq!(v.pre_release_count(), 0);
    }

    #[test]
    fn test_parse_semver_non_numeric_count_reads_as_zero() {
        let v = Version::parse_semver("1.2.3-rc.next").unwrap();
        assert_eq!(v.pre_release_name(), "rc");
        assert_eq!(v.pre_release_count(), 0);
    }

    #[test]
    fn test_parse_semver_rejects_malformed() {
        assert!(Version::parse_semver("").is_none());
        assert!(Version::parse_semver("not-a-version").is_none());
        assert!(Version::parse_semver("1.2").is_none());
        assert!(Version::parse_semver("v1.2.3.4").is_none());
        assert!(Version::parse_semver("vv1.2.3-rc.1").is_none());
        assert!(Version::parse_semver("vV1.2.3").is_none());
    }
}
