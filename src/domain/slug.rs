//! Pre-release name normalisation
//!
//! Pre-release names end up inside tag names, so they are reduced to a slug
//! of `[a-z0-9_]` with underscores as the only word separator.

use regex::Regex;
use std::sync::LazyLock;

static UNAUTHORIZED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("valid slug pattern"));

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("valid separator pattern"));

/// Slugify a pre-release name.
///
/// Lowercases the input, turns every run of unsupported characters into a
/// separator, collapses separator runs, trims separators from both ends and
/// joins words with `_`.
///
/// # Example
/// ```
/// use vc::domain::slug::slugify;
///
/// assert_eq!(slugify("Release Candidate"), "release_candidate");
/// assert_eq!(slugify(&slugify("Release Candidate")), "release_candidate");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let dashed = UNAUTHORIZED_CHARS.replace_all(&lowered, "-");
    let collapsed = SEPARATOR_RUNS.replace_all(&dashed, "-");
    collapsed
        .trim_matches(|c| c == '-' || c == '_')
        .replace('-', "_")
}
