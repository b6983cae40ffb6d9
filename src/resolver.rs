//! Latest-tag resolution.
//!
//! The reduction is written once against [TagSource] and shared by both
//! backends: enumerate dereferenced tags, keep those whose name parses as a
//! semantic version and whose target is an ancestor of HEAD, and return the
//! maximum surviving version. Per-tag problems remove that tag from
//! consideration and are reported through an optional diagnostic sink; they
//! never abort the resolution.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use semver::Version;

use crate::error::{GitLatestError, Result};
use crate::skip::TagSkip;
use crate::source::{Git2Source, GitCliSource, TagSource};
use crate::version::parse_tag_version;

/// Backend used to read the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Spawn the `git` executable for every repository query
    GitCli,
    /// Read the repository in-process via libgit2
    Libgit2,
}

impl FromStr for Method {
    type Err = GitLatestError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cli" | "git" => Ok(Method::GitCli),
            "lib" | "libgit2" => Ok(Method::Libgit2),
            other => Err(GitLatestError::InvalidMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GitCli => write!(f, "cli"),
            Method::Libgit2 => write!(f, "lib"),
        }
    }
}

/// Resolve the highest semantic-version tag reachable from HEAD.
///
/// # Arguments
/// * `method` - Backend selection
/// * `path` - Filesystem path to the repository
///
/// # Returns
/// * `Ok(String)` - Canonical form of the winning version (e.g. "1.4.0")
/// * `Err(NoMatchingTag)` - No tag is both valid semver and an ancestor of HEAD
/// * `Err(_)` - Backend failure (tool missing, unreadable repository, ...)
pub fn latest<P: AsRef<Path>>(method: Method, path: P) -> Result<String> {
    latest_with(method, path, |_| {})
}

/// Same as [latest], reporting every skipped tag to `observe`.
pub fn latest_with<P, F>(method: Method, path: P, observe: F) -> Result<String>
where
    P: AsRef<Path>,
    F: FnMut(TagSkip),
{
    match method {
        Method::GitCli => resolve_latest(&GitCliSource::locate(path)?, observe),
        Method::Libgit2 => resolve_latest(&Git2Source::open(path)?, observe),
    }
}

/// Filter tags to valid, ancestor-reachable semantic versions and keep the
/// maximum.
///
/// The comparison is strictly greater-than, so of two tags carrying the same
/// version the first encountered wins.
pub fn resolve_latest<S, F>(source: &S, mut observe: F) -> Result<String>
where
    S: TagSource,
    F: FnMut(TagSkip),
{
    let head = source.resolve_head()?;
    let tags = source.dereferenced_tags()?;

    let mut best: Option<Version> = None;

    for tag in tags {
        let version = match parse_tag_version(&tag.name) {
            Some(version) => version,
            None => {
                observe(TagSkip::NotSemver { tag: tag.name });
                continue;
            }
        };

        match source.is_ancestor(&tag.target, &head) {
            Ok(true) => {}
            Ok(false) => {
                observe(TagSkip::NotAncestor { tag: tag.name });
                continue;
            }
            Err(e) => {
                observe(TagSkip::AncestryUnknown {
                    tag: tag.name,
                    detail: e.to_string(),
                });
                continue;
            }
        }

        if best.as_ref().map_or(true, |current| version > *current) {
            best = Some(version);
        }
    }

    match best {
        Some(version) => Ok(version.to_string()),
        None => Err(GitLatestError::NoMatchingTag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSource;

    fn no_skips(skip: TagSkip) {
        panic!("unexpected skip: {}", skip);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("cli".parse::<Method>().unwrap(), Method::GitCli);
        assert_eq!("git".parse::<Method>().unwrap(), Method::GitCli);
        assert_eq!("lib".parse::<Method>().unwrap(), Method::Libgit2);
        assert_eq!("libgit2".parse::<Method>().unwrap(), Method::Libgit2);
    }

    #[test]
    fn test_unknown_method_is_invalid() {
        let err = "svn".parse::<Method>().unwrap_err();
        match err {
            GitLatestError::InvalidMethod(value) => assert_eq!(value, "svn"),
            other => panic!("expected InvalidMethod, got {}", other),
        }
    }

    #[test]
    fn test_method_display_round_trip() {
        for method in [Method::GitCli, Method::Libgit2] {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_maximality() {
        let mut source = MockSource::new("head");
        for (name, id) in [
            ("0.9.0", "c1"),
            ("1.0.0", "c2"),
            ("1.2.0-rc1", "c3"),
            ("2.0.0", "c4"),
        ] {
            source.mark_ancestor(id);
            source.add_tag(name, id);
        }

        assert_eq!(resolve_latest(&source, no_skips).unwrap(), "2.0.0");
    }

    #[test]
    fn test_prerelease_orders_below_release() {
        let mut source = MockSource::new("head");
        source.mark_ancestor("c1");
        source.mark_ancestor("c2");
        source.add_tag("1.2.0-rc1", "c1");
        source.add_tag("1.2.0", "c2");

        assert_eq!(resolve_latest(&source, no_skips).unwrap(), "1.2.0");
    }

    #[test]
    fn test_ancestry_filter_excludes_diverged_tags() {
        let mut source = MockSource::new("head");
        source.mark_ancestor("c1");
        source.add_tag("1.0.0", "c1");
        // higher version on a diverged branch
        source.add_tag("9.9.9", "diverged");

        let mut skips = Vec::new();
        let result = resolve_latest(&source, |skip| skips.push(skip)).unwrap();

        assert_eq!(result, "1.0.0");
        assert_eq!(
            skips,
            vec![TagSkip::NotAncestor {
                tag: "9.9.9".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_filter_skips_silently() {
        let mut source = MockSource::new("head");
        source.mark_ancestor("c1");
        source.add_tag("release-candidate-7", "c1");
        source.add_tag("v1.4.0", "c1");

        let mut skips = Vec::new();
        let result = resolve_latest(&source, |skip| skips.push(skip)).unwrap();

        assert_eq!(result, "1.4.0");
        assert_eq!(skips.len(), 1);
        assert_eq!(skips[0].tag(), "release-candidate-7");
    }

    #[test]
    fn test_broken_target_skips_that_tag_only() {
        let mut source = MockSource::new("head");
        source.mark_ancestor("c1");
        source.mark_broken("blob", "object is a blob");
        source.add_tag("5.0.0", "blob");
        source.add_tag("1.0.0", "c1");

        let mut skips = Vec::new();
        let result = resolve_latest(&source, |skip| skips.push(skip)).unwrap();

        assert_eq!(result, "1.0.0");
        assert!(matches!(skips[0], TagSkip::AncestryUnknown { .. }));
    }

    #[test]
    fn test_tag_on_head_counts_as_ancestor() {
        let mut source = MockSource::new("head");
        source.add_tag("3.1.4", "head");

        assert_eq!(resolve_latest(&source, no_skips).unwrap(), "3.1.4");
    }

    #[test]
    fn test_no_tags_yields_no_matching_tag() {
        let source = MockSource::new("head");
        let err = resolve_latest(&source, no_skips).unwrap_err();
        assert!(err.is_no_matching_tag());
    }

    #[test]
    fn test_all_filtered_yields_no_matching_tag() {
        let mut source = MockSource::new("head");
        source.add_tag("nightly", "c1");
        source.add_tag("2.0.0", "diverged");

        let err = resolve_latest(&source, |_| {}).unwrap_err();
        assert!(err.is_no_matching_tag());
    }

    #[test]
    fn test_prefixed_tag_yields_canonical_version() {
        let mut source = MockSource::new("head");
        source.add_tag("v1.4.0", "head");

        assert_eq!(resolve_latest(&source, no_skips).unwrap(), "1.4.0");
    }
}
