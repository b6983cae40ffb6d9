use semver::Version;

/// Parses a semantic version from a git tag name.
///
/// Strips the common 'v'/'V' prefix before parsing, so both "v1.2.3" and
/// "1.2.3" resolve to the same version. Anything that does not parse as a
/// full major.minor.patch version (optionally with pre-release/build
/// metadata) is rejected.
///
/// # Arguments
/// * `tag` - Tag name to parse (e.g., "v1.2.3", "2.0.0-rc.1")
///
/// # Returns
/// * `Some(Version)` - Successfully parsed version
/// * `None` - If the tag name is not a valid semantic version
pub fn parse_tag_version(tag: &str) -> Option<Version> {
    let clean_tag = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);

    Version::parse(clean_tag).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_prefixed() {
        assert_eq!(parse_tag_version("1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(parse_tag_version("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(parse_tag_version("V0.1.0"), Some(Version::new(0, 1, 0)));
    }

    #[test]
    fn test_parse_prerelease() {
        let version = parse_tag_version("1.2.0-rc1").unwrap();
        assert_eq!(version.to_string(), "1.2.0-rc1");
        assert!(version < Version::new(1, 2, 0));
    }

    #[test]
    fn test_rejects_non_semver() {
        assert_eq!(parse_tag_version("release-candidate-7"), None);
        assert_eq!(parse_tag_version("1.2"), None);
        assert_eq!(parse_tag_version(""), None);
        assert_eq!(parse_tag_version("v"), None);
    }

    #[test]
    fn test_ordering_matches_semver_precedence() {
        let v_rc = parse_tag_version("1.2.0-rc1").unwrap();
        let v_old = parse_tag_version("0.9.0").unwrap();
        let v_new = parse_tag_version("2.0.0").unwrap();
        assert!(v_old < v_rc);
        assert!(v_rc < v_new);
    }
}
