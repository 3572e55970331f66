//! Path filtering rules for native-source discovery.
//!
//! Pure functions over slash-delimited relative paths. A rule returns `None`
//! when the path must be excluded from discovery and `Some(path)` otherwise,
//! so the scanner can tell an excluded path apart from the project root's
//! own empty relative path.

/// Directory names under `external_libraries` whose contents are vendored
/// samples or test harnesses rather than buildable sources.
const VENDORED_SAMPLE_DIRS: [&str; 3] = ["sample", "test_sil", "test_vs"];

/// Marker for a build-output directory.
const BUILD_DIR: &str = "build";

/// Exclude sample/test subtrees of a vendored `external_libraries` tree.
///
/// Returns `None` if the path contains an `external_libraries` segment and,
/// at or after that segment, a segment case-insensitively matching one of
/// `sample`, `test_sil` or `test_vs`. Any other path passes through.
pub fn exclude_vendored_samples(path: &str) -> Option<&str> {
    let mut in_external = false;

    for segment in path.split('/') {
        let lower = segment.to_ascii_lowercase();

        if lower == "external_libraries" {
            in_external = true;
        }

        if in_external && VENDORED_SAMPLE_DIRS.contains(&lower.as_str()) {
            return None;
        }
    }

    Some(path)
}

/// Exclude anything under a build-output directory.
///
/// Returns `None` if any segment case-insensitively equals `build`.
pub fn exclude_build_dirs(path: &str) -> Option<&str> {
    if path
        .split('/')
        .any(|segment| segment.eq_ignore_ascii_case(BUILD_DIR))
    {
        None
    } else {
        Some(path)
    }
}

/// Apply both discovery filters in sequence.
pub fn retain(path: &str) -> Option<&str> {
    exclude_vendored_samples(path).and_then(exclude_build_dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rule_excludes_under_external_libraries() {
        assert_eq!(exclude_vendored_samples("external_libraries/foo/sample"), None);
        assert_eq!(
            exclude_vendored_samples("libs/External_Libraries/bar/Test_SIL/src"),
            None
        );
        assert_eq!(exclude_vendored_samples("external_libraries/TEST_VS"), None);
    }

    #[test]
    fn test_sample_rule_is_identity_otherwise() {
        // Sample directories outside external_libraries are retained.
        assert_eq!(
            exclude_vendored_samples("sample/matrix"),
            Some("sample/matrix")
        );
        assert_eq!(
            exclude_vendored_samples("src/external_libraries/eigen"),
            Some("src/external_libraries/eigen")
        );
        assert_eq!(exclude_vendored_samples(""), Some(""));
    }

    #[test]
    fn test_sample_rule_requires_marker_at_or_after_external() {
        // The sample segment comes before external_libraries, so it stays.
        assert_eq!(
            exclude_vendored_samples("sample/external_libraries/eigen"),
            Some("sample/external_libraries/eigen")
        );
    }

    #[test]
    fn test_build_rule() {
        assert_eq!(exclude_build_dirs("build"), None);
        assert_eq!(exclude_build_dirs("sub/build/objs"), None);
        assert_eq!(exclude_build_dirs("sub/BUILD"), None);
        assert_eq!(exclude_build_dirs("builder/src"), Some("builder/src"));
        assert_eq!(exclude_build_dirs(""), Some(""));
    }

    #[test]
    fn test_combined_retain() {
        assert_eq!(retain("src/matrix"), Some("src/matrix"));
        assert_eq!(retain("external_libraries/x/sample"), None);
        assert_eq!(retain("src/build"), None);
    }
}
