//! Project-tree scanning for native sources and include roots.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use walkdir::WalkDir;

use super::filter;

/// Extensions marking a directory as an include root.
pub const HEADER_EXTENSIONS: [&str; 4] = ["c", "h", "cpp", "hpp"];

/// Extensions of translation units fed to the build.
pub const SOURCE_EXTENSIONS: [&str; 2] = ["c", "cpp"];

/// Case-insensitive extension match against a candidate set.
fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Path of `dir` relative to `root`, slash-separated.
///
/// The root directory itself maps to the empty string.
fn relative_slash_path(dir: &Path, root: &Path) -> Option<String> {
    let rel = dir.strip_prefix(root).ok()?;
    let segments: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

/// Anchor the walk at an absolute path; a root that does not exist is a
/// valid "nothing found" state, so fall back to the path as given.
fn absolute_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}

/// Discover directories under `root` that hold header or source files.
///
/// Returns root-relative, slash-separated paths in first-seen pre-order,
/// deduplicated, with the discovery filters applied. The root directory
/// itself appears as the empty string. A directory contributes at most one
/// entry no matter how many qualifying files it holds.
pub fn discover_include_roots(root: &Path, header_extensions: &[&str]) -> Vec<String> {
    let root = absolute_root(root);

    let mut seen = FxHashSet::default();
    let mut include_roots = Vec::new();

    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        // One qualifying file is enough; `any` stops the scan there.
        let holds_match = fs::read_dir(entry.path())
            .map(|iter| {
                iter.filter_map(std::result::Result::ok)
                    .any(|e| e.path().is_file() && has_extension(&e.path(), header_extensions))
            })
            .unwrap_or(false);

        if !holds_match {
            continue;
        }

        let Some(rel) = relative_slash_path(entry.path(), &root) else {
            continue;
        };

        if filter::retain(&rel).is_some() && seen.insert(rel.clone()) {
            include_roots.push(rel);
        }
    }

    include_roots
}

/// Discover every source file under `root` whose directory survives the
/// discovery filters.
///
/// Returns absolute file paths in pre-order. Files directly under the root
/// are always retained since the root's empty relative path matches no
/// exclusion marker. No deduplication is applied; a file appears once per
/// its single physical location.
pub fn discover_source_files(root: &Path, source_extensions: &[&str]) -> Vec<PathBuf> {
    let root = absolute_root(root);

    let mut source_files = Vec::new();

    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() || !has_extension(entry.path(), source_extensions) {
            continue;
        }

        let dir = entry.path().parent().unwrap_or(&root);
        let Some(rel) = relative_slash_path(dir, &root) else {
            continue;
        };

        if filter::retain(&rel).is_some() {
            source_files.push(entry.into_path());
        }
    }

    source_files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_include_roots_order_and_exclusion() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("root.hpp"));
        touch(&root.join("sub/impl.hpp"));
        touch(&root.join("sub/build/generated.hpp"));

        let roots = discover_include_roots(root, &HEADER_EXTENSIONS);
        assert_eq!(roots, vec!["".to_string(), "sub".to_string()]);
    }

    #[test]
    fn test_include_roots_deduplicate_per_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("mod/a.hpp"));
        touch(&root.join("mod/b.hpp"));
        touch(&root.join("mod/c.cpp"));

        let roots = discover_include_roots(root, &HEADER_EXTENSIONS);
        assert_eq!(roots, vec!["mod".to_string()]);
    }

    #[test]
    fn test_include_roots_skip_vendored_samples() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("external_libraries/eigen/core.hpp"));
        touch(&root.join("external_libraries/eigen/sample/demo.hpp"));

        let roots = discover_include_roots(root, &HEADER_EXTENSIONS);
        assert_eq!(roots, vec!["external_libraries/eigen".to_string()]);
    }

    #[test]
    fn test_source_files_keep_root_and_filter_subdirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("main.cpp"));
        touch(&root.join("mod/impl.cpp"));
        touch(&root.join("mod/impl.hpp"));
        touch(&root.join("build/generated.cpp"));

        let files = discover_source_files(root, &SOURCE_EXTENSIONS);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        // Headers and build outputs are not translation units.
        assert_eq!(names, vec!["main.cpp".to_string(), "impl.cpp".to_string()]);
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("legacy/OLD.CPP"));

        let files = discover_source_files(root, &SOURCE_EXTENSIONS);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_root_yields_empty_results() {
        let missing = Path::new("/nonexistent/silgen-test-root");
        assert!(discover_include_roots(missing, &HEADER_EXTENSIONS).is_empty());
        assert!(discover_source_files(missing, &SOURCE_EXTENSIONS).is_empty());
    }
}
