//! Path filtering utilities
//!
//! Both checks are plain string tests: exclusion markers match anywhere in a
//! directory path, extensions match the end of a file name.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check whether a directory path contains any exclusion marker.
///
/// This is a substring test, so `.git` also excludes `.github` and
/// `my.git-stuff`.
pub fn is_excluded(dir: &Path, markers: &[String]) -> bool {
    let path = normalize_path(dir);
    markers
        .iter()
        .any(|marker| !marker.is_empty() && path.contains(marker.as_str()))
}

/// Check whether a file name ends with one of the allowed extensions (case-sensitive)
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Make a path relative to the root directory
pub fn make_relative<'a>(path: &'a Path, root: &Path) -> Option<&'a Path> {
    path.strip_prefix(root).ok()
}
