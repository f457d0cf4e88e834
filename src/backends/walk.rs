//! Directory walking backend
//!
//! Uses walkdir for traversal. Directories whose path (relative to the root)
//! contains an exclusion marker are pruned, so nothing beneath them is yielded.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::model::RebrandError;
use crate::core::paths::{is_excluded, make_relative};

/// An entry produced by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    /// A candidate file (not yet extension-filtered)
    File(PathBuf),
    /// A directory pruned by an exclusion marker
    SkippedDir(PathBuf),
    /// A directory below the root that could not be read
    Error(String),
}

/// Lazy walk over a root directory
pub struct Walker {
    root: PathBuf,
    markers: Vec<String>,
    inner: walkdir::IntoIter,
}

/// Start walking `root`.
///
/// Fails immediately if the root is missing, not a directory, or cannot be
/// listed; errors deeper in the tree are yielded as [`WalkEntry::Error`].
pub fn walk_files(root: &Path, markers: &[String]) -> Result<Walker, RebrandError> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RebrandError::RootNotFound(root.to_path_buf()),
        _ => RebrandError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    if !metadata.is_dir() {
        return Err(RebrandError::Walk {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    fs::read_dir(root).map_err(|e| RebrandError::Walk {
        path: root.to_path_buf(),
        message: e.to_string(),
    })?;

    let inner = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    Ok(Walker {
        root: root.to_path_buf(),
        markers: markers.to_vec(),
        inner,
    })
}

impl Iterator for Walker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(e) => return Some(WalkEntry::Error(e.to_string())),
            };

            // The root itself is never tested against the markers
            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                let relative = make_relative(entry.path(), &self.root).unwrap_or(entry.path());
                if is_excluded(relative, &self.markers) {
                    self.inner.skip_current_dir();
                    return Some(WalkEntry::SkippedDir(entry.into_path()));
                }
                continue;
            }

            // Symlinks to regular files are processed; links to directories are not followed
            if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                return Some(WalkEntry::File(entry.into_path()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn markers() -> Vec<String> {
        vec![
            "node_modules".to_string(),
            ".next".to_string(),
            ".git".to_string(),
        ]
    }

    fn files(root: &Path) -> Vec<String> {
        walk_files(root, &markers())
            .unwrap()
            .filter_map(|e| match e {
                WalkEntry::File(p) => Some(
                    p.strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .replace('\\', "/"),
                ),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_walk_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(files(temp.path()).is_empty());
    }

    #[test]
    fn test_walk_recurses_sorted() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/components")).unwrap();
        File::create(temp.path().join("b.md")).unwrap();
        File::create(temp.path().join("a.md")).unwrap();
        File::create(temp.path().join("src/components/nav.tsx")).unwrap();

        assert_eq!(
            files(temp.path()),
            vec!["a.md", "b.md", "src/components/nav.tsx"]
        );
    }

    #[test]
    fn test_walk_prunes_excluded_dirs() {
        let temp = tempdir().unwrap();
        for dir in ["node_modules/pkg", ".next/cache", ".git/refs", ".github", "src"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        File::create(temp.path().join("node_modules/pkg/index.js")).unwrap();
        File::create(temp.path().join(".next/cache/page.js")).unwrap();
        File::create(temp.path().join(".git/refs/HEAD.md")).unwrap();
        File::create(temp.path().join(".github/README.md")).unwrap();
        File::create(temp.path().join("src/app.ts")).unwrap();

        assert_eq!(files(temp.path()), vec!["src/app.ts"]);
    }

    #[test]
    fn test_walk_reports_skipped_dirs_once() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/a/b")).unwrap();

        let skipped: Vec<_> = walk_files(temp.path(), &markers())
            .unwrap()
            .filter(|e| matches!(e, WalkEntry::SkippedDir(_)))
            .collect();
        assert_eq!(
            skipped,
            vec![WalkEntry::SkippedDir(temp.path().join("node_modules"))]
        );
    }

    #[test]
    fn test_marker_in_file_name_is_not_excluded() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("notes.git.md")).unwrap();
        assert_eq!(files(temp.path()), vec!["notes.git.md"]);
    }

    #[test]
    fn test_root_is_never_excluded() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("site.git");
        fs::create_dir_all(root.join("docs")).unwrap();
        File::create(root.join("docs/intro.md")).unwrap();

        assert_eq!(files(&root), vec!["docs/intro.md"]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = tempdir().unwrap();
        let err = walk_files(&temp.path().join("missing"), &markers())
            .err()
            .unwrap();
        assert!(matches!(err, RebrandError::RootNotFound(_)));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.md");
        File::create(&file).unwrap();

        let err = walk_files(&file, &markers()).err().unwrap();
        assert!(matches!(err, RebrandError::Walk { .. }));
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_fatal() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("site");
        fs::create_dir_all(&root).unwrap();
        File::create(root.join("a.md")).unwrap();
        set_mode(&root, 0o000);

        // Permission bits do not apply to root
        if fs::read_dir(&root).is_ok() {
            set_mode(&root, 0o755);
            return;
        }

        let result = walk_files(&root, &markers());
        set_mode(&root, 0o755);

        assert!(matches!(result.err(), Some(RebrandError::Walk { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_is_yielded_as_error() {
        let temp = tempdir().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        File::create(locked.join("hidden.md")).unwrap();
        File::create(temp.path().join("open.md")).unwrap();
        set_mode(&locked, 0o000);

        if fs::read_dir(&locked).is_ok() {
            set_mode(&locked, 0o755);
            return;
        }

        let entries: Vec<_> = walk_files(temp.path(), &markers()).unwrap().collect();
        set_mode(&locked, 0o755);

        assert_eq!(
            entries
                .iter()
                .filter(|e| matches!(e, WalkEntry::Error(_)))
                .count(),
            1
        );
        assert!(entries.contains(&WalkEntry::File(temp.path().join("open.md"))));
        assert!(!entries.contains(&WalkEntry::File(locked.join("hidden.md"))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_yielded() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("real")).unwrap();
        File::create(temp.path().join("real/doc.md")).unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("real/doc.md"),
            temp.path().join("link.md"),
        )
        .unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("linkdir")).unwrap();

        assert_eq!(files(temp.path()), vec!["link.md", "real/doc.md"]);
    }
}
