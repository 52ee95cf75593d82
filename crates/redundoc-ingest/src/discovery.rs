//! Source file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["java"];

/// Collects source files under `root`.
///
/// A file path is returned as-is regardless of its extension. A directory is
/// walked recursively; hidden entries (names starting with `.`) and
/// symlinked directories are skipped, and files are matched against
/// `extensions` case-insensitively. Symlinked files are followed.
///
/// Returns paths sorted.
pub fn discover_sources<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(IngestError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    walk(root, extensions, &mut files)?;
    files.sort();
    tracing::debug!(root = %root.display(), files = files.len(), "discovered sources");
    Ok(files)
}

fn walk<S: AsRef<str>>(dir: &Path, extensions: &[S], files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            continue;
        }

        // `DirEntry::file_type` does not follow symlinks.
        let file_type = entry.file_type().map_err(|e| IngestError::DirectoryRead {
            path: path.clone(),
            source: e,
        })?;
        if file_type.is_dir() {
            walk(&path, extensions, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping symlinked directory");
        } else if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    Ok(())
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|wanted| ext.eq_ignore_ascii_case(wanted.as_ref().trim_start_matches('.')))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["b/Customer.java", "a/Order.JAVA", "a/notes.txt", ".git/X.java"] {
            let path = dir.path().join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "class X {}").unwrap();
        }

        dir
    }

    #[test]
    fn test_discover_sources_recursively() {
        let dir = create_test_dir();
        let files = discover_sources(dir.path(), DEFAULT_EXTENSIONS).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Order.JAVA", "Customer.java"]);
    }

    #[test]
    fn test_explicit_file_is_kept() {
        let dir = create_test_dir();
        let file = dir.path().join("a/notes.txt");
        let files = discover_sources(&file, DEFAULT_EXTENSIONS).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = create_test_dir();
        let files = discover_sources(dir.path(), &[".txt"]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let dir = create_test_dir();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("b/loop")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("b/Customer.java"),
            dir.path().join("a/Alias.java"),
        )
        .unwrap();

        let files = discover_sources(dir.path(), DEFAULT_EXTENSIONS).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Alias.java", "Order.JAVA", "Customer.java"]);
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let result = discover_sources(&dir.path().join("missing"), DEFAULT_EXTENSIONS);
        assert!(matches!(result, Err(IngestError::NotFound { .. })));
    }
}
