//! Recursive lookup of question files under a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A question file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the discovery root.
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no .{extension} files found under {}", root.display())]
    NoSources { root: PathBuf, extension: String },
}

/// Collects every non-hidden file under `root` whose extension matches.
///
/// Directories are walked depth first and entries are visited in file name
/// order, so the result is stable between runs.
pub fn discover_sources<P: AsRef<Path>>(
    root: P,
    extension: &str,
) -> Result<Vec<SourceFile>, DiscoveryError> {
    let root = root.as_ref();
    let mut sources = Vec::new();

    walk(root, root, extension, &mut sources)?;

    if sources.is_empty() {
        return Err(DiscoveryError::NoSources {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    tracing::info!(root = %root.display(), count = sources.len(), "discovered question files");
    Ok(sources)
}

fn walk(
    root: &Path,
    dir: &Path,
    extension: &str,
    sources: &mut Vec<SourceFile>,
) -> Result<(), DiscoveryError> {
    let read_err = |source: io::Error| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        if is_hidden(&entry.file_name()) {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type().map_err(read_err)?;

        if file_type.is_dir() {
            walk(root, &path, extension, sources)?;
        } else if has_extension(&path, extension) {
            let display_name = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();
            sources.push(SourceFile { path, display_name });
        }
    }

    Ok(())
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, relative: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "[]").unwrap();
    }

    #[test]
    fn test_recurses_and_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.json");
        touch(dir.path(), "a.json");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "nested/c.JSON");

        let sources = discover_sources(dir.path(), "json").unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.display_name.as_str()).collect();

        let nested = Path::new("nested").join("c.JSON").display().to_string();

        assert_eq!(names, vec!["a.json", "b.json", nested.as_str()]);
    }

    #[test]
    fn test_skips_hidden_files_and_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".hidden.json");
        touch(dir.path(), ".git/config.json");
        touch(dir.path(), "visible.json");

        let sources = discover_sources(dir.path(), "json").unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].display_name, "visible.json");
    }

    #[test]
    fn test_empty_directory_is_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "readme.md");

        let err = discover_sources(dir.path(), "json").unwrap_err();
        assert!(matches!(err, DiscoveryError::NoSources { .. }));
    }

    #[test]
    fn test_missing_root_is_read_error() {
        let err = discover_sources("/definitely/not/here", "json").unwrap_err();
        assert!(matches!(err, DiscoveryError::ReadDir { .. }));
    }
}
