//! File operations module
//! Provides the in-place rename used by the rename workflow

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File operation errors
#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, FileOpError>;

/// File operations trait
pub trait FileOperations {
    /// Rename a file
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Default implementation of file operations, backed by `std::fs`
#[derive(Debug, Default)]
pub struct DefaultFileOperations;

impl DefaultFileOperations {
    pub fn new() -> Self {
        Self
    }
}

impl FileOperations for DefaultFileOperations {
    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(FileOpError::NotFound(from.to_path_buf()));
        }

        // On case-insensitive file systems `to` "exists" when only the case changes;
        // that is only a change of case if both names open the same file
        if to.exists() && !(is_case_variant(from, to) && is_same_file(from, to)) {
            return Err(FileOpError::AlreadyExists(to.to_path_buf()));
        }

        std::fs::rename(from, to)?;
        tracing::info!("Renamed: {} -> {}", from.display(), to.display());

        Ok(())
    }
}

fn is_case_variant(a: &Path, b: &Path) -> bool {
    a != b && a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

/// Canonical paths carry the on-disk case, so two distinct files never match
#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rename() {
        let temp_dir = TempDir::new().unwrap();
        let ops = DefaultFileOperations::new();
        let from = temp_dir.path().join("cat.jpg");
        let to = temp_dir.path().join("kitten.jpg");

        fs::write(&from, b"test").unwrap();

        assert!(ops.rename(&from, &to).is_ok());
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"test");
    }

    #[test]
    fn test_rename_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let ops = DefaultFileOperations::new();
        let from = temp_dir.path().join("ghost.png");
        let to = temp_dir.path().join("real.png");

        assert!(matches!(ops.rename(&from, &to), Err(FileOpError::NotFound(_))));
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let temp_dir = TempDir::new().unwrap();
        let ops = DefaultFileOperations::new();
        let from = temp_dir.path().join("cat.jpg");
        let to = temp_dir.path().join("dog.jpg");

        fs::write(&from, b"cat").unwrap();
        fs::write(&to, b"dog").unwrap();

        assert!(matches!(ops.rename(&from, &to), Err(FileOpError::AlreadyExists(_))));
        assert_eq!(fs::read(&from).unwrap(), b"cat");
        assert_eq!(fs::read(&to).unwrap(), b"dog");
    }

    #[test]
    fn test_case_only_rename() {
        let temp_dir = TempDir::new().unwrap();
        let ops = DefaultFileOperations::new();
        let from = temp_dir.path().join("Cat.jpg");
        let to = temp_dir.path().join("cat.jpg");

        fs::write(&from, b"cat").unwrap();

        ops.rename(&from, &to).unwrap();
        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("cat.jpg")]);
        assert_eq!(fs::read(&to).unwrap(), b"cat");
    }

    #[test]
    fn test_case_variant_of_another_file_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let ops = DefaultFileOperations::new();
        let from = temp_dir.path().join("Cat.jpg");
        let to = temp_dir.path().join("cat.jpg");

        fs::write(&from, b"UPPER").unwrap();
        fs::write(&to, b"lower").unwrap();
        if fs::read_dir(temp_dir.path()).unwrap().count() != 2 {
            // Case-insensitive file system: both names are the same file
            return;
        }

        assert!(matches!(ops.rename(&from, &to), Err(FileOpError::AlreadyExists(_))));
        assert_eq!(fs::read(&from).unwrap(), b"UPPER");
        assert_eq!(fs::read(&to).unwrap(), b"lower");
    }

    #[test]
    fn test_case_variant() {
        assert!(is_case_variant(Path::new("Cat.jpg"), Path::new("cat.jpg")));
        assert!(!is_case_variant(Path::new("cat.jpg"), Path::new("cat.jpg")));
        assert!(!is_case_variant(Path::new("cat.jpg"), Path::new("dog.jpg")));
    }
}
