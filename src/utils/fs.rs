use std::fs;
use std::path::Path;

use crate::utils::error::{SiteError, SiteResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| SiteError::io(path.as_ref(), e))
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> SiteResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| SiteError::io(path.as_ref(), e))
}

/// Write a string to a file, creating the file and its parent directories
/// if they don't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents).map_err(|e| SiteError::io(path.as_ref(), e))
}

/// Write a file only if nothing exists at `path` yet.
///
/// Returns `true` when the file was written.
pub fn write_file_if_absent<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<bool> {
    if path.as_ref().exists() {
        return Ok(false);
    }

    write_file(path, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c.txt");

        write_file(&target, "hello").unwrap();
        assert_eq!(read_file(&target).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_if_absent_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("config.yaml");

        assert!(write_file_if_absent(&target, "first").unwrap());
        assert!(!write_file_if_absent(&target, "second").unwrap());
        assert_eq!(read_file(&target).unwrap(), "first");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let err = read_file("/definitely/not/here.md").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}
