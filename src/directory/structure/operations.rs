use log::{debug, info};

use crate::directory::utils::copy_static_files;
use crate::utils::error::SiteResult;
use crate::utils::fs::create_directory;
use super::directory_structure::DirectoryStructure;

impl DirectoryStructure {
    /// Create required directories for site generation
    pub fn create_site_directories(&self) -> SiteResult<()> {
        if !self.destination.exists() {
            create_directory(&self.destination)?;
            debug!("Created destination directory: {}", self.destination.display());
        }

        Ok(())
    }

    /// Copy the static assets directory into the destination.
    ///
    /// A project without a static directory has nothing to copy.
    pub fn copy_static_files(&self) -> SiteResult<usize> {
        if !self.static_dir.is_dir() {
            info!("No static directory at {}, skipping", self.static_dir.display());
            return Ok(0);
        }

        copy_static_files(&self.static_dir, &self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_copy_without_static_dir_is_noop() {
        let root = tempfile::tempdir().unwrap();
        let dirs = DirectoryStructure::new(root.path());

        dirs.create_site_directories().unwrap();
        assert_eq!(dirs.copy_static_files().unwrap(), 0);
        assert!(dirs.destination.is_dir());
    }

    #[test]
    fn test_copy_static_into_public() {
        let root = tempfile::tempdir().unwrap();
        let dirs = DirectoryStructure::new(root.path());
        fs::create_dir_all(dirs.static_dir.join("img")).unwrap();
        fs::write(dirs.static_dir.join("img/logo.svg"), "<svg/>").unwrap();

        dirs.create_site_directories().unwrap();
        assert_eq!(dirs.copy_static_files().unwrap(), 1);
        assert!(dirs.destination.join("img/logo.svg").is_file());
    }
}
