use std::path::{Path, PathBuf};

use crate::directory::types::DirectoryType;

/// File name of the site configuration, relative to the project root
pub const CONFIG_FILE: &str = "config.yaml";

/// Manages the directory structure of a project
#[derive(Debug, Clone)]
pub struct DirectoryStructure {
    /// Project root (`PROJECT_ROOT`, defaults to `./`)
    pub root: PathBuf,

    /// Site configuration file
    pub config_file: PathBuf,

    // Input directories
    pub content_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,

    /// Output site directory
    pub destination: PathBuf,
}

impl DirectoryStructure {
    /// Create the directory structure rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();

        DirectoryStructure {
            config_file: root.join(CONFIG_FILE),
            content_dir: root.join("content"),
            templates_dir: root.join("templates"),
            static_dir: root.join("static"),
            destination: root.join("public"),
            root,
        }
    }

    /// Get a specific directory based on type
    pub fn get_directory(&self, dir_type: DirectoryType) -> &Path {
        match dir_type {
            DirectoryType::Content => &self.content_dir,
            DirectoryType::Templates => &self.templates_dir,
            DirectoryType::Static => &self.static_dir,
            DirectoryType::Site => &self.destination,
        }
    }

    /// Directories created by `--init`, in creation order
    pub fn scaffold_directories(&self) -> [&Path; 3] {
        [
            self.get_directory(DirectoryType::Templates),
            self.get_directory(DirectoryType::Content),
            self.get_directory(DirectoryType::Static),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_rooted() {
        let dirs = DirectoryStructure::new("/srv/blog");
        assert_eq!(dirs.config_file, PathBuf::from("/srv/blog/config.yaml"));
        assert_eq!(dirs.content_dir, PathBuf::from("/srv/blog/content"));
        assert_eq!(dirs.templates_dir, PathBuf::from("/srv/blog/templates"));
        assert_eq!(dirs.static_dir, PathBuf::from("/srv/blog/static"));
        assert_eq!(dirs.get_directory(DirectoryType::Site), Path::new("/srv/blog/public"));
    }
}
