use std::path::PathBuf;

use log::info;

use crate::directory::DirectoryStructure;
use crate::utils::error::SiteResult;
use crate::utils::fs::{create_directory, write_file_if_absent};

const CONFIG: &str = include_str!("files/config.yaml");
const FIRST_POST: &str = include_str!("files/first.md");
const BASE_TEMPLATE: &str = include_str!("files/base.html");
const INDEX_TEMPLATE: &str = include_str!("files/index.html");
const POST_TEMPLATE: &str = include_str!("files/post.html");
const FEED_TEMPLATE: &str = include_str!("files/index.xml");

/// Files written by `--init`, relative to their directories
fn seed_files(dirs: &DirectoryStructure) -> Vec<(PathBuf, &'static str)> {
    vec![
        (dirs.config_file.clone(), CONFIG),
        (dirs.content_dir.join("first.md"), FIRST_POST),
        (dirs.templates_dir.join("base.html"), BASE_TEMPLATE),
        (dirs.templates_dir.join("index.html"), INDEX_TEMPLATE),
        (dirs.templates_dir.join("post.html"), POST_TEMPLATE),
        (dirs.templates_dir.join("index.xml"), FEED_TEMPLATE),
    ]
}

/// Handle the init command: scaffold the project directories and seed files.
///
/// Files that already exist are left untouched.
pub fn handle_init_command(dirs: &DirectoryStructure) -> SiteResult<()> {
    info!("Initializing new project in {}", dirs.root.display());

    for dir in dirs.scaffold_directories() {
        create_directory(dir)?;
        write_file_if_absent(dir.join(".gitkeep"), "")?;
    }

    for (path, contents) in seed_files(dirs) {
        if write_file_if_absent(&path, contents)? {
            info!("Created {}", path.display());
        } else {
            info!("{} already exists, leaving it untouched", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_site;
    use crate::utils::fs::{read_file, write_file};

    #[test]
    fn test_init_scaffolds_project() {
        let root = tempfile::tempdir().unwrap();
        let dirs = DirectoryStructure::new(root.path());

        handle_init_command(&dirs).unwrap();

        for dir in dirs.scaffold_directories() {
            assert!(dir.join(".gitkeep").is_file());
        }
        assert_eq!(read_file(&dirs.config_file).unwrap(), CONFIG);
        assert!(dirs.templates_dir.join("index.xml").is_file());
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let root = tempfile::tempdir().unwrap();
        let dirs = DirectoryStructure::new(root.path());
        write_file(&dirs.config_file, "title: Mine\n").unwrap();

        handle_init_command(&dirs).unwrap();
        handle_init_command(&dirs).unwrap();

        assert_eq!(read_file(&dirs.config_file).unwrap(), "title: Mine\n");
    }

    #[test]
    fn test_seeded_project_builds() {
        let root = tempfile::tempdir().unwrap();
        let dirs = DirectoryStructure::new(root.path());
        handle_init_command(&dirs).unwrap();

        let stats = build_site(&dirs).unwrap();
        assert_eq!(stats.pages_count, 1);

        let post = read_file(dirs.destination.join("first-post.html")).unwrap();
        assert!(post.contains("My first post"));

        let feed = read_file(dirs.destination.join("index.xml")).unwrap();
        assert!(feed.contains("<pubDate>Mon, 1 Jan 2024 00:00:00 +0000</pubDate>")
            || feed.contains("<pubDate>Mon, 01 Jan 2024 00:00:00 +0000</pubDate>"));
        assert!(dirs.destination.join("index.html").is_file());
    }
}
