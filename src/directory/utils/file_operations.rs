use std::path::Path;

use fs_extra::dir::{self, CopyOptions};
use log::debug;

use crate::utils::error::{SiteError, SiteResult};

/// Copy every file under `source` into `destination`, preserving relative
/// paths and overwriting whatever is already there.
///
/// Returns the number of files copied.
pub fn copy_static_files(source: &Path, destination: &Path) -> SiteResult<usize> {
    debug!("Copying from {} to {}", source.display(), destination.display());

    let content = dir::get_dir_content(source)
        .map_err(|e| SiteError::Copy(format!("{}: {}", source.display(), e)))?;

    let options = CopyOptions::new().overwrite(true).content_only(true);
    dir::copy(source, destination, &options).map_err(|e| {
        SiteError::Copy(format!(
            "{} -> {}: {}",
            source.display(),
            destination.display(),
            e
        ))
    })?;

    for file in &content.files {
        debug!("Copied static file: {}", file);
    }

    Ok(content.files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_copy_preserves_tree_and_overwrites() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        fs::create_dir_all(src.path().join("css")).unwrap();
        fs::write(src.path().join("css/site.css"), "body {}").unwrap();
        fs::write(src.path().join("robots.txt"), "User-agent: *").unwrap();
        fs::write(dst.path().join("robots.txt"), "stale").unwrap();

        let copied = copy_static_files(src.path(), dst.path()).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.path().join("css/site.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dst.path().join("robots.txt")).unwrap(), "User-agent: *");
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dst = tempfile::tempdir().unwrap();
        let err = copy_static_files(&dst.path().join("nope"), dst.path()).unwrap_err();
        assert!(matches!(err, SiteError::Copy(_)));
    }
}
