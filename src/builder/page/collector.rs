use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{SiteError, SiteResult};
use crate::utils::path::is_markdown;

/// Collect every Markdown file under the content directory.
///
/// Files are returned in sorted file-name order; a missing directory is an
/// error.
pub fn collect_markdown_files(content_dir: &Path) -> SiteResult<Vec<PathBuf>> {
    debug!("Scanning {} for content files", content_dir.display());

    if !content_dir.is_dir() {
        return Err(SiteError::Content {
            path: content_dir.to_path_buf(),
            message: "content directory not found".to_string(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(content_dir).sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| SiteError::Content {
            path: e.path().unwrap_or(content_dir).to_path_buf(),
            message: e.to_string(),
        })?;

        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} content files", files.len());
    Ok(files)
}
