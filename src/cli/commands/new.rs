use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use log::info;

use crate::directory::DirectoryStructure;
use crate::front_matter::types::{FrontMatter, DATE_FORMAT};
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs::write_file_if_absent;

/// Body of a freshly created page
const PLACEHOLDER_BODY: &str = "Content...";

/// Handle the new command: create a draft page dated now
pub fn handle_new_command(dirs: &DirectoryStructure, title: &str) -> SiteResult<PathBuf> {
    let path = new_page(dirs, title, Local::now().fixed_offset())?;
    info!("Page `{}` created", path.display());
    Ok(path)
}

/// Write `content/<YYYY-MM-DD>-<slug>.md` as a draft post dated `now`.
///
/// An existing file with the same name is never overwritten.
pub fn new_page(
    dirs: &DirectoryStructure,
    title: &str,
    now: DateTime<FixedOffset>,
) -> SiteResult<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        return Err(SiteError::Content {
            path: dirs.content_dir.clone(),
            message: format!("title '{}' gives an empty file name", title),
        });
    }

    let front_matter = FrontMatter {
        title: title.to_string(),
        url: format!("{}.html", slug),
        date: now.format(DATE_FORMAT).to_string(),
        page_type: "post".to_string(),
        draft: true,
    };
    let yaml = serde_yaml::to_string(&front_matter).map_err(|e| SiteError::Content {
        path: dirs.content_dir.clone(),
        message: format!("failed to write front matter: {}", e),
    })?;

    let path = dirs
        .content_dir
        .join(format!("{}-{}.md", now.format("%Y-%m-%d"), slug));
    let source = format!("---\n{}---\n\n{}\n", yaml, PLACEHOLDER_BODY);

    if !write_file_if_absent(&path, &source)? {
        return Err(SiteError::Content {
            path,
            message: "a page with this name already exists".to_string(),
        });
    }

    Ok(path)
}
