use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use serde_yaml::Mapping;

/// A content file after rendering, one per Markdown file
#[derive(Debug, Clone)]
pub struct Page {
    /// Source Markdown file
    pub filepath: PathBuf,

    /// Rendered body HTML
    pub html: String,

    /// `html` with every tag removed
    pub text: String,

    /// One sentence picked from `text`
    pub summary: String,

    /// The complete front matter block
    pub meta: Mapping,

    pub title: String,
    pub page_type: String,

    /// Output path relative to `public/`, the front matter `url`
    pub rel_permalink: String,

    pub created: DateTime<FixedOffset>,
    pub draft: bool,
}
