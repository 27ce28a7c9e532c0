use serde::{Deserialize, Serialize};

/// An additional generated artifact, such as a feed.
///
/// The template is rendered on its own (no base template) against the full
/// page list and written to `url` under the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Extra {
    /// Free-form kind of artifact (e.g. "rss")
    #[serde(default, rename = "type")]
    pub extra_type: String,

    /// Template file name inside the templates directory
    #[serde(default)]
    pub template: String,

    /// Output path relative to the output directory
    #[serde(default)]
    pub url: String,
}

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Site title
    pub title: String,

    /// Site description
    pub description: String,

    /// Base URL for the site
    pub baseurl: String,

    /// Site language (e.g. "en")
    pub language: String,

    /// Syntax highlighting theme name
    pub highlighting: String,

    /// Minify rendered HTML before writing it
    pub minify: bool,

    /// Additional generated artifacts
    pub extras: Vec<Extra>,

    /// Seed for the `random_n` template filter; unseeded when absent
    pub random_seed: Option<u64>,
}
