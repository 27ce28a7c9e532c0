use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Common result type for site operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for site operations.
///
/// Every variant is fatal for a build: the pipeline stops at the first one.
#[derive(Debug, Error)]
pub enum SiteError {
    /// IO error with the path it happened on
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content directory or content file problems
    #[error("Content error in {}: {message}", path.display())]
    Content { path: PathBuf, message: String },

    /// Missing, malformed, or mistyped front matter
    #[error("Front matter error in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },

    /// Template lookup, parse, or render failure
    #[error("Template error: {0}")]
    Template(String),

    /// Minification failure
    #[error("Minify error: {0}")]
    Minify(String),

    /// An output url that would resolve outside the output directory
    #[error("Refusing to write outside the output directory: {0}")]
    UnsafeOutputPath(String),

    /// Static asset copy failure
    #[error("Copy error: {0}")]
    Copy(String),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

impl SiteError {
    /// Wrap an `io::Error` together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
