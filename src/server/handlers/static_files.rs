use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Page served with a 404 status for unknown paths, when the site has one
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Create a router for serving static files from a directory.
///
/// Directories resolve to their `index.html`; anything missing gets the
/// site's `404.html` with a 404 status.
pub fn create_static_files_handler(directory: &Path) -> Router {
    let serve_dir = ServeDir::new(directory)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(directory.join(NOT_FOUND_PAGE)));

    Router::new().fallback_service(serve_dir)
}
