use std::path::Path;

use axum::Router;

use crate::server::handlers::create_static_files_handler;

/// Create the application router serving the built site
pub fn create_app(destination: &Path) -> Router {
    Router::new().merge(create_static_files_handler(destination))
}
