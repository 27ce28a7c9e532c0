use log::info;

use crate::directory::DirectoryStructure;
use crate::server::{self, ServerConfig};
use crate::utils::error::SiteResult;

/// Handle the server command: serve the already built `public/`
pub async fn handle_serve_command(dirs: &DirectoryStructure) -> SiteResult<()> {
    let server_config = ServerConfig::new(&dirs.destination);
    info!("Starting server at {}", server_config.url());

    server::serve(&server_config).await
}
