use log::info;

use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::utils::error::{SiteError, SiteResult};

/// Serve the built site until the server stops or Ctrl+C is pressed
pub async fn serve(server_config: &ServerConfig) -> SiteResult<()> {
    let destination = &server_config.root;

    if !destination.is_dir() {
        return Err(SiteError::Server(format!(
            "Destination directory {} does not exist, build the site first",
            destination.display()
        )));
    }

    let addr = server_config.socket_addr()?;
    let app = create_app(destination);

    info!("Serving files from {}", destination.display());
    info!("Server running at {}", server_config.url());

    let server = axum_server::bind(addr).serve(app.into_make_service());

    tokio::select! {
        result = server => {
            result.map_err(|e| SiteError::Server(format!("Server error on {}: {}", addr, e)))?;
            info!("Server stopped");
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refuses_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::new(dir.path().join("public"));

        let err = serve(&config).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
