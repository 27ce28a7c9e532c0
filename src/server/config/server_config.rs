use std::net::SocketAddr;
use std::path::PathBuf;

use crate::utils::error::{SiteError, SiteResult};

/// Address the preview server binds to
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Port the preview server listens on
pub const DEFAULT_PORT: u16 = 6969;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on
    pub port: u16,

    /// Directory to serve, the built site
    pub root: PathBuf,
}

impl ServerConfig {
    /// Serve `root` on the default address and port
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        ServerConfig {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            root: root.into(),
        }
    }

    /// Get the address string for binding
    pub fn address_string(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SiteResult<SocketAddr> {
        self.address_string()
            .parse()
            .map_err(|e| {
                SiteError::Server(format!("Invalid address {}: {}", self.address_string(), e))
            })
    }

    /// Get the URL for the server
    pub fn url(&self) -> String {
        format!("http://{}/", self.address_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::new("public");
        assert_eq!(config.url(), "http://127.0.0.1:6969/");
        assert_eq!(config.socket_addr().unwrap().port(), 6969);
    }

    #[test]
    fn test_bad_address() {
        let config = ServerConfig {
            address: "not an address".to_string(),
            ..ServerConfig::new("public")
        };
        assert!(matches!(config.socket_addr(), Err(SiteError::Server(_))));
    }
}
