use std::path::Path;

use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{SiteError, SiteResult};

/// Load site configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> SiteResult<Config> {
    let config_path = config_path.as_ref();

    if !config_path.exists() {
        return Err(SiteError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());

    let content = std::fs::read_to_string(config_path).map_err(|e| {
        SiteError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let config = parse_config(&content).map_err(|e| match e {
        SiteError::Config(msg) => SiteError::Config(format!("{} ({})", msg, config_path.display())),
        other => other,
    })?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse and validate a YAML configuration document
pub fn parse_config(content: &str) -> SiteResult<Config> {
    // An empty document is a valid, all-default configuration
    let config: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(content).map_err(|e| {
            SiteError::Config(format!("Failed to parse YAML configuration: {}", e))
        })?
    };

    validation::validate_config(&config)?;
    Ok(config)
}
