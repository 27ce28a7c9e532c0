use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};

/// Validate the configuration
pub fn validate_config(config: &Config) -> SiteResult<()> {
    validate_extras(config)?;

    Ok(())
}

/// Every extra needs a template to render and a url to write to
fn validate_extras(config: &Config) -> SiteResult<()> {
    for (idx, extra) in config.extras.iter().enumerate() {
        if extra.template.trim().is_empty() {
            return Err(SiteError::Config(format!(
                "extras[{}] has no template",
                idx
            )));
        }

        if extra.url.trim().is_empty() {
            return Err(SiteError::Config(format!(
                "extras[{}] ({}) has no url",
                idx, extra.template
            )));
        }
    }

    Ok(())
}
