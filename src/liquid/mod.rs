mod filters;

use liquid::{Object, Parser, ParserBuilder};
use log::debug;

use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};

pub use filters::register_filters;

/// Create the Liquid parser used for every template, with the site filters
pub fn create_parser(config: &Config) -> SiteResult<Parser> {
    let parser_builder = register_filters(ParserBuilder::with_stdlib(), config);

    parser_builder
        .build()
        .map_err(|e| SiteError::Template(format!("Failed to create Liquid parser: {}", e)))
}

/// Parse and render `source` in one step; `name` identifies it in errors
pub fn render_source(
    parser: &Parser,
    name: &str,
    source: &str,
    globals: &Object,
) -> SiteResult<String> {
    let template = parser
        .parse(source)
        .map_err(|e| SiteError::Template(format!("Failed to parse template {}: {}", name, e)))?;

    template.render(globals).map_err(|e| {
        debug!("Error rendering {}: {}", name, e);
        SiteError::Template(format!("Failed to render template {}: {}", name, e))
    })
}
