mod args;
mod date_to_rfc822;
mod filter_by_type;
mod first_n;
mod last_n;
mod random_n;

use liquid::ParserBuilder;

use crate::config::Config;

/// Register custom filters for use in Liquid templates
pub fn register_filters(parser_builder: ParserBuilder, config: &Config) -> ParserBuilder {
    parser_builder
        .filter(first_n::FirstNFilterParser)
        .filter(last_n::LastNFilterParser)
        .filter(random_n::RandomNFilterParser::new(config.random_seed))
        .filter(filter_by_type::FilterByTypeFilterParser)
        .filter(date_to_rfc822::DateToRfc822FilterParser)
}
