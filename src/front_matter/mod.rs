pub mod types;
pub mod utils;
pub mod parser;

// Re-export the most common items for convenience
pub use types::FrontMatter;
pub use parser::parse as parse_front_matter;
