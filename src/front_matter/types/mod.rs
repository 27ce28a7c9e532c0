mod front_matter;

pub use front_matter::{FrontMatter, ParsedFrontMatter, DATE_FORMAT};
