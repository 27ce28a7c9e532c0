mod types;
mod loader;
mod validation;

pub use types::*;
pub use loader::load_config;
