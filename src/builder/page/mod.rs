mod model;
pub mod loader;
mod collector;
mod utils;

pub use model::Page;
pub use loader::load_page;
pub use collector::collect_markdown_files;
pub use utils::sort_pages;
