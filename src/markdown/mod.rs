pub mod renderer;
pub mod utils;
pub mod engine;

pub use renderer::MarkdownRenderer;
pub use utils::html_to_text;
