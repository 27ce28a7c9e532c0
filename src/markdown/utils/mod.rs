mod text;

pub use text::html_to_text;
