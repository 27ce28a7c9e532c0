use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::renderer::syntax::SyntaxHighlighter;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
    syntax_highlighter: SyntaxHighlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new markdown renderer using the config's highlighting theme
    pub fn new(config: &Config) -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
            syntax_highlighter: SyntaxHighlighter::new(&config.highlighting),
        }
    }

    /// Render Markdown content to HTML, highlighting fenced code blocks
    pub fn render(&self, content: &str) -> String {
        let html = render_markdown(content, &self.options);
        self.syntax_highlighter.highlight_html(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::new(&Config::default());
        let html = renderer.render("# Hello, World!\n\nThis is a **bold** statement.");

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_syntax_highlighting() {
        let config = Config {
            highlighting: "base16-ocean.dark".to_string(),
            ..Config::default()
        };
        let renderer = MarkdownRenderer::new(&config);
        let html = renderer.render("```rust\nfn main() {}\n```");

        assert!(!html.contains("language-rust"));
        assert!(html.contains("<pre style="));
    }
}
