use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::{Object, Parser};
use log::debug;

use crate::liquid::render_source;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

/// Outer template every page and the index are wrapped in
pub const BASE_TEMPLATE: &str = "base.html";

/// Template for the index page
pub const INDEX_TEMPLATE: &str = "index.html";

/// Renders templates from the templates directory
pub struct LayoutRenderer {
    /// Templates directory
    templates_dir: PathBuf,

    /// Liquid parser with the site filters registered
    parser: Parser,
}

impl LayoutRenderer {
    /// Create a new layout renderer
    pub fn new<P: AsRef<Path>>(templates_dir: P, parser: Parser) -> Self {
        LayoutRenderer {
            templates_dir: templates_dir.as_ref().to_path_buf(),
            parser,
        }
    }

    /// Render the template of a page type (`<type>.html`) inside the base
    pub fn render_page(&self, page_type: &str, globals: &Object) -> SiteResult<String> {
        self.render_with_base(&format!("{}.html", page_type), globals)
    }

    /// Render the index template inside the base
    pub fn render_index(&self, globals: &Object) -> SiteResult<String> {
        self.render_with_base(INDEX_TEMPLATE, globals)
    }

    /// Render `name`, then render the base template with that output as
    /// `content` and the same globals
    pub fn render_with_base(&self, name: &str, globals: &Object) -> SiteResult<String> {
        let content = self.render_standalone(name, globals)?;

        let mut render_globals = globals.clone();
        render_globals.insert("content".into(), Value::scalar(content));

        self.render_standalone(BASE_TEMPLATE, &render_globals)
    }

    /// Render a single template with no base
    pub fn render_standalone(&self, name: &str, globals: &Object) -> SiteResult<String> {
        let template_path = self.find_template(name)?;
        debug!("Using template: {}", template_path.display());

        let source = fs::read_file(&template_path)?;
        render_source(&self.parser, name, &source, globals)
    }

    /// Find a template file by name
    fn find_template(&self, name: &str) -> SiteResult<PathBuf> {
        let template_path = self.templates_dir.join(name);

        if template_path.is_file() {
            return Ok(template_path);
        }

        Err(SiteError::Template(format!(
            "Template not found: {}",
            template_path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::liquid::create_parser;
    use crate::utils::fs::write_file;
    use liquid::object;

    fn renderer(dir: &Path) -> LayoutRenderer {
        LayoutRenderer::new(dir, create_parser(&Config::default()).unwrap())
    }

    #[test]
    fn test_page_is_wrapped_in_base() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path().join("base.html"), "<main>{{ content }}</main>").unwrap();
        write_file(dir.path().join("post.html"), "<h1>{{ page.title }}</h1>").unwrap();

        let globals = object!({ "page": { "title": "Hello" } });
        let html = renderer(dir.path()).render_page("post", &globals).unwrap();

        assert_eq!(html, "<main><h1>Hello</h1></main>");
    }

    #[test]
    fn test_base_sees_the_same_globals() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path().join("base.html"), "<title>{{ config.title }}</title>{{ content }}").unwrap();
        write_file(dir.path().join("index.html"), "{{ pages.size }}").unwrap();

        let globals = object!({ "config": { "title": "Blog" }, "pages": [1, 2] });
        let html = renderer(dir.path()).render_index(&globals).unwrap();

        assert_eq!(html, "<title>Blog</title>2");
    }

    #[test]
    fn test_standalone_skips_base() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path().join("base.html"), "BASE {{ content }}").unwrap();
        write_file(dir.path().join("index.xml"), "<rss>{{ config.title }}</rss>").unwrap();

        let globals = object!({ "config": { "title": "Blog" } });
        let xml = renderer(dir.path()).render_standalone("index.xml", &globals).unwrap();

        assert_eq!(xml, "<rss>Blog</rss>");
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path().join("base.html"), "{{ content }}").unwrap();

        let err = renderer(dir.path())
            .render_page("note", &Object::new())
            .unwrap_err();
        assert!(matches!(err, SiteError::Template(_)));
        assert!(err.to_string().contains("note.html"));
    }
}
