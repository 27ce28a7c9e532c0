use std::path::Path;

use log::{debug, warn};

use crate::builder::page::model::Page;
use crate::front_matter::{parse_front_matter, FrontMatter};
use crate::markdown::{html_to_text, MarkdownRenderer};
use crate::summary::summarize;
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Read a content file from disk and build its page
pub fn load_page(path: &Path, renderer: &MarkdownRenderer) -> SiteResult<Page> {
    let source = fs::read_file(path)?;
    build_page(path, &source, renderer)
}

/// Build a page from the source of a content file.
///
/// The front matter must be present and carry every required key. A `date`
/// that does not follow the fixed format gives the page the zero timestamp.
pub fn build_page(path: &Path, source: &str, renderer: &MarkdownRenderer) -> SiteResult<Page> {
    debug!("Building page from {}", path.display());

    let parsed = parse_front_matter(path, source)?;
    let html = renderer.render(&parsed.body);
    let text = html_to_text(&html);
    let summary = summarize(&text);

    let fields = parsed.fields;
    let created = fields.created().unwrap_or_else(|| {
        warn!(
            "Unparseable date '{}' in {}, using the zero timestamp",
            fields.date,
            path.display()
        );
        FrontMatter::zero_timestamp()
    });

    Ok(Page {
        filepath: path.to_path_buf(),
        html,
        text,
        summary,
        meta: parsed.meta,
        title: fields.title,
        page_type: fields.page_type,
        rel_permalink: fields.url,
        created,
        draft: fields.draft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::utils::error::SiteError;

    fn renderer() -> MarkdownRenderer<'static> {
        MarkdownRenderer::new(&Config::default())
    }

    #[test]
    fn test_build_page() {
        let source = "---\ntitle: Hello\nurl: hello.html\ndate: 2024-01-01T00:00:00+00:00\ntype: post\ndraft: false\nauthor: Ada\n---\nWorld\n";
        let page = build_page(Path::new("content/hello.md"), source, &renderer()).unwrap();

        assert_eq!(page.title, "Hello");
        assert_eq!(page.page_type, "post");
        assert_eq!(page.rel_permalink, "hello.html");
        assert_eq!(page.html.trim(), "<p>World</p>");
        assert_eq!(page.text.trim(), "World");
        assert_eq!(page.summary, "World");
        assert_eq!(page.created.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert!(!page.draft);
        assert!(page.meta.contains_key("author"));
    }

    #[test]
    fn test_bad_date_gets_zero_timestamp() {
        let source = "---\ntitle: Old\nurl: old.html\ndate: yesterday\ntype: post\ndraft: true\n---\nText.\n";
        let page = build_page(Path::new("content/old.md"), source, &renderer()).unwrap();

        assert_eq!(page.created, FrontMatter::zero_timestamp());
        assert!(page.draft);
    }

    #[test]
    fn test_missing_front_matter_is_fatal() {
        let err = build_page(Path::new("content/bare.md"), "# Just text\n", &renderer()).unwrap_err();
        assert!(matches!(err, SiteError::FrontMatter { .. }));
    }

    #[test]
    fn test_load_page_missing_file() {
        let err = load_page(Path::new("/no/such/page.md"), &renderer()).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
