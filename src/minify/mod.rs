//! HTML minification for rendered pages.

use minify_html::{minify, Cfg};

use crate::utils::error::{SiteError, SiteResult};

/// Minify an HTML document, including inline `<style>` and `<script>`
pub fn minify_html(html: &str) -> SiteResult<String> {
    let mut cfg = Cfg::new();
    cfg.minify_css = true;
    cfg.minify_js = true;

    let minified = minify(html.as_bytes(), &cfg);
    String::from_utf8(minified).map_err(|e| SiteError::Minify(e.to_string()))
}
