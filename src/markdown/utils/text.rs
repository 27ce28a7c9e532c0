use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref SCRIPT_STYLE_REGEX: Regex =
        Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
}

/// Reduce rendered HTML to plain text.
///
/// Strict policy: comments and `script`/`style` elements are dropped with
/// their contents, every other tag is removed, and entities are decoded.
pub fn html_to_text(html: &str) -> String {
    let text = COMMENT_REGEX.replace_all(html, "");
    let text = SCRIPT_STYLE_REGEX.replace_all(&text, "");
    let text = TAG_REGEX.replace_all(&text, "");

    html_escape::decode_html_entities(&text).into_owned()
}
