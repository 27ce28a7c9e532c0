use lazy_static::lazy_static;
use log::warn;
use regex::{Captures, Regex};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Theme used when the configured one is empty or unknown
pub const DEFAULT_THEME: &str = "InspiredGitHub";

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"<pre><code(?: class="language-([^"]+)")?>([^<]*)</code></pre>"#).unwrap();
}

/// Highlights fenced code blocks in rendered HTML with inline styles
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    theme_name: String,
}

impl SyntaxHighlighter {
    /// Create a highlighter for the named theme.
    ///
    /// Common chroma style names are mapped to the closest bundled theme.
    /// Other names are matched case-insensitively against syntect's bundled
    /// themes; anything else falls back to `DEFAULT_THEME`.
    pub fn new(theme_name: &str) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();

        let trimmed = theme_name.trim();
        let wanted = chroma_alias(trimmed).unwrap_or(trimmed);
        let found = theme_set
            .themes
            .keys()
            .find(|name| name.eq_ignore_ascii_case(wanted))
            .cloned();

        let resolved = match found {
            Some(name) => name,
            None => {
                if !wanted.is_empty() {
                    warn!(
                        "Unknown highlighting theme '{}', using {}. Available: {}",
                        wanted,
                        DEFAULT_THEME,
                        theme_set.themes.keys().cloned().collect::<Vec<_>>().join(", ")
                    );
                }
                DEFAULT_THEME.to_string()
            }
        };

        let theme = theme_set.themes.remove(&resolved).unwrap_or_default();

        SyntaxHighlighter {
            syntax_set,
            theme,
            theme_name: resolved,
        }
    }

    /// Name of the theme in use
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Replace every `<pre><code>` block in `html` with a highlighted one
    pub fn highlight_html(&self, html: &str) -> String {
        CODE_BLOCK_REGEX
            .replace_all(html, |caps: &Captures| {
                let lang = caps.get(1).map(|m| m.as_str()).unwrap_or("text");
                let code = html_escape::decode_html_entities(&caps[2]);

                match self.highlight_code(&code, lang) {
                    Ok(highlighted) => highlighted,
                    Err(e) => {
                        warn!("Syntax highlighting failed for {}: {}", lang, e);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Highlight a single code block
    pub fn highlight_code(&self, code: &str, lang: &str) -> Result<String, syntect::Error> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme)
    }
}

/// Closest bundled syntect theme for a chroma style name
fn chroma_alias(name: &str) -> Option<&'static str> {
    let theme = match name.to_ascii_lowercase().as_str() {
        "github" | "xcode" | "friendly" | "tango" => "InspiredGitHub",
        "monokai" | "dracula" | "github-dark" | "nord" | "onedark" | "one-dark" => {
            "base16-ocean.dark"
        }
        "monokailight" | "paraiso-light" => "base16-ocean.light",
        "vim" | "native" | "fruity" => "base16-mocha.dark",
        "solarized-dark" | "solarized-dark256" => "Solarized (dark)",
        "solarized-light" => "Solarized (light)",
        _ => return None,
    };
    Some(theme)
}
