use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.header_ids = Some(String::new());

    // Raw HTML in content passes through untouched
    options.render.unsafe_ = true;
    options.render.hardbreaks = false;
    // Keep `<pre><code class="language-x">` so the highlighter can find it
    options.render.github_pre_lang = false;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    comrak::markdown_to_html(content, options)
}
