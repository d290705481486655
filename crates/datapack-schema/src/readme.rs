//! Markdown rendering and plain-text helpers for README handling.

use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::sync::LazyLock;

/// Render markdown to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Remove every HTML tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    static TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"</?[^>]+>").expect("invalid regex"));
    TAG.replace_all(html, "").into_owned()
}

/// Normalize Windows line endings to plain newlines.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Derive a one-line plain-text description from README markdown.
///
/// Renders the markdown, strips the markup, and keeps the first block of
/// text (anything up to the first blank line, headings included). Newlines
/// inside the block collapse to single spaces.
pub fn description_from_markdown(markdown: &str) -> String {
    // Rendered paragraphs sit on single lines; the inserted newline turns
    // every paragraph boundary into a blank line the splitter can see.
    let html = render_html(markdown).replace("<p>", "\n<p>");
    let plain = strip_tags(&html);
    let first_block = plain.split("\n\n").next().unwrap_or_default();
    let collapsed = first_block.trim_end_matches('\n').replace('\n', " ");
    collapsed.strip_prefix(' ').unwrap_or(&collapsed).to_owned()
}
