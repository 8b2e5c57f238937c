//! Markdown to HTML rendering for the Dev Digest server.
//!
//! Uses pulldown-cmark directly for markdown → HTML conversion. Digest files
//! are a curated resource authored by the site operator, so the rendered
//! fragment is inserted into documents without additional sanitization.
//! [`escape_html`] is provided for the composer's own interpolations
//! (titles, identifiers), not for digest content.

use pulldown_cmark::{Options, Parser, html::push_html};

/// Render markdown to an HTML fragment.
///
/// Enables the GFM extensions (tables, strikethrough, task lists) on top of
/// CommonMark. Headings, paragraphs, emphasis, links, images, lists,
/// blockquotes, and code spans/blocks all come from pulldown-cmark.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, parser_options());
    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, parser);
    html
}

/// Parser options for digest rendering.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Escape text for insertion into HTML element or attribute positions.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
