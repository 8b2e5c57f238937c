//! Document templates.
//!
//! Builds full HTML documents (index, post, not-found) from rendered
//! fragments and metadata. All documents share the fixed stylesheet from
//! [`styles`](crate::styles).

use std::fmt::Write;

use digest_render::escape_html;
use digest_store::DigestEntry;

use crate::styles::STYLES;

/// Label shown on the divider between supplementary and primary content.
const DIVIDER_LABEL: &str = "Today's digest";

/// Wrap a body in the shared document shell.
fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <style>{STYLES}</style>\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>"
    )
}

/// Compose the index document.
///
/// Lists one `<li>` per entry linking to `/post/{id}`. An empty entry
/// sequence renders a single placeholder item instead of an empty list.
#[must_use]
pub fn index_document(title: &str, tagline: &str, entries: &[DigestEntry]) -> String {
    let title = escape_html(title);

    let mut list = String::new();
    for entry in entries {
        let id = escape_html(&entry.id);
        writeln!(
            list,
            "<li><a href=\"/post/{id}\">\
             <span class=\"emoji\">🛠️</span> {title} — {id}</a>\
             <div class=\"date\">{id}</div></li>"
        )
        .unwrap();
    }
    if list.is_empty() {
        list.push_str("<li>No digests yet</li>\n");
    }

    let body = format!(
        "<div class=\"header\"><span class=\"logo\">🦞</span><h1>{title}</h1></div>\n\
         <p>{}</p>\n\
         <ul class=\"post-list\">\n{list}</ul>\n",
        escape_html(tagline)
    );

    document(&title, &body)
}

/// Compose a post document.
///
/// When supplementary HTML is present it precedes the main content,
/// followed by a labelled divider; when absent no divider markup is
/// emitted at all.
#[must_use]
pub fn post_document(
    site_title: &str,
    id: &str,
    supplement_html: Option<&str>,
    content_html: &str,
) -> String {
    let id = escape_html(id);
    let page_title = format!("{} — {id}", escape_html(site_title));

    let mut body = String::with_capacity(content_html.len() + 512);
    body.push_str("<a href=\"/\" class=\"back\">← Back to all digests</a>\n");
    if let Some(supplement) = supplement_html {
        writeln!(
            body,
            "<section class=\"supplement\">{supplement}</section>\n\
             <div class=\"divider\"><hr><span>{DIVIDER_LABEL}</span><hr></div>"
        )
        .unwrap();
    }
    writeln!(body, "<article>{content_html}</article>").unwrap();

    document(&page_title, &body)
}

/// Minimal body for unknown identifiers.
#[must_use]
pub fn not_found_document() -> String {
    "<h1>Not found</h1>".to_owned()
}
