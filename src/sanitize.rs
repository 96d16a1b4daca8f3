use std::collections::{HashMap, HashSet};

use ammonia::Builder;

/// Elements allowed to survive sanitization. Matches what the rich-text
/// editor can produce: paragraphs, headings, highlight, bold, italic,
/// lists, and blockquotes.
const ALLOWED_TAGS: [&str; 15] = [
    "p", "br", "h1", "h2", "h3", "h4", "h5", "h6", "mark", "strong", "em", "ul", "ol", "li",
    "blockquote",
];

/// Attributes allowed on any surviving element. `style` and `class` are
/// not in this set and are therefore always stripped.
const ALLOWED_ATTRS: [&str; 3] = ["href", "src", "alt"];

/// Reduce arbitrary HTML to the fixed allow-list above. Disallowed
/// elements are removed (their text content survives), disallowed
/// attributes are dropped.
///
/// This is the render-safety boundary: every note body goes through here
/// before the webview renders it as HTML. Content round-trips through the
/// backend and may not have originated in this client, so the filter is
/// applied unconditionally. The output is deterministic and a fixed point:
/// cleaning already-clean HTML changes nothing.
pub fn clean_html(html: &str) -> String {
    Builder::default()
        .tags(HashSet::from(ALLOWED_TAGS))
        // no per-tag exceptions: the generic set below is the whole story
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::from(ALLOWED_ATTRS))
        .clean(html)
        .to_string()
}
