//! Inline script filtering for parsed HTML documents.

use log::error;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use url::Url;

use crate::scan::scan_text;

use super::{Outlink, ParseResult};

/// Adds the outlinks found in a document's scripts to an existing parse.
///
/// The whole element tree is walked. `<script>` bodies are scanned as
/// JavaScript, and on every other element so are `on*` event handler
/// attributes and `href` attributes carrying `javascript:` URLs. Newly found
/// outlinks go ahead of the ones already in `parse`; when nothing is found,
/// `parse` comes back untouched. A `base_url` that does not parse is logged
/// and leaves only absolute and `www.` candidates resolvable.
pub fn filter_document(base_url: &str, parse: ParseResult, doc: &Html) -> ParseResult {
    let base = match Url::parse(base_url) {
        Ok(url) => Some(url),
        Err(e) => {
            error!("Failed to parse base URL '{}': {}", base_url, e);
            None
        }
    };

    let found = walk(doc.root_element(), base.as_ref());
    if found.is_empty() {
        return parse;
    }

    let ParseResult {
        text,
        title,
        outlinks: existing,
        status,
    } = parse;
    let mut outlinks = found;
    outlinks.extend(existing);
    ParseResult {
        text,
        title,
        outlinks,
        status,
    }
}

// Script elements contribute only their body, which may be empty; their
// own attributes are never scanned. Everything else contributes its
// scriptable attributes, then its children, in document order.
fn walk(element: ElementRef<'_>, base: Option<&Url>) -> Vec<Outlink> {
    if element.value().name().eq_ignore_ascii_case("script") {
        return scan_text(&script_body(element), "", base);
    }

    let mut outlinks = Vec::new();
    for (name, value) in element.value().attrs() {
        if is_event_handler(name) || is_javascript_href(name, value) {
            outlinks.extend(scan_text(value, "", base));
        }
    }
    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            outlinks.extend(walk(child, base));
        }
    }
    outlinks
}

// A script's body is its text and comment children joined with newlines,
// empty for a childless element.
fn script_body(element: ElementRef<'_>) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => segments.push(text),
            Node::Comment(comment) => segments.push(comment),
            _ => {}
        }
    }
    segments.join("\n")
}

// Event handler attributes all start with "on" (onclick, onload, ...).
// Byte comparison sidesteps char boundaries in exotic attribute names.
fn is_event_handler(name: &str) -> bool {
    name.len() >= 2 && name.as_bytes()[..2].eq_ignore_ascii_case(b"on")
}

fn is_javascript_href(name: &str, value: &str) -> bool {
    name.eq_ignore_ascii_case("href") && value.to_ascii_lowercase().contains("javascript:")
}
