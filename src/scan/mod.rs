//! Two-pass heuristic link extraction from JavaScript source.
//!
//! The first pass isolates quoted string literals, the second keeps the ones
//! shaped like URLs, and the survivors are resolved against the base URL.
//! The scanner never evaluates code: links built by string concatenation or
//! held in variables are invisible to it, which is the accepted trade-off
//! for handling arbitrary scripts cheaply.

mod literals;
mod resolve;
mod shape;

use log::error;
use url::Url;

use crate::parse::Outlink;

use literals::literals;
use resolve::resolve_candidate;
use shape::is_url_shaped;

/// Extracts outlinks from JavaScript source text.
///
/// `base` is the URL of the surrounding document or script resource;
/// relative candidates are resolved against it. A `base` that does not parse
/// is logged and treated as absent, which drops relative candidates while
/// `www.`-prefixed and absolute ones still come through. `anchor` is copied
/// onto every produced outlink; script links have no anchor text, so callers
/// within this crate pass `""`.
///
/// # Examples
///
/// ```
/// use js_outlinks::extract_js_links;
///
/// let js = "var pages = ['about.html', 'contact.html'];";
/// let links = extract_js_links(js, "", "http://www.example.com/");
/// assert_eq!(links.len(), 2);
/// assert_eq!(links[0].to_url(), "http://www.example.com/about.html");
/// assert_eq!(links[1].to_url(), "http://www.example.com/contact.html");
/// ```
pub fn extract_js_links(text: &str, anchor: &str, base: &str) -> Vec<Outlink> {
    let base_url = match Url::parse(base) {
        Ok(url) => Some(url),
        Err(e) => {
            error!("Failed to parse base URL '{}': {}", base, e);
            None
        }
    };
    scan_text(text, anchor, base_url.as_ref())
}

/// Runs the scanning pipeline with an already parsed (or absent) base.
pub(crate) fn scan_text(text: &str, anchor: &str, base: Option<&Url>) -> Vec<Outlink> {
    let mut outlinks = Vec::new();
    for candidate in literals(text) {
        if !is_url_shaped(candidate) {
            continue;
        }
        if let Some(outlink) = resolve_candidate(candidate, base, anchor) {
            outlinks.push(outlink);
        }
    }
    outlinks
}
