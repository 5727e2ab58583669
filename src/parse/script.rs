//! Standalone JavaScript resource parsing.

use crate::config::{JS_CONTENT_TYPE, MAX_TITLE_LEN};
use crate::scan::extract_js_links;

use super::{ParseResult, ParseStatus};

/// Parses a fetched resource as a JavaScript file.
///
/// A declared content type that is present and non-blank must start with
/// `application/x-javascript` (case-insensitively); anything else is
/// rejected with a failed parse naming the offending type. The body is
/// decoded as UTF-8, lossily, since the scan is heuristic anyway and a
/// stray byte should not kill it. Candidates are resolved against the
/// resource's own URL, and the first line of the script, cut at
/// [`MAX_TITLE_LEN`] characters, stands in for a title.
pub fn parse_js_resource(url: &str, content_type: Option<&str>, content: &[u8]) -> ParseResult {
    if let Some(content_type) = content_type {
        if !content_type.trim().is_empty()
            && !content_type.to_ascii_lowercase().starts_with(JS_CONTENT_TYPE)
        {
            return ParseResult::failed(ParseStatus::FailedInvalidFormat(format!(
                "Content not JavaScript: '{content_type}'"
            )));
        }
    }

    let text = String::from_utf8_lossy(content);
    let outlinks = extract_js_links(&text, "", url);
    let title = derive_title(&text);

    ParseResult::success(text.into_owned(), title, outlinks)
}

fn derive_title(text: &str) -> String {
    let first_line = match text.find('\n') {
        Some(end) => &text[..end],
        None => text,
    };
    first_line.chars().take(MAX_TITLE_LEN).collect()
}
