//! Parse result data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A discovered hyperlink target with its anchor text.
///
/// Outlinks are produced only by the URL resolver, so the target is always a
/// syntactically valid absolute URL. The anchor text is empty for links found
/// in script content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlink {
    to_url: String,
    anchor: String,
}

impl Outlink {
    // Construction stays inside the crate so every target has been through
    // URL resolution first.
    pub(crate) fn new(to_url: String, anchor: String) -> Self {
        Outlink { to_url, anchor }
    }

    /// The absolute target URL.
    pub fn to_url(&self) -> &str {
        &self.to_url
    }

    /// The anchor text, possibly empty.
    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}

impl fmt::Display for Outlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toUrl: {} anchor: {}", self.to_url, self.anchor)
    }
}

/// Outcome of a parse attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseStatus {
    /// The content was parsed.
    Success,
    /// The content was rejected before parsing; the message names the
    /// offending content type.
    FailedInvalidFormat(String),
}

impl ParseStatus {
    /// Returns `true` for a successful parse.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseStatus::Success)
    }
}

/// The result of parsing one document or script resource.
///
/// The inline script filter either returns its input unchanged or builds a
/// new result merging freshly discovered outlinks with the existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Extracted text content.
    pub text: String,
    /// Document or script title.
    pub title: String,
    /// Discovered outlinks in extraction order.
    pub outlinks: Vec<Outlink>,
    /// Outcome of the parse attempt.
    pub status: ParseStatus,
}

impl ParseResult {
    /// Builds a successful parse result.
    pub fn success(text: String, title: String, outlinks: Vec<Outlink>) -> Self {
        ParseResult {
            text,
            title,
            outlinks,
            status: ParseStatus::Success,
        }
    }

    /// Builds an empty result carrying a failure status.
    pub fn failed(status: ParseStatus) -> Self {
        ParseResult {
            text: String::new(),
            title: String::new(),
            outlinks: Vec::new(),
            status,
        }
    }
}
