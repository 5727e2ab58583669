//! Quoted string literal scanning (first pass).

use std::sync::LazyLock;

use fancy_regex::{CaptureMatches, Regex, RegexBuilder};
use log::error;

// Contents of a single- or double-quoted literal, tolerant of escaped quote
// characters immediately preceding the delimiter. The closing delimiter must
// repeat the opening one (backreference), which rules out the `regex` crate
// for this pattern. Only embedded whitespace is excluded from the contents;
// judging what looks like a URL is the second pass's job.
const STRING_LITERAL_PATTERN: &str = r#"(\\*(?:"|'))([^\s"']+?)(?:\1)"#;

/// Helper function to safely compile a pattern, panicking with a detailed
/// error message if compilation fails. Used for static patterns that are
/// compile-time constants.
fn compile_pattern_unsafe(pattern: &str, context: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .unwrap_or_else(|e| {
            panic!(
                "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
                pattern, context, e
            )
        })
}

static STRING_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern_unsafe(STRING_LITERAL_PATTERN, "STRING_LITERAL_RE"));

/// Returns a lazy iterator over the quoted string literal contents of `text`.
///
/// Matching proceeds strictly left to right, each match starting after the
/// end of the previous one. Calling this again on the same text restarts the
/// scan from the beginning.
pub(crate) fn literals(text: &str) -> Literals<'_> {
    let re: &'static Regex = &STRING_LITERAL_RE;
    Literals {
        matches: re.captures_iter(text),
        done: false,
    }
}

/// Lazy sequence of candidate literals borrowed from the scanned text.
pub(crate) struct Literals<'t> {
    matches: CaptureMatches<'static, 't>,
    done: bool,
}

impl<'t> Iterator for Literals<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.done {
            return None;
        }
        match self.matches.next() {
            Some(Ok(caps)) => caps.get(2).map(|m| m.as_str()),
            Some(Err(e)) => {
                // Backtracking can fail on pathological input. Keep whatever
                // was already produced and end the sequence.
                error!("Literal scan aborted: {}", e);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
