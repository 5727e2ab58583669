//! URL shape validation (second pass).

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

// A candidate looks like a URL when it has at least one '/' or '.' separator
// with non-whitespace on both sides, after an optional leading slash. The
// whole candidate must match. Deliberately coarse: characters that are
// invalid in URLs pass here and get weeded out at resolution time.
const URI_SHAPE_PATTERN: &str = r"\A\s*/?\S+?[/.]\S+\s*\z";

/// Helper function to safely compile a pattern, panicking with a detailed
/// error message if compilation fails. Used for static patterns that are
/// compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
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

static URI_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(URI_SHAPE_PATTERN, "URI_SHAPE_RE"));

/// Decides whether a literal is shaped like a URL and worth resolving.
pub(crate) fn is_url_shaped(candidate: &str) -> bool {
    URI_SHAPE_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::is_url_shaped;

    #[test]
    fn test_shape_accepts_paths_and_hosts() {
        assert!(is_url_shaped("index.html"));
        assert!(is_url_shaped("/foo/bar.html"));
        assert!(is_url_shaped("foo/bar"));
        assert!(is_url_shaped("www.example.com/x"));
        assert!(is_url_shaped("http://example.com/a.js"));
    }

    #[test]
    fn test_shape_rejects_plain_words() {
        assert!(!is_url_shaped("hello"));
        assert!(!is_url_shaped("a"));
        assert!(!is_url_shaped(""));
    }

    #[test]
    fn test_shape_requires_text_around_separator() {
        // Nothing after the separator
        assert!(!is_url_shaped("foo."));
        // Nothing before it (the leading '/' is consumed as the optional slash)
        assert!(!is_url_shaped("/x"));
        assert!(!is_url_shaped(".a"));
    }

    #[test]
    fn test_shape_is_coarse_on_purpose() {
        // Separators count as surrounding text for further separators, and
        // URL-invalid characters are not this pass's concern
        assert!(is_url_shaped("..."));
        assert!(is_url_shaped("a.b|c"));
        // A dangling scheme passes the shape check and fails later, at
        // resolution
        assert!(is_url_shaped("http://"));
    }
}
