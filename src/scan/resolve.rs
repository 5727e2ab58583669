//! Candidate resolution against the document base (final pass).

use log::trace;
use url::Url;

use crate::parse::Outlink;

/// Resolves a URL-shaped candidate into an outlink, or drops it.
///
/// Candidates starting with `www.` are taken as schemeless host names: they
/// get an `http://` prefix and skip base resolution entirely. Everything
/// else is resolved against `base` as an RFC 3986 relative reference; with
/// no base, only candidates that parse as absolute URLs survive. The
/// resolved URL has literal `&amp;` sequences folded back to `&`, undoing
/// HTML entity escaping in scripts embedded in markup.
pub(crate) fn resolve_candidate(
    candidate: &str,
    base: Option<&Url>,
    anchor: &str,
) -> Option<Outlink> {
    let resolved = if candidate.starts_with("www.") {
        Url::parse(&format!("http://{candidate}"))
    } else {
        match base {
            Some(base) => base.join(candidate),
            None => Url::parse(candidate),
        }
    };

    match resolved {
        Ok(url) => {
            let to_url = url.as_str().replace("&amp;", "&");
            trace!("Outlink from JS: '{}'", to_url);
            Some(Outlink::new(to_url, anchor.to_string()))
        }
        Err(e) => {
            trace!(
                "Failed to resolve candidate '{}' (base: {:?}): {}",
                candidate,
                base.map(Url::as_str),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_candidate;
    use url::Url;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let base = base("http://host/dir/page.html");
        let outlink = resolve_candidate("/foo/bar.html", Some(&base), "").unwrap();
        assert_eq!(outlink.to_url(), "http://host/foo/bar.html");

        let outlink = resolve_candidate("sub/other.html", Some(&base), "").unwrap();
        assert_eq!(outlink.to_url(), "http://host/dir/sub/other.html");
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        let base = base("http://host/dir/");
        let outlink = resolve_candidate("http://example.com/a.js", Some(&base), "").unwrap();
        assert_eq!(outlink.to_url(), "http://example.com/a.js");
    }

    #[test]
    fn test_resolve_www_prefix_gets_http_scheme() {
        // No base needed for www. candidates
        let outlink = resolve_candidate("www.example.com/x", None, "").unwrap();
        assert_eq!(outlink.to_url(), "http://www.example.com/x");

        // The base, when present, is ignored for them
        let base = base("https://other.org/");
        let outlink = resolve_candidate("www.example.com/x", Some(&base), "").unwrap();
        assert_eq!(outlink.to_url(), "http://www.example.com/x");
    }

    #[test]
    fn test_resolve_without_base_keeps_only_absolute() {
        assert!(resolve_candidate("relative/path.html", None, "").is_none());
        assert!(resolve_candidate("http://example.com/page", None, "").is_some());
    }

    #[test]
    fn test_resolve_unparseable_candidate_dropped() {
        let base = base("http://host/");
        // A scheme with nothing behind it has no host to resolve to
        assert!(resolve_candidate("http://", Some(&base), "").is_none());
        // Out-of-range port makes the www. expansion unparseable too
        assert!(resolve_candidate("www.example.com:99999999999/x.y", None, "").is_none());
    }

    #[test]
    fn test_resolve_folds_amp_entities() {
        let base = base("http://host/");
        let outlink = resolve_candidate("/page.html?a=1&amp;b=2", Some(&base), "").unwrap();
        assert_eq!(outlink.to_url(), "http://host/page.html?a=1&b=2");
    }

    #[test]
    fn test_resolve_carries_anchor() {
        let base = base("http://host/");
        let outlink = resolve_candidate("a.html", Some(&base), "click me").unwrap();
        assert_eq!(outlink.anchor(), "click me");
    }
}
