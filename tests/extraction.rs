//! End-to-end extraction behavior through the public API.

use js_outlinks::{
    extract_js_links, filter_document, parse_js_resource, Outlink, ParseResult, ParseStatus,
};
use scraper::Html;

fn targets(links: &[Outlink]) -> Vec<&str> {
    links.iter().map(|l| l.to_url()).collect()
}

#[test]
fn test_single_quoted_absolute_literal_survives_unchanged() {
    let links = extract_js_links(
        "var loader = 'http://example.com/a.js';",
        "",
        "http://other.host/",
    );
    assert_eq!(targets(&links), vec!["http://example.com/a.js"]);
}

#[test]
fn test_relative_path_resolves_against_base() {
    let links = extract_js_links(
        r#"window.open("/foo/bar.html");"#,
        "",
        "http://host/dir/page.html",
    );
    assert_eq!(targets(&links), vec!["http://host/foo/bar.html"]);
}

#[test]
fn test_www_host_gets_http_scheme() {
    // The base plays no part for www. candidates
    let links = extract_js_links("nav('www.example.com/x');", "", "http://unrelated.org/");
    assert_eq!(targets(&links), vec!["http://www.example.com/x"]);
}

#[test]
fn test_plain_word_literal_ignored() {
    assert!(extract_js_links("alert('hello');", "", "http://host/").is_empty());
}

#[test]
fn test_unresolvable_candidate_does_not_stop_the_scan() {
    let js = "a('one/two.html'); b('http://'); c('three/four.html');";
    let links = extract_js_links(js, "", "http://host/");
    assert_eq!(
        targets(&links),
        vec!["http://host/one/two.html", "http://host/three/four.html"]
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let js = r#"
        function nav(p) { document.location = p; }
        nav('section/a.html');
        nav("http://example.com/b.html");
    "#;
    let first = extract_js_links(js, "", "http://host/root/");
    let second = extract_js_links(js, "", "http://host/root/");
    assert_eq!(first, second);
}

#[test]
fn test_only_script_content_scanned_in_document() {
    let html = r#"
        <html><body>
            <p>yesterday's issue is at archive/b.html</p>
            <script>jump('a.html');</script>
        </body></html>
    "#;
    let doc = Html::parse_document(html);
    let parse = ParseResult::success(String::new(), String::new(), Vec::new());
    let result = filter_document("http://host/", parse, &doc);

    // Prose outside scripts never reaches the scanner
    assert_eq!(targets(&result.outlinks), vec!["http://host/a.html"]);
}

#[test]
fn test_html_entity_amp_folded_in_resolved_url() {
    let links = extract_js_links(r#"go("/page.html?a=1&amp;b=2");"#, "", "http://host/");
    assert_eq!(targets(&links), vec!["http://host/page.html?a=1&b=2"]);
}

#[test]
fn test_script_outlinks_precede_existing_ones() {
    // An outlink collected earlier in the crawl...
    let earlier = extract_js_links("prev('/a.html');", "", "http://host/");
    let parse = ParseResult::success("body text".to_string(), "T".to_string(), earlier);

    // ...ends up behind the ones found by the script filter
    let html = r#"<html><body><script>f('/b.html'); g('/c.html');</script></body></html>"#;
    let doc = Html::parse_document(html);
    let result = filter_document("http://host/", parse, &doc);

    assert_eq!(
        targets(&result.outlinks),
        vec!["http://host/b.html", "http://host/c.html", "http://host/a.html"]
    );
}

#[test]
fn test_non_javascript_content_type_rejected() {
    let parse = parse_js_resource("http://host/page", Some("text/html"), b"x('a/b.html');");

    assert!(!parse.status.is_success());
    assert!(parse.outlinks.is_empty());
    match parse.status {
        ParseStatus::FailedInvalidFormat(msg) => {
            assert_eq!(msg, "Content not JavaScript: 'text/html'");
        }
        status => panic!("unexpected status: {:?}", status),
    }
}

#[test]
fn test_realistic_document_end_to_end() {
    let html = r#"
        <html>
        <head>
            <title>News</title>
            <script type="text/javascript">
                var today = 'news/today.html';
                window.open(today);
                document.location = "http://cdn.example.com/app.js";
            </script>
        </head>
        <body>
            <a href="javascript:show('story/4711.html')" onmouseover="preload('img/4711.jpg')">story</a>
            <p>contact us at mail.example.com/contact</p>
        </body>
        </html>
    "#;
    let doc = Html::parse_document(html);
    let parse = ParseResult::success(String::new(), "News".to_string(), Vec::new());
    let result = filter_document("http://host/", parse, &doc);

    assert_eq!(
        targets(&result.outlinks),
        vec![
            "http://host/news/today.html",
            "http://cdn.example.com/app.js",
            "http://host/story/4711.html",
            "http://host/img/4711.jpg"
        ]
    );
}
