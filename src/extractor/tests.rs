use super::{Extraction, HtmlExtractor, StructureExtractor};
use crate::config::SamplerConfig;

fn extractor() -> HtmlExtractor {
    let _ = env_logger::builder().is_test(true).try_init();
    HtmlExtractor::new(&SamplerConfig::default().ignore_tags)
}

#[test]
fn single_leaf() {
    let extraction = extractor().extract("<div><p>x</p></div>").unwrap();
    assert_eq!(extraction.len(), 1);
    assert_eq!(extraction.get("/html/body/div/p/text()"), Some("x"));
}

#[test]
fn skip_script_style_noscript() {
    let html = r#"<html>
        <head><title>Shop</title><style>p { color: red; }</style></head>
        <body>
            <p>Product</p>
            <script>var tracking = 1;</script>
            <noscript>Enable javascript</noscript>
        </body>
    </html>"#;
    let extraction = extractor().extract(html).unwrap();

    let locations: Vec<&str> = extraction.iter().map(|(location, _)| location).collect();
    assert_eq!(
        locations,
        vec!["/html/head/title/text()", "/html/body/p/text()"]
    );
}

#[test]
fn no_ignored_tags() {
    let html = "<html><body><p>a</p><script>var a = 1;</script></body></html>";
    let extraction = HtmlExtractor::new(&[]).extract(html).unwrap();
    assert!(extraction
        .iter()
        .any(|(location, _)| location.contains("script")));
}

#[test]
fn invalid_ignored_tags_are_skipped() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ignore_tags = vec!["script".to_owned(), "x') or ('1".to_owned(), "".to_owned()];
    let html = "<html><body><p>a</p><script>var a = 1;</script></body></html>";
    let extraction = HtmlExtractor::new(&ignore_tags).extract(html).unwrap();

    assert_eq!(extraction.len(), 1);
    assert_eq!(extraction.get("/html/body/p/text()"), Some("a"));
}

#[test]
fn repeated_siblings_get_positions() {
    let html = "<ul><li>a</li><li>b</li></ul><p>c</p>";
    let extraction = extractor().extract(html).unwrap();

    assert_eq!(extraction.get("/html/body/ul/li[1]/text()"), Some("a"));
    assert_eq!(extraction.get("/html/body/ul/li[2]/text()"), Some("b"));
    assert_eq!(extraction.get("/html/body/p/text()"), Some("c"));
}

#[test]
fn fragments_are_merged() {
    let html = "<p>one<br>two <b>bold</b>   three</p>";
    let extraction = extractor().extract(html).unwrap();

    assert_eq!(extraction.get("/html/body/p/text()"), Some("one two three"));
    assert_eq!(extraction.get("/html/body/p/b/text()"), Some("bold"));
}

#[test]
fn whitespace_only_is_dropped() {
    let html = "<div>\n    <p>  x  </p>\n</div>";
    let extraction = extractor().extract(html).unwrap();

    assert_eq!(extraction.len(), 1);
    assert_eq!(extraction.get("/html/body/div/p/text()"), Some("x"));
    assert_eq!(extraction.get("/html/body/div/text()"), None);
}

#[test]
fn collect_dedups_and_skips_empty() {
    let extraction: Extraction = vec![
        ("/a/text()".to_owned(), "1".to_owned()),
        ("/b/text()".to_owned(), String::new()),
        ("/a/text()".to_owned(), "2".to_owned()),
    ]
    .into_iter()
    .collect();

    assert_eq!(extraction.len(), 1);
    assert_eq!(extraction.get("/a/text()"), Some("1"));
}
