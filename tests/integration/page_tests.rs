//! Integration tests for the page processor
//!
//! These tests drive the processor end to end through configuration, report
//! files on disk, and (for the fetch adapter) a wiremock HTTP server.

use crawl_lens::config::{parse_config, Config};
use crawl_lens::crawler::{build_http_client, fetch_page, FetchResult, PageProcessor};
use crawl_lens::output::{
    MemorySink, TextReportWriter, COMMON_WORDS_FILE, LONGEST_PAGE_FILE, SUBDOMAINS_FILE,
    UNIQUE_PAGES_FILE,
};
use crawl_lens::url::{canonicalize, normalize, ScopeFilter};
use std::fs;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UCI_CONFIG: &str = r#"
[scope]
allowed-domains = ["ics.uci.edu", "cs.uci.edu", "informatics.uci.edu", "stat.uci.edu"]
root-domain = "uci.edu"

[[scope.gated]]
domain = "today.uci.edu"
required-path = "/department/information_computer_sciences"

[output]
report-dir = "reports"
"#;

fn create_test_config() -> Config {
    parse_config(UCI_CONFIG).expect("test config should be valid")
}

fn read_report(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).expect("report should exist")
}

#[test]
fn test_links_filtered_end_to_end() {
    let config = create_test_config();
    let mut processor = PageProcessor::from_config(&config, MemorySink::new());

    let html = r#"
        <html><body>
            <a href="/a">A</a>
            <a href="http://cs.uci.edu/b">B</a>
            <a href="http://evil.com/c">C</a>
            <a href="http://cs.uci.edu/d.zip">D</a>
        </body></html>
    "#;

    let links = processor.process("http://cs.uci.edu/", &FetchResult::ok(html));
    let links: Vec<String> = links.into_iter().map(String::from).collect();
    assert_eq!(links, vec!["http://cs.uci.edu/a", "http://cs.uci.edu/b"]);
}

#[test]
fn test_404_leaves_words_unchanged_but_counts_visit() {
    let config = create_test_config();
    let mut processor = PageProcessor::from_config(&config, MemorySink::new());

    processor.process(
        "http://www.ics.uci.edu/",
        &FetchResult::ok("<p>Welcome to informatics research</p>"),
    );
    let words_before = processor.stats().most_common(usize::MAX);
    let pages_before = processor.stats().unique_pages();

    let links = processor.process("http://www.ics.uci.edu/gone", &FetchResult::status(404));

    assert!(links.is_empty());
    assert_eq!(processor.stats().most_common(usize::MAX), words_before);
    assert_eq!(processor.stats().unique_pages(), pages_before + 1);
}

#[test]
fn test_reports_written_after_each_page() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config();
    let writer = TextReportWriter::new(dir.path()).unwrap();
    let mut processor = PageProcessor::from_config(&config, writer);

    processor.process("http://www.ics.uci.edu/missing", &FetchResult::status(404));
    assert_eq!(
        read_report(&dir, UNIQUE_PAGES_FILE),
        "Total unique pages: 1\n"
    );
    assert_eq!(read_report(&dir, LONGEST_PAGE_FILE), "Longest page:  (0 words)\n");
    assert_eq!(read_report(&dir, SUBDOMAINS_FILE), "");
    assert_eq!(read_report(&dir, COMMON_WORDS_FILE), "");

    processor.process(
        "http://vision.ics.uci.edu/people#faculty",
        &FetchResult::ok("<h1>Vision lab</h1><p>Computer vision and vision research</p>"),
    );
    processor.process(
        "http://stat.uci.edu/",
        &FetchResult::ok("<p>Statistics research</p>"),
    );

    assert_eq!(
        read_report(&dir, UNIQUE_PAGES_FILE),
        "Total unique pages: 3\n"
    );
    assert_eq!(
        read_report(&dir, LONGEST_PAGE_FILE),
        "Longest page: http://vision.ics.uci.edu/people (7 words)\n"
    );
    assert_eq!(
        read_report(&dir, SUBDOMAINS_FILE),
        "stat.uci.edu, 1\nvision.ics.uci.edu, 1\n"
    );
    assert_eq!(
        read_report(&dir, COMMON_WORDS_FILE),
        "vision: 3\nresearch: 2\nlab: 1\ncomputer: 1\nstatistics: 1\n"
    );
}

#[test]
fn test_top_words_limited_to_configured_count() {
    let dir = TempDir::new().unwrap();
    let mut config = create_test_config();
    config.output.top_words = 2;
    let writer = TextReportWriter::new(dir.path()).unwrap();
    let mut processor = PageProcessor::from_config(&config, writer);

    processor.process(
        "http://cs.uci.edu/",
        &FetchResult::ok("<p>alpha beta beta gamma gamma gamma</p>"),
    );

    assert_eq!(
        read_report(&dir, COMMON_WORDS_FILE),
        "gamma: 3\nbeta: 2\n"
    );
}

#[test]
fn test_stop_words_never_reported() {
    let config = create_test_config();
    let mut processor = PageProcessor::from_config(&config, MemorySink::new());

    processor.process(
        "http://cs.uci.edu/",
        &FetchResult::ok("<p>The of and I a x q about crawling</p>"),
    );

    let snapshot = processor.sink().latest().unwrap().clone();
    assert_eq!(snapshot.top_words, vec![("crawling".to_string(), 1)]);
}

#[test]
fn test_gated_links() {
    let config = create_test_config();
    let mut processor = PageProcessor::from_config(&config, MemorySink::new());

    let html = r#"
        <a href="http://today.uci.edu/department/information_computer_sciences/news">ICS news</a>
        <a href="http://today.uci.edu/sports">Sports</a>
    "#;
    let links = processor.process("http://www.ics.uci.edu/", &FetchResult::ok(html));
    let links: Vec<String> = links.into_iter().map(String::from).collect();

    assert_eq!(
        links,
        vec!["http://today.uci.edu/department/information_computer_sciences/news"]
    );
}

#[test]
fn test_scope_filter_from_config() {
    let config = create_test_config();
    let scope = ScopeFilter::new(&config.scope);

    assert!(scope.is_in_scope("http://cs.uci.edu/index.html"));
    assert!(!scope.is_in_scope("http://cs.uci.edu/paper.pdf"));
    assert!(!scope.is_in_scope("ftp://cs.uci.edu/index.html"));
    assert!(!scope.is_in_scope("ftp://evil.com/"));
}

#[test]
fn test_domain_match_from_config() {
    let config = create_test_config();
    let scope = ScopeFilter::new(&config.scope);
    assert!(scope.is_in_scope("http://www.eecs.uci.edu/"));

    let labels = parse_config(&UCI_CONFIG.replace(
        "root-domain = \"uci.edu\"",
        "root-domain = \"uci.edu\"\ndomain-match = \"labels\"",
    ))
    .unwrap();
    let scope = ScopeFilter::new(&labels.scope);
    assert!(!scope.is_in_scope("http://www.eecs.uci.edu/"));
    assert!(scope.is_in_scope("http://www.cs.uci.edu/"));
}

#[test]
fn test_possessives_counted_by_stem() {
    let config = create_test_config();
    let mut processor = PageProcessor::from_config(&config, MemorySink::new());

    processor.process(
        "http://cs.uci.edu/",
        &FetchResult::ok("<p>The student's project and the student\u{2019}s advisor</p>"),
    );

    assert_eq!(processor.stats().word_count("student"), 2);
    assert_eq!(processor.stats().word_count("project"), 1);
}

#[test]
fn test_normalize_idempotent_against_fixed_base() {
    let base = Url::parse("http://www.ics.uci.edu/a/b.html").unwrap();
    let cases = ["c.html#x", "../d/", "?q=1", "//stat.uci.edu/e#f"];

    for href in cases {
        let once = normalize(href, &base).unwrap();
        let twice = normalize(once.as_str(), &base).unwrap();
        assert_eq!(once, twice);
        assert!(once.as_url().fragment().is_none());
    }

    assert_eq!(
        canonicalize("http://x/p#a").unwrap(),
        canonicalize("http://x/p#b").unwrap()
    );
}

#[tokio::test]
async fn test_fetch_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><a href="/next">Next</a></body></html>"#)
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config().user_agent).unwrap();
    let result = fetch_page(&client, &format!("{}/", mock_server.uri())).await;

    assert_eq!(result.status_code, 200);
    assert!(result.error_info.is_none());
    assert!(result.is_success());
    assert!(String::from_utf8_lossy(result.content.as_deref().unwrap()).contains("/next"));
}

#[tokio::test]
async fn test_fetch_page_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config().user_agent).unwrap();
    let result = fetch_page(&client, &format!("{}/missing", mock_server.uri())).await;

    assert_eq!(result.status_code, 404);
    assert!(!result.is_success());
}

#[tokio::test]
async fn test_fetch_page_connection_refused() {
    // Bind then drop a listener so the port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = build_http_client(&create_test_config().user_agent).unwrap();
    let result = fetch_page(&client, &format!("http://127.0.0.1:{}/", port)).await;

    assert_eq!(result.status_code, 0);
    assert!(result.content.is_none());
    assert!(result.error_info.is_some());
}

#[tokio::test]
async fn test_fetched_page_processed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <p>Local page</p>
                <a href="/local">Local</a>
                <a href="http://cs.uci.edu/remote">Remote</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config().user_agent).unwrap();
    let url = format!("{}/", mock_server.uri());
    let result = fetch_page(&client, &url).await;

    let config = create_test_config();
    let mut processor = PageProcessor::from_config(&config, MemorySink::new());
    let links = processor.process(&url, &result);

    // The mock server host is outside the crawl scope; only the UCI link survives
    let links: Vec<String> = links.into_iter().map(String::from).collect();
    assert_eq!(links, vec!["http://cs.uci.edu/remote"]);
    assert_eq!(processor.stats().word_count("local"), 2);
    assert_eq!(processor.stats().subdomain_count("127.0.0.1"), 0);
}
