//! HTML parser for extracting outbound links
//!
//! Parsing is best effort: html5ever recovers from malformed markup, and any
//! individual link that cannot be resolved is skipped rather than failing the
//! page.

use crate::url::{normalize, CanonicalUrl};
use scraper::{Html, Selector};
use url::Url;

/// Extracts every hyperlink on a page as a canonical URL
///
/// Each `<a href>` is resolved against `base_url` and stripped of its fragment,
/// in document order. Duplicates are kept; deduplication happens globally
/// through the visited set. No scope filtering happens here, so `mailto:` and
/// off-site links are returned as well.
///
/// # Arguments
///
/// * `base_url` - The URL of the page, used to resolve relative links
/// * `content` - Raw page bytes (decoded lossily as UTF-8)
///
/// # Example
///
/// ```
/// use crawl_lens::crawler::extract_links;
/// use url::Url;
///
/// let html = br#"<html><body><a href="/page#top">Link</a></body></html>"#;
/// let base = Url::parse("http://cs.uci.edu/").unwrap();
/// let links = extract_links(&base, html);
/// assert_eq!(links[0].as_str(), "http://cs.uci.edu/page");
/// ```
pub fn extract_links(base_url: &Url, content: &[u8]) -> Vec<CanonicalUrl> {
    let html = String::from_utf8_lossy(content);
    let document = Html::parse_document(&html);
    extract_links_from_document(&document, base_url)
}

fn extract_links_from_document(document: &Html, base_url: &Url) -> Vec<CanonicalUrl> {
    let a_selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("Failed to build link selector: {:?}", e);
            return Vec::new();
        }
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| match normalize(href, base_url) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Skipping link on {}: {}", base_url, e);
                None
            }
        })
        .collect()
}
