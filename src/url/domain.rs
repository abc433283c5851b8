use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// Ports are not part of the domain.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_lens::url::extract_domain;
///
/// let url = Url::parse("https://ICS.uci.edu:8080/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("ics.uci.edu".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_lowercase())
}
