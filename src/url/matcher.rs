use crate::config::DomainMatch;

impl DomainMatch {
    /// Checks `host` against `domain` using this mode
    pub fn matches(self, domain: &str, host: &str) -> bool {
        match self {
            DomainMatch::Suffix => ends_with_domain(domain, host),
            DomainMatch::Labels => matches_domain(domain, host),
        }
    }
}

/// Checks if a host ends with a domain string, ignoring label boundaries
///
/// ```
/// use crawl_lens::url::ends_with_domain;
///
/// assert!(ends_with_domain("cs.uci.edu", "www.eecs.uci.edu"));
/// assert!(!ends_with_domain("cs.uci.edu", "cs.uci.edu.evil.com"));
/// ```
pub fn ends_with_domain(domain: &str, host: &str) -> bool {
    !domain.is_empty() && host.ends_with(domain)
}

/// Checks if a host falls under a domain suffix
///
/// Matching is done on whole labels: the host matches when it equals the
/// suffix or ends with `"." + suffix`. Both arguments are expected to be
/// lowercase already.
///
/// # Examples
///
/// ```
/// use crawl_lens::url::matches_domain;
///
/// assert!(matches_domain("ics.uci.edu", "ics.uci.edu"));
/// assert!(matches_domain("ics.uci.edu", "vision.ics.uci.edu"));
/// assert!(!matches_domain("ics.uci.edu", "physics.uci.edu"));
/// assert!(!matches_domain("ics.uci.edu", "uci.edu"));
/// ```
pub fn matches_domain(suffix: &str, host: &str) -> bool {
    if suffix.is_empty() || host.is_empty() {
        return false;
    }

    match host.strip_suffix(suffix) {
        Some("") => true,
        Some(rest) => rest.ends_with('.'),
        None => false,
    }
}
