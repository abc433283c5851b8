use crate::config::{DomainMatch, ScopeConfig};
use crate::url::extract_domain;
use url::Url;

/// Decides whether a URL lies inside the crawl boundary
///
/// Built once from [`ScopeConfig`] and consulted for every extracted link.
/// The decision is made from the URL alone, in this order:
///
/// 1. The scheme must be `http` or `https`.
/// 2. The host must fall under an allowed domain, or under a gated domain whose
///    required path marker appears in the URL path. Hosts are compared with the
///    configured [`DomainMatch`] mode; an explicit port is not part of the host.
/// 3. The path must not end with an excluded extension (case-insensitive).
///
/// Anything that fails to parse is out of scope.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    allowed_domains: Vec<String>,
    gated: Vec<(String, String)>,
    excluded_suffixes: Vec<String>,
    domain_match: DomainMatch,
}

impl ScopeFilter {
    /// Creates a filter from scope configuration
    pub fn new(config: &ScopeConfig) -> Self {
        Self {
            allowed_domains: config
                .allowed_domains
                .iter()
                .map(|d| d.to_lowercase())
                .collect(),
            gated: config
                .gated
                .iter()
                .map(|g| (g.domain.to_lowercase(), g.required_path.clone()))
                .collect(),
            excluded_suffixes: config
                .excluded_extensions
                .iter()
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .collect(),
            domain_match: config.domain_match,
        }
    }

    /// Parses `url` and checks it against the scope rules
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use crawl_lens::config::load_config;
    /// use crawl_lens::url::ScopeFilter;
    /// use std::path::Path;
    ///
    /// let config = load_config(Path::new("crawl-lens.toml")).unwrap();
    /// let scope = ScopeFilter::new(&config.scope);
    /// assert!(scope.is_in_scope("http://cs.uci.edu/index.html"));
    /// assert!(!scope.is_in_scope("http://cs.uci.edu/paper.pdf"));
    /// ```
    pub fn is_in_scope(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.accepts(&parsed),
            Err(e) => {
                tracing::debug!("Rejecting unparsable URL {}: {}", url, e);
                false
            }
        }
    }

    /// Checks an already parsed URL against the scope rules
    pub fn accepts(&self, url: &Url) -> bool {
        if url.scheme() != "http" && url.scheme() != "https" {
            return false;
        }

        let host = match extract_domain(url) {
            Some(host) => host,
            None => return false,
        };

        let path = url.path();
        if !self.host_allowed(&host, path) {
            return false;
        }

        !self.has_excluded_extension(path)
    }

    fn host_allowed(&self, host: &str, path: &str) -> bool {
        if self
            .allowed_domains
            .iter()
            .any(|domain| self.domain_match.matches(domain, host))
        {
            return true;
        }

        self.gated
            .iter()
            .any(|(domain, marker)| {
                self.domain_match.matches(domain, host) && path.contains(marker.as_str())
            })
    }

    fn has_excluded_extension(&self, path: &str) -> bool {
        let path = path.to_lowercase();
        self.excluded_suffixes
            .iter()
            .any(|suffix| path.ends_with(suffix.as_str()))
    }
}
