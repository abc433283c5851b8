//! URL handling module for Crawl-Lens
//!
//! This module provides URL canonicalization, host matching, and the scope
//! filter that defines the crawl boundary.

mod domain;
mod matcher;
mod normalize;
mod scope;

use std::fmt;
use url::Url;

// Re-export main functions
pub use domain::extract_domain;
pub use matcher::{ends_with_domain, matches_domain};
pub use normalize::{canonicalize, normalize};
pub use scope::ScopeFilter;

/// An absolute URL with no fragment component
///
/// This is the dedup key for the crawl: two URLs that differ only by fragment
/// canonicalize to the same value. Values are only produced by [`normalize`] and
/// [`canonicalize`], so the no-fragment invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    pub(crate) fn from_url(mut url: Url) -> Self {
        url.set_fragment(None);
        Self(url)
    }

    /// Returns the serialized URL
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the lowercase host, if any
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<CanonicalUrl> for String {
    fn from(url: CanonicalUrl) -> Self {
        url.0.into()
    }
}
