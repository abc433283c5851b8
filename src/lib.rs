//! Crawl-Lens: the page-processing core of a restricted-domain crawler
//!
//! Given a fetched page, this crate extracts outbound links, keeps the ones that
//! fall inside the configured crawl scope, and accumulates corpus statistics
//! (unique pages, word frequencies, longest page, subdomain distribution) that are
//! written out as plain-text reports after every page.

pub mod config;
pub mod crawler;
pub mod output;
pub mod stats;
pub mod url;

use thiserror::Error;

/// Main error type for Crawl-Lens operations
#[derive(Debug, Error)]
pub enum LensError {
    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to read page {path}: {source}")]
    PageRead {
        path: String,
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),
}

/// Result type alias for Crawl-Lens operations
pub type Result<T> = std::result::Result<T, LensError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{FetchResult, PageProcessor};
pub use stats::{CorpusStats, StatsSnapshot};
pub use self::url::{canonicalize, normalize, CanonicalUrl, ScopeFilter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_converts_into_lens_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: LensError = output::OutputError::from(io).into();
        assert!(matches!(err, LensError::Output(output::OutputError::Io(_))));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_page_read_error_names_the_file() {
        let err = LensError::PageRead {
            path: "pages/index.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read page pages/index.html: missing"
        );
    }
}
