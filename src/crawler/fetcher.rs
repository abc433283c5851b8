//! Fetch results and the HTTP adapter that produces them
//!
//! The page processor never performs I/O itself; it consumes a [`FetchResult`]
//! handed over by whatever fetch layer the caller uses. [`fetch_page`] is a
//! minimal reqwest-based fetch layer used by the command-line tool.

use crate::config::UserAgentConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Outcome of fetching one URL
///
/// Owned by the caller; the core only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    /// HTTP status code (0 when the request never got a response)
    pub status_code: u16,

    /// Raw response body, if any was received
    pub content: Option<Vec<u8>>,

    /// Description of a transport failure, if any
    pub error_info: Option<String>,
}

impl FetchResult {
    /// A 200 response with the given body
    pub fn ok(content: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code: 200,
            content: Some(content.into()),
            error_info: None,
        }
    }

    /// A response with the given status and no body
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            content: None,
            error_info: None,
        }
    }

    /// A request that failed before any response arrived
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status_code: 0,
            content: None,
            error_info: Some(message.into()),
        }
    }

    /// Returns the body when the fetch succeeded with a non-empty 200 response
    pub fn page_content(&self) -> Option<&[u8]> {
        if self.status_code != StatusCode::OK.as_u16() {
            return None;
        }
        self.content.as_deref().filter(|body| !body.is_empty())
    }

    pub fn is_success(&self) -> bool {
        self.page_content().is_some()
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use crawl_lens::config::UserAgentConfig;
/// use crawl_lens::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", config.crawler_name, config.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once and converts the outcome into a [`FetchResult`]
///
/// Never fails: transport errors are reported through `error_info` with a
/// status code of 0. Redirects are followed by the client, and there are no
/// retries.
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let message = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            tracing::debug!("Fetch of {} failed: {}", url, message);
            return FetchResult::error(message);
        }
    };

    let status_code = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => FetchResult {
            status_code,
            content: Some(body.to_vec()),
            error_info: None,
        },
        Err(e) => FetchResult {
            status_code,
            content: None,
            error_info: Some(format!("Failed to read body: {}", e)),
        },
    }
}
