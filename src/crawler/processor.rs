//! Page processor - per-page orchestration
//!
//! For each fetched page the processor:
//! - Records the requested URL as visited (successful or not)
//! - Extracts links and keeps the ones inside the crawl scope
//! - Tokenizes the visible text and folds it into the corpus statistics
//! - Publishes a snapshot of the statistics

use crate::config::Config;
use crate::crawler::fetcher::FetchResult;
use crate::crawler::parser::extract_links;
use crate::crawler::tokenizer::tokenize;
use crate::output::SnapshotSink;
use crate::stats::{CorpusStats, StatsSnapshot, StopWordSet};
use crate::url::{canonicalize, CanonicalUrl, ScopeFilter};

/// Processes fetched pages one at a time
///
/// The processor owns the corpus statistics; `process` takes `&mut self`, so
/// pages are handled strictly one after another. A caller that needs to share a
/// processor across tasks should wrap the whole processor in a single mutex.
pub struct PageProcessor<S: SnapshotSink> {
    scope: ScopeFilter,
    stats: CorpusStats,
    sink: S,
}

impl<S: SnapshotSink> PageProcessor<S> {
    /// Creates a processor from its parts
    pub fn new(scope: ScopeFilter, stats: CorpusStats, sink: S) -> Self {
        Self { scope, stats, sink }
    }

    /// Creates a processor with empty statistics from configuration
    pub fn from_config(config: &Config, sink: S) -> Self {
        let scope = ScopeFilter::new(&config.scope);
        let stats = CorpusStats::new(
            StopWordSet::new(&config.text.stop_words),
            &config.scope.root_domain,
            config.output.top_words,
        )
        .with_domain_match(config.scope.domain_match);
        Self::new(scope, stats, sink)
    }

    /// Handles one fetched page and returns the links to crawl next
    ///
    /// # Arguments
    ///
    /// * `requested_url` - The URL the fetch layer was asked for
    /// * `fetch` - What the fetch layer got back
    ///
    /// # Returns
    ///
    /// In-scope links in the order they appear on the page. Empty when the
    /// fetch failed, the body was empty, or the requested URL is unparsable.
    pub fn process(&mut self, requested_url: &str, fetch: &FetchResult) -> Vec<CanonicalUrl> {
        let page_url = match canonicalize(requested_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Ignoring unparsable requested URL: {}", e);
                self.emit_snapshot();
                return Vec::new();
            }
        };

        self.stats.record_visit(&page_url);

        let content = match fetch.page_content() {
            Some(content) => content,
            None => {
                tracing::debug!(
                    "No content for {} (status {}{})",
                    page_url,
                    fetch.status_code,
                    fetch
                        .error_info
                        .as_deref()
                        .map(|e| format!(", {}", e))
                        .unwrap_or_default()
                );
                self.emit_snapshot();
                return Vec::new();
            }
        };

        let extracted = extract_links(page_url.as_url(), content);
        let extracted_count = extracted.len();
        let links: Vec<CanonicalUrl> = extracted
            .into_iter()
            .filter(|link| self.scope.accepts(link.as_url()))
            .collect();

        let tokens = tokenize(content);
        if !tokens.is_empty() {
            self.stats.record_content(&page_url, &tokens);
        }

        tracing::info!(
            "Processed {}: {} links ({} in scope), {} tokens",
            page_url,
            extracted_count,
            links.len(),
            tokens.len()
        );

        self.emit_snapshot();
        links
    }

    /// Current statistics
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Consumes the processor, returning the statistics and the sink
    pub fn into_parts(self) -> (CorpusStats, S) {
        (self.stats, self.sink)
    }

    fn emit_snapshot(&mut self) {
        let snapshot = self.stats.snapshot();
        if let Err(e) = self.sink.emit(&snapshot) {
            tracing::warn!("Failed to write snapshot: {}", e);
        }
    }
}
