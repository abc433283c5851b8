//! Corpus statistics for the crawl
//!
//! This module accumulates the statistics reported after every page.
//!
//! # Components
//!
//! - `CorpusStats`: Running counters (visited set, word frequencies, longest page, subdomains)
//! - `StatsSnapshot`: Immutable point-in-time view handed to report writers
//! - `StopWordSet`: Words excluded from the frequency table

mod corpus;
mod snapshot;
mod stop_words;

// Re-export main types
pub use corpus::CorpusStats;
pub use snapshot::{LongestPage, StatsSnapshot};
pub use stop_words::StopWordSet;
