//! Output module for publishing crawl statistics
//!
//! This module handles:
//! - The snapshot sink interface used by the page processor
//! - Writing the four plain-text reports
//! - Rendering a console summary

mod reports;
pub mod stats;
mod traits;

pub use reports::{
    format_common_words, format_longest_page, format_subdomains, format_unique_pages,
    TextReportWriter, COMMON_WORDS_FILE, LONGEST_PAGE_FILE, SUBDOMAINS_FILE, UNIQUE_PAGES_FILE,
};
pub use stats::render_statistics;
pub use traits::{MemorySink, OutputError, OutputResult, SnapshotSink};
