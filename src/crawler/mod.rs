//! Crawler module for per-page processing
//!
//! This module contains the page-processing core, including:
//! - Link extraction from HTML
//! - Word tokenization of visible text
//! - Per-page orchestration of filtering and statistics
//! - A minimal HTTP adapter producing fetch results

mod fetcher;
mod parser;
mod processor;
mod tokenizer;

pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use parser::extract_links;
pub use processor::PageProcessor;
pub use tokenizer::{tokenize, tokens, visible_text};
