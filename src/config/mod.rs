//! Configuration module for Crawl-Lens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Scope rules (allowed domains, gated domains, excluded extensions) live here so
//! the crawl boundary can change without recompiling.
//!
//! # Example
//!
//! ```no_run
//! use crawl_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl-lens.toml")).unwrap();
//! println!("Allowed domains: {:?}", config.scope.allowed_domains);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DomainMatch, GatedDomain, OutputConfig, ScopeConfig, TextConfig, UserAgentConfig,
    DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_STOP_WORDS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
