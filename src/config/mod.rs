//! Configuration module for Bubuwi
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, including the per-page-type selector tables.
//!
//! # Example
//!
//! ```no_run
//! use bubuwi::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bubuwi.toml")).unwrap();
//! println!("Latest items come from: {}", config.selectors.latest.item);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, EnrichmentConfig, HttpConfig, SearchSource, SelectorConfig, SiteConfig,
    DEFAULT_BASE_URL, QUERY_PLACEHOLDER,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
