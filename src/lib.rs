//! Bubuwi: a content-extraction pipeline for an anime streaming site
//!
//! This crate fetches pages (HTML or RSS) from a single external site and
//! turns their markup into normalized, strongly-typed records: the latest
//! releases, search results, a series' episode index, or an episode's
//! playable video sources.

pub mod config;
pub mod extract;
pub mod feed;
pub mod fetch;
pub mod html;
pub mod normalize;
pub mod pipeline;

use thiserror::Error;

/// Main error type for Bubuwi operations
#[derive(Debug, Error)]
pub enum BubuwiError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed document at {url}: {message}")]
    MalformedDocument { url: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Network and transport failures while retrieving a document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Bubuwi operations
pub type Result<T> = std::result::Result<T, BubuwiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use normalize::{PageResult, Response};
pub use pipeline::{PageRequest, Pipeline};
