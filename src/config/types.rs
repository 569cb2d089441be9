use crate::extract::{EpisodeSelectors, LatestSelectors, SearchSelectors, SeriesSelectors};
use serde::{Deserialize, Serialize};

/// Default site the pipeline scrapes
pub const DEFAULT_BASE_URL: &str = "https://samehadaku.li";

/// Placeholder in endpoint templates that receives the encoded search term
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Main configuration structure for Bubuwi
///
/// Every table is optional; missing tables and fields fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub enrichment: EnrichmentConfig,
    pub selectors: SelectorConfig,
}

/// Which document the search page type is extracted from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    /// The HTML search-results page (thumbnails and genres available)
    #[default]
    Html,
    /// The RSS search feed (publish dates available)
    Feed,
}

/// Target site and endpoint templates
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute base URL of the site; also the latest-releases page
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path template for the HTML search page, containing `{query}`
    #[serde(rename = "search-path")]
    pub search_path: String,

    /// Path template for the RSS search feed, containing `{query}`
    #[serde(rename = "feed-path")]
    pub feed_path: String,

    /// Document used for search requests
    #[serde(rename = "search-source")]
    pub search_source: SearchSource,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: "/?s={query}".to_string(),
            feed_path: "/?s={query}&feed=rss2".to_string(),
            search_source: SearchSource::Html,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall fetch deadline in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment deadline in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("bubuwi/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 20,
            connect_timeout_secs: 10,
        }
    }
}

/// Thumbnail enrichment of feed search results
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Fetch each feed result's series page to fill in its thumbnail
    pub enabled: bool,

    /// Maximum number of series pages fetched at once
    #[serde(rename = "max-concurrent")]
    pub max_concurrent: u32,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_concurrent: 4,
        }
    }
}

/// Per-page-type selector tables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub latest: LatestSelectors,
    pub search: SearchSelectors,
    pub series: SeriesSelectors,
    pub episode: EpisodeSelectors,
}
