//! HTTP fetcher implementation
//!
//! One attempt per document: no retries, no caching. Redirects, TLS and
//! compression are left to reqwest.

use crate::config::{Config, HttpConfig, QUERY_PLACEHOLDER};
use crate::fetch::{DocumentKind, SourceDocument};
use crate::{BubuwiError, FetchError};
use reqwest::Client;
use std::time::Duration;
use url::{form_urlencoded, Url};

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use bubuwi::config::HttpConfig;
/// use bubuwi::fetch::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves documents from the configured site
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: Url,
    search_path: String,
    feed_path: String,
}

impl Fetcher {
    /// Creates a fetcher from the site and HTTP configuration
    pub fn new(config: &Config) -> Result<Self, BubuwiError> {
        let client = build_http_client(&config.http).map_err(|e| FetchError::Transport {
            url: config.site.base_url.clone(),
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.site.base_url)?,
            search_path: config.site.search_path.clone(),
            feed_path: config.site.feed_path.clone(),
        })
    }

    /// URL of the latest-releases page
    pub fn home_url(&self) -> Url {
        self.base_url.clone()
    }

    /// URL of the HTML search page for a search term
    pub fn search_url(&self, query: &str) -> Result<Url, BubuwiError> {
        self.endpoint(&self.search_path, query)
    }

    /// URL of the RSS search feed for a search term
    pub fn feed_url(&self, query: &str) -> Result<Url, BubuwiError> {
        self.endpoint(&self.feed_path, query)
    }

    /// Interpolates the form-encoded search term into an endpoint template
    fn endpoint(&self, template: &str, query: &str) -> Result<Url, BubuwiError> {
        let encoded: String = form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
        let path = template.replace(QUERY_PLACEHOLDER, &encoded);
        Ok(self.base_url.join(&path)?)
    }

    /// Fetches a document
    ///
    /// # Error Classification
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | Non-2xx status | `FetchError::Status` |
    /// | Deadline exceeded | `FetchError::Timeout` |
    /// | DNS / connection refused / TLS | `FetchError::Connect` |
    /// | Anything else | `FetchError::Transport` |
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    /// * `kind` - The kind of document this endpoint serves
    pub async fn fetch(&self, url: &Url, kind: DocumentKind) -> Result<SourceDocument, BubuwiError> {
        tracing::debug!("Fetching {:?} document: {}", kind, url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|e| classify_error(url, e))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(SourceDocument {
            url: final_url,
            kind,
            body,
        })
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else {
        FetchError::Transport {
            url,
            message: error.to_string(),
        }
    }
}
