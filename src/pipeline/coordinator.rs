//! Pipeline coordinator
//!
//! Drives one request through fetch, load, extract and normalize. Every
//! request is independent: one network fetch (plus bounded enrichment
//! fetches when enabled), then synchronous extraction.

use crate::config::{Config, SearchSource};
use crate::extract::{
    extract_episode_playback, extract_feed_results, extract_latest, extract_search_results,
    extract_series_page,
};
use crate::feed::parse_feed;
use crate::fetch::{DocumentKind, Fetcher, SourceDocument};
use crate::html::HtmlDocument;
use crate::normalize::{PageResult, Response};
use crate::pipeline::enrich::enrich_thumbnails;
use crate::pipeline::PageRequest;
use crate::BubuwiError;
use std::sync::Arc;
use url::Url;

/// The extraction pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Arc<Config>,
    fetcher: Fetcher,
}

impl Pipeline {
    /// Creates a pipeline instance
    ///
    /// # Arguments
    ///
    /// * `config` - Site, HTTP, enrichment and selector configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - Ready to serve requests
    /// * `Err(BubuwiError)` - The base URL or HTTP client is unusable
    pub fn new(config: Config) -> Result<Self, BubuwiError> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }

    /// Resolves the document URL and kind a request is served from
    pub fn endpoint(&self, request: &PageRequest) -> Result<(Url, DocumentKind), BubuwiError> {
        match request {
            PageRequest::Latest => Ok((self.fetcher.home_url(), DocumentKind::Html)),
            PageRequest::Search { query } => match self.config.site.search_source {
                SearchSource::Html => Ok((self.fetcher.search_url(query)?, DocumentKind::Html)),
                SearchSource::Feed => Ok((self.fetcher.feed_url(query)?, DocumentKind::Feed)),
            },
            PageRequest::SeriesPage { url } | PageRequest::Episode { url } => {
                Ok((Url::parse(url)?, DocumentKind::Html))
            }
        }
    }

    /// Runs a request end to end
    ///
    /// # Returns
    ///
    /// * `Ok(PageResult)` - The tagged, normalized record
    /// * `Err(BubuwiError)` - Fetch failure or unloadable document
    pub async fn run(&self, request: &PageRequest) -> Result<PageResult, BubuwiError> {
        let (url, kind) = self.endpoint(request)?;
        tracing::info!("Scraping {} page from {}", request.type_tag(), url);

        let source = self.fetcher.fetch(&url, kind).await?;
        let mut result = self.extract_document(request, source)?;

        if let PageResult::Search { results, .. } = &mut result {
            if kind == DocumentKind::Feed && self.config.enrichment.enabled {
                let items = std::mem::take(results);
                *results =
                    enrich_thumbnails(&self.fetcher, Arc::clone(&self.config), items).await;
            }
        }

        Ok(result)
    }

    /// Runs a request and translates the outcome into a response
    ///
    /// Never fails: any error becomes the flat error body with status 500.
    pub async fn respond(&self, request: &PageRequest) -> Response {
        Response::from_result(self.run(request).await)
    }

    /// Extracts a record from an already retrieved document
    ///
    /// The request selects the extractor; for search requests the document
    /// kind selects between the HTML and feed variants.
    pub fn extract_document(
        &self,
        request: &PageRequest,
        source: SourceDocument,
    ) -> Result<PageResult, BubuwiError> {
        let selectors = &self.config.selectors;

        let result = match request {
            PageRequest::Latest => {
                let doc = HtmlDocument::from_source(&source)?;
                PageResult::Latest {
                    results: extract_latest(&doc, &selectors.latest),
                }
            }
            PageRequest::Search { query } => {
                let results = match source.kind {
                    DocumentKind::Html => {
                        let doc = HtmlDocument::from_source(&source)?;
                        extract_search_results(&doc, &selectors.search)
                    }
                    DocumentKind::Feed => {
                        extract_feed_results(parse_feed(source.body.as_bytes(), &source.url)?)
                    }
                };
                PageResult::Search {
                    query: query.clone(),
                    results,
                }
            }
            PageRequest::SeriesPage { .. } => {
                let doc = HtmlDocument::from_source(&source)?;
                PageResult::SeriesPage(extract_series_page(&doc, &selectors.series))
            }
            PageRequest::Episode { .. } => {
                let doc = HtmlDocument::from_source(&source)?;
                PageResult::Episode(extract_episode_playback(&doc, &selectors.episode))
            }
        };

        Ok(result)
    }
}
