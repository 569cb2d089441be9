//! Thumbnail enrichment for feed search results
//!
//! Feed items carry no thumbnail. When enabled, each result's series page is
//! fetched to fill it in. Fetches run concurrently under a fixed cap, and a
//! failed fetch leaves that one result unenriched.

use crate::config::Config;
use crate::extract::extract_series_thumbnail;
use crate::fetch::{DocumentKind, Fetcher};
use crate::html::HtmlDocument;
use crate::normalize::SearchResultItem;
use crate::BubuwiError;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Fills in missing thumbnails from each result's series page
///
/// # Arguments
///
/// * `fetcher` - The fetcher to retrieve series pages with
/// * `config` - Configuration carrying the concurrency cap and series selectors
/// * `results` - Search results, in output order
///
/// # Returns
///
/// The same results in the same order, with thumbnails filled in where a
/// series page could be fetched and had one
pub async fn enrich_thumbnails(
    fetcher: &Fetcher,
    config: Arc<Config>,
    mut results: Vec<SearchResultItem>,
) -> Vec<SearchResultItem> {
    let semaphore = Arc::new(Semaphore::new(config.enrichment.max_concurrent as usize));
    let mut tasks = JoinSet::new();

    for (index, item) in results.iter().enumerate() {
        if item.thumbnail.is_some() {
            continue;
        }

        let url = match Url::parse(&item.link) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping enrichment of {}: {}", item.link, e);
                continue;
            }
        };

        let fetcher = fetcher.clone();
        let config = Arc::clone(&config);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => fetch_thumbnail(&fetcher, &config, &url).await,
                Err(_) => Ok(None),
            };
            (index, url, outcome)
        });
    }

    let mut enriched = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, _, Ok(Some(thumbnail)))) => {
                results[index].thumbnail = Some(thumbnail);
                enriched += 1;
            }
            Ok((_, url, Ok(None))) => {
                tracing::debug!("No thumbnail found on {}", url);
            }
            Ok((_, url, Err(e))) => {
                tracing::warn!("Enrichment failed for {}: {}", url, e);
            }
            Err(e) => {
                tracing::warn!("Enrichment task failed: {}", e);
            }
        }
    }

    tracing::debug!("Enriched {} of {} search results", enriched, results.len());

    results
}

async fn fetch_thumbnail(
    fetcher: &Fetcher,
    config: &Config,
    url: &Url,
) -> Result<Option<String>, BubuwiError> {
    let source = fetcher.fetch(url, DocumentKind::Html).await?;
    let doc = HtmlDocument::from_source(&source)?;
    Ok(extract_series_thumbnail(&doc, &config.selectors.series))
}
