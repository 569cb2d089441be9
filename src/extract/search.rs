//! Search results, from the HTML results page or from the RSS search feed

use crate::feed::FeedItem;
use crate::html::{HtmlDocument, Node, Query};
use crate::normalize::{require_fields, SearchResultItem};
use serde::{Deserialize, Serialize};

pub const SEARCH_PAGE_TITLE: &str = "h2.page-title";
pub const SEARCH_ITEM: &str = ".animelist-search li";
pub const SEARCH_LINK: &str = "h2 a";
pub const SEARCH_THUMBNAIL: &str = "img";
pub const SEARCH_GENRE: &str = ".genre-info a";

/// Selectors for the HTML search-results page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSelectors {
    /// The page's own heading, removed before any result is read
    #[serde(rename = "page-title")]
    pub page_title: Query,

    /// One node per result
    pub item: Query,

    /// Heading anchor carrying the title (text) and the link
    pub link: Query,

    /// Thumbnail image inside the result
    pub thumbnail: Query,

    /// Repeated genre tag links inside the result
    pub genre: Query,
}

impl Default for SearchSelectors {
    fn default() -> Self {
        Self {
            page_title: Query::builtin(SEARCH_PAGE_TITLE),
            item: Query::builtin(SEARCH_ITEM),
            link: Query::builtin(SEARCH_LINK),
            thumbnail: Query::builtin(SEARCH_THUMBNAIL),
            genre: Query::builtin(SEARCH_GENRE),
        }
    }
}

/// Extracts search results from the HTML results page
///
/// The page title node is removed first so the page's own heading can never
/// be read as a result. Items without a title or link are dropped; genres
/// are always present on this variant, possibly empty.
pub fn extract_search_results(
    doc: &HtmlDocument,
    selectors: &SearchSelectors,
) -> Vec<SearchResultItem> {
    let doc = doc.without(&selectors.page_title);

    let results: Vec<SearchResultItem> = doc
        .select(&selectors.item)
        .filter_map(|item| extract_item(item, selectors))
        .collect();

    tracing::debug!("Extracted {} search results from {}", results.len(), doc.base());

    results
}

fn extract_item(item: Node<'_>, selectors: &SearchSelectors) -> Option<SearchResultItem> {
    let anchor = item.find(&selectors.link);
    let title = anchor.map(|a| a.text());
    let link = anchor.and_then(|a| a.link_attr("href"));

    let (title, link) = require_fields("search", title, link)?;

    let thumbnail = item
        .find(&selectors.thumbnail)
        .and_then(|img| img.link_attr("src"));

    let genres = item
        .select(&selectors.genre)
        .map(|g| g.text())
        .filter(|g| !g.is_empty())
        .collect();

    Some(SearchResultItem {
        title,
        link,
        pub_date: None,
        thumbnail,
        genres: Some(genres),
    })
}

/// Maps feed items onto search results
///
/// Feed results carry a publish date but no thumbnail or genres. Items
/// without a title or link are dropped.
pub fn extract_feed_results(items: Vec<FeedItem>) -> Vec<SearchResultItem> {
    items
        .into_iter()
        .filter_map(|item| {
            let (title, link) = require_fields("feed", item.title, item.link)?;
            Some(SearchResultItem {
                title,
                link,
                pub_date: item.pub_date,
                thumbnail: None,
                genres: None,
            })
        })
        .collect()
}
