//! Latest-releases listing (the site's home page)

use crate::html::{HtmlDocument, Node, Query};
use crate::normalize::{require_fields, ReleaseSummary};
use serde::{Deserialize, Serialize};

pub const LATEST_ITEM: &str = ".post-show ul li";
pub const LATEST_LINK: &str = "a";
pub const LATEST_EPISODE: &str = ".epx";
pub const LATEST_THUMBNAIL: &str = "img";
pub const PLACEHOLDER_THUMBNAIL: &str = "placeholder.jpg";

/// Selectors for the latest-releases listing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LatestSelectors {
    /// One node per release
    pub item: Query,

    /// Anchor carrying the title (`title` attribute) and the link
    pub link: Query,

    /// Episode label inside the item
    pub episode: Query,

    /// Thumbnail image inside the item
    pub thumbnail: Query,

    /// Thumbnail emitted when the item has no image
    #[serde(rename = "placeholder-thumbnail")]
    pub placeholder_thumbnail: String,
}

impl Default for LatestSelectors {
    fn default() -> Self {
        Self {
            item: Query::builtin(LATEST_ITEM),
            link: Query::builtin(LATEST_LINK),
            episode: Query::builtin(LATEST_EPISODE),
            thumbnail: Query::builtin(LATEST_THUMBNAIL),
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }
}

/// Extracts the latest releases in document order
///
/// Items without a title or link are dropped. A missing thumbnail becomes
/// the placeholder; a missing or blank episode label becomes `None`.
pub fn extract_latest(doc: &HtmlDocument, selectors: &LatestSelectors) -> Vec<ReleaseSummary> {
    let results: Vec<ReleaseSummary> = doc
        .select(&selectors.item)
        .filter_map(|item| extract_item(item, selectors))
        .collect();

    tracing::debug!("Extracted {} latest releases from {}", results.len(), doc.base());

    results
}

fn extract_item(item: Node<'_>, selectors: &LatestSelectors) -> Option<ReleaseSummary> {
    let anchor = item.find(&selectors.link);

    let title = anchor.and_then(|a| {
        a.attr("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| Some(a.text()))
    });
    let link = anchor.and_then(|a| a.link_attr("href"));

    let (title, link) = require_fields("latest", title, link)?;

    let episode = item
        .find(&selectors.episode)
        .map(|n| n.text())
        .filter(|e| !e.is_empty());

    let thumbnail = item
        .find(&selectors.thumbnail)
        .and_then(|img| img.link_attr("src"))
        .unwrap_or_else(|| selectors.placeholder_thumbnail.clone());

    Some(ReleaseSummary {
        title,
        link,
        episode,
        thumbnail,
    })
}
