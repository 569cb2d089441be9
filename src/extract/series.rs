//! Series page: episode index, thumbnail and synopsis

use crate::html::{HtmlDocument, Node, Query};
use crate::normalize::{require_fields, EpisodeRef, SeriesPage};
use serde::{Deserialize, Serialize};

pub const SERIES_ITEM: &str = ".eplister ul li";
pub const SERIES_ANCHOR: &str = "a";
pub const SERIES_TITLE: &str = ".epl-title";
pub const SERIES_DATE: &str = ".epl-date";
pub const SERIES_THUMBNAIL: &str = ".thumb img";
pub const SERIES_SYNOPSIS: &str = ".entry-content p";

/// Selectors for a series page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeriesSelectors {
    /// One node per episode in the episode list
    pub item: Query,

    /// The item's primary anchor; carries the link
    pub anchor: Query,

    /// Episode title, under the anchor
    pub title: Query,

    /// Episode date, under the anchor
    pub date: Query,

    /// Page-level series thumbnail
    pub thumbnail: Query,

    /// Page-level synopsis paragraph
    pub synopsis: Query,
}

impl Default for SeriesSelectors {
    fn default() -> Self {
        Self {
            item: Query::builtin(SERIES_ITEM),
            anchor: Query::builtin(SERIES_ANCHOR),
            title: Query::builtin(SERIES_TITLE),
            date: Query::builtin(SERIES_DATE),
            thumbnail: Query::builtin(SERIES_THUMBNAIL),
            synopsis: Query::builtin(SERIES_SYNOPSIS),
        }
    }
}

/// Extracts a series page
///
/// A missing or empty episode list yields an empty `episodes`, never an
/// error. The episode count is derived from the extracted list.
pub fn extract_series_page(doc: &HtmlDocument, selectors: &SeriesSelectors) -> SeriesPage {
    let episodes: Vec<EpisodeRef> = doc
        .select(&selectors.item)
        .filter_map(|item| extract_episode(item, selectors))
        .collect();

    let thumbnail = extract_series_thumbnail(doc, selectors);

    let synopsis = doc
        .find(&selectors.synopsis)
        .map(|p| p.text())
        .unwrap_or_default();

    tracing::debug!("Extracted {} episodes from {}", episodes.len(), doc.base());

    SeriesPage::new(episodes, thumbnail, synopsis)
}

/// Extracts the series thumbnail alone, for enriching search results
pub fn extract_series_thumbnail(doc: &HtmlDocument, selectors: &SeriesSelectors) -> Option<String> {
    doc.find(&selectors.thumbnail)
        .and_then(|img| img.link_attr("src"))
}

fn extract_episode(item: Node<'_>, selectors: &SeriesSelectors) -> Option<EpisodeRef> {
    let anchor = item.find(&selectors.anchor)?;

    let title = anchor.find(&selectors.title).map(|n| n.text());
    let link = anchor.link_attr("href");

    let (title, link) = require_fields("episode list", title, link)?;

    let date = anchor
        .find(&selectors.date)
        .map(|n| n.text())
        .unwrap_or_default();

    Some(EpisodeRef { title, link, date })
}
