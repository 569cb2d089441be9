use crate::BubuwiError;
use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use url::Url;

/// One item of a syndication feed
///
/// Fields are kept optional here; items missing a title or link are dropped
/// by the normalizer, not by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
}

/// Parses feed bytes into a list of items in feed order
///
/// A feed without any items is a valid, empty result.
///
/// # Arguments
/// * `data` - Raw feed bytes (RSS or Atom)
/// * `feed_url` - The URL the feed was fetched from, used in errors
///
/// # Returns
/// * `Ok(Vec<FeedItem>)` - Parsed items, possibly empty
/// * `Err(BubuwiError::MalformedDocument)` - The bytes are not a feed
pub fn parse_feed(data: &[u8], feed_url: &Url) -> Result<Vec<FeedItem>, BubuwiError> {
    let parsed = feed_rs::parser::parse(data).map_err(|e| BubuwiError::MalformedDocument {
        url: feed_url.to_string(),
        message: format!("failed to parse feed: {}", e),
    })?;

    let items: Vec<FeedItem> = parsed.entries.iter().map(map_entry).collect();

    tracing::debug!("Parsed {} feed items from {}", items.len(), feed_url);

    Ok(items)
}

fn map_entry(entry: &Entry) -> FeedItem {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty());

    let link = entry
        .links
        .first()
        .map(|l| l.href.trim().to_string())
        .filter(|l| !l.is_empty());

    FeedItem {
        title,
        link,
        pub_date: entry.published.or(entry.updated),
    }
}
