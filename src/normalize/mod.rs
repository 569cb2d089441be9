//! Result normalization
//!
//! This module finalizes extractor output:
//! - The record types every extractor produces
//! - The mandatory-field gate that drops incomplete items
//! - The tagged `PageResult` and the flat error shape at the response boundary

mod records;
mod response;

pub use records::{
    EpisodePlaybackPage, EpisodeRef, ReleaseSummary, SearchResultItem, SeriesPage, VideoSources,
    VIDEO_NOT_FOUND,
};
pub use response::{ErrorBody, PageResult, Response};

/// Gates an item on its mandatory title and link
///
/// Blank values count as missing. Items failing the gate are dropped, never
/// emitted partially.
///
/// # Arguments
///
/// * `kind` - Item kind, for logging
/// * `title` - The extracted title, if any
/// * `link` - The extracted link, if any
///
/// # Returns
///
/// `Some((title, link))` when both are present, `None` otherwise
pub fn require_fields(
    kind: &str,
    title: Option<String>,
    link: Option<String>,
) -> Option<(String, String)> {
    let title = title.filter(|t| !t.trim().is_empty());
    let link = link.filter(|l| !l.trim().is_empty());

    match (title, link) {
        (Some(title), Some(link)) => Some((title, link)),
        (title, link) => {
            tracing::debug!(
                "Dropping {} item (title: {:?}, link: {:?})",
                kind,
                title,
                link
            );
            None
        }
    }
}
