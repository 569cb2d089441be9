//! Normalized record types produced by the extractors

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Wire value standing in for "no video found" in `videoSources`
pub const VIDEO_NOT_FOUND: &str = "Video tidak ditemukan";

/// One entry of the latest-releases listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    pub title: String,
    pub link: String,
    /// Episode label as shown by the site (e.g. "Episode 12")
    pub episode: Option<String>,
    /// Thumbnail URL, or the configured placeholder when the item has none
    pub thumbnail: String,
}

/// One search result
///
/// HTML-derived results carry `genres` (possibly empty) and usually a
/// thumbnail; feed-derived results carry `pub_date` and have `genres` unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub title: String,
    pub link: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
    pub genres: Option<Vec<String>>,
}

/// One entry of a series' episode index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeRef {
    pub title: String,
    pub link: String,
    /// Release date in the site's own format
    pub date: String,
}

/// A series page: metadata plus its episode index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPage {
    episodes: Vec<EpisodeRef>,
    thumbnail: Option<String>,
    synopsis: String,
    episode_count: usize,
}

impl SeriesPage {
    /// Builds a series page; the episode count is always the list length
    pub fn new(episodes: Vec<EpisodeRef>, thumbnail: Option<String>, synopsis: String) -> Self {
        let episode_count = episodes.len();
        Self {
            episodes,
            thumbnail,
            synopsis,
            episode_count,
        }
    }

    /// Episodes, most recent first as listed by the site
    pub fn episodes(&self) -> &[EpisodeRef] {
        &self.episodes
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn episode_count(&self) -> usize {
        self.episode_count
    }
}

/// Outcome of collecting an episode's video sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSources {
    /// At least one embed source, in document order
    Found(Vec<String>),
    /// The player held no embed with a source
    NotFound,
}

impl VideoSources {
    /// Wraps collected sources, mapping an empty list to `NotFound`
    pub fn from_sources(sources: Vec<String>) -> Self {
        if sources.is_empty() {
            Self::NotFound
        } else {
            Self::Found(sources)
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The real sources; empty when none were found
    pub fn sources(&self) -> &[String] {
        match self {
            Self::Found(sources) => sources,
            Self::NotFound => &[],
        }
    }

    /// Wire representation: the sources, or a single `VIDEO_NOT_FOUND`
    pub fn to_wire(&self) -> Vec<&str> {
        match self {
            Self::Found(sources) => sources.iter().map(String::as_str).collect(),
            Self::NotFound => vec![VIDEO_NOT_FOUND],
        }
    }
}

/// An episode's playback page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodePlaybackPage {
    pub title: String,
    pub sources: VideoSources,
}

impl Serialize for EpisodePlaybackPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EpisodePlaybackPage", 3)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("videoSources", &self.sources.to_wire())?;
        state.serialize_field("videoFound", &self.sources.is_found())?;
        state.end()
    }
}
