//! Episode playback page: title and embedded video sources

use crate::html::{HtmlDocument, Query};
use crate::normalize::{EpisodePlaybackPage, VideoSources};
use serde::{Deserialize, Serialize};

pub const EPISODE_TITLE: &str = ".entry-title";
pub const EPISODE_PLAYER: &str = ".player-embed";
pub const EPISODE_EMBED: &str = "iframe";

/// Selectors for an episode playback page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EpisodeSelectors {
    /// Heading holding the episode title
    pub title: Query,

    /// Player container(s)
    pub player: Query,

    /// Embed nodes inside a player; their `src` is collected
    pub embed: Query,
}

impl Default for EpisodeSelectors {
    fn default() -> Self {
        Self {
            title: Query::builtin(EPISODE_TITLE),
            player: Query::builtin(EPISODE_PLAYER),
            embed: Query::builtin(EPISODE_EMBED),
        }
    }
}

/// Extracts an episode's title and video sources
///
/// Sources are collected in document order from every embed inside a
/// player that has a non-empty `src`. No sources at all yields `VideoSources::NotFound`.
pub fn extract_episode_playback(
    doc: &HtmlDocument,
    selectors: &EpisodeSelectors,
) -> EpisodePlaybackPage {
    let title = doc
        .find(&selectors.title)
        .map(|n| n.text())
        .unwrap_or_default();

    // Each embed is visited once, even under nested players
    let sources: Vec<String> = doc
        .select(&selectors.embed)
        .filter(|embed| embed.within(&selectors.player))
        .filter_map(|embed| embed.source_attr("src"))
        .collect();

    tracing::debug!("Extracted {} video sources from {}", sources.len(), doc.base());

    EpisodePlaybackPage {
        title,
        sources: VideoSources::from_sources(sources),
    }
}
