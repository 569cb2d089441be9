//! Page extractors
//!
//! One pure function per page type. Each walks a loaded document with its
//! own selector table and applies a per-field fallback policy:
//! - latest: placeholder thumbnail, optional episode label
//! - search: page title removed first, genres always present (maybe empty)
//! - series: empty episode list when the container is missing
//! - episode: `VideoSources::NotFound` when no embed has a source
//!
//! Selector tables are plain data (`config::SelectorConfig`), so markup
//! changes on the site are handled by editing configuration.

mod episode;
mod latest;
mod search;
mod series;

pub use episode::{extract_episode_playback, EpisodeSelectors};
pub use latest::{extract_latest, LatestSelectors, PLACEHOLDER_THUMBNAIL};
pub use search::{extract_feed_results, extract_search_results, SearchSelectors};
pub use series::{extract_series_page, extract_series_thumbnail, SeriesSelectors};
