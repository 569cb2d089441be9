//! Tagged results and the response boundary

use crate::normalize::{EpisodePlaybackPage, ReleaseSummary, SearchResultItem, SeriesPage};
use crate::BubuwiError;
use serde::Serialize;
use serde_json::Value;

/// Message carried by every failure response
pub const FAILURE_MESSAGE: &str = "Scraping failed.";

/// A normalized record tagged with its page type
///
/// Serializes with a `type` discriminator so consumers never have to
/// inspect the payload to know its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PageResult {
    #[serde(rename = "latest")]
    Latest { results: Vec<ReleaseSummary> },

    #[serde(rename = "search")]
    Search {
        query: String,
        results: Vec<SearchResultItem>,
    },

    #[serde(rename = "seriesPage")]
    SeriesPage(SeriesPage),

    #[serde(rename = "episode")]
    Episode(EpisodePlaybackPage),
}

impl PageResult {
    /// The page-type tag as it appears on the wire
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Latest { .. } => "latest",
            Self::Search { .. } => "search",
            Self::SeriesPage(_) => "seriesPage",
            Self::Episode(_) => "episode",
        }
    }
}

/// The fixed failure shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn from_error(error: &BubuwiError) -> Self {
        Self {
            error: FAILURE_MESSAGE.to_string(),
            details: error.to_string(),
            status: 500,
        }
    }
}

/// A status code plus JSON body, ready for the response layer
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    /// Translates a pipeline outcome into a response
    ///
    /// Every failure, including one while serializing a success, becomes a
    /// single flat `ErrorBody` with status 500.
    pub fn from_result(result: Result<PageResult, BubuwiError>) -> Self {
        let serialized = result.and_then(|page| Ok(serde_json::to_value(&page)?));

        match serialized {
            Ok(body) => Self { status: 200, body },
            Err(e) => {
                tracing::error!("Scraping error: {}", e);
                Self::failure(&e)
            }
        }
    }

    fn failure(error: &BubuwiError) -> Self {
        let body = ErrorBody::from_error(error);
        let status = body.status;
        let body = serde_json::to_value(&body).unwrap_or_else(|_| {
            serde_json::json!({ "error": FAILURE_MESSAGE, "status": status })
        });
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
