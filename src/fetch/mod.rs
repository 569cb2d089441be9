//! Document fetching
//!
//! This module retrieves documents from the target site:
//! - Building the HTTP client with a fetch deadline
//! - Interpolating search terms into the endpoint templates
//! - Classifying transport failures into `FetchError`

mod fetcher;

pub use fetcher::{build_http_client, Fetcher};

use url::Url;

/// The kind of document a fetch produced
///
/// Chosen by the endpoint that was requested, never by sniffing the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// An HTML page
    Html,
    /// An XML syndication feed
    Feed,
}

/// Raw document content as retrieved from the site
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Final URL the content was retrieved from
    pub url: Url,

    /// Declared kind of the content
    pub kind: DocumentKind,

    /// Response body
    pub body: String,
}

impl SourceDocument {
    /// Creates a document from content obtained elsewhere (e.g. a saved file)
    pub fn new(url: Url, kind: DocumentKind, body: impl Into<String>) -> Self {
        Self {
            url,
            kind,
            body: body.into(),
        }
    }
}
