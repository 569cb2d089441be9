//! Syndication feed parsing
//!
//! Search results can also be read from the site's RSS search feed. This
//! module turns feed XML into a flat list of items; mapping them onto
//! search results happens in the extractors.

mod parser;

pub use parser::{parse_feed, FeedItem};
