//! Request pipeline
//!
//! This module ties the components together for one request:
//! - Mapping inbound parameters onto a page type
//! - Fetching the document from the right endpoint
//! - Running the matching extractor and tagging the result
//! - Optional bounded enrichment of feed search results

mod coordinator;
mod enrich;
mod request;

pub use coordinator::Pipeline;
pub use enrich::enrich_thumbnails;
pub use request::PageRequest;

