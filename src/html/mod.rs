//! HTML query engine
//!
//! Every page extractor is written against the types in this module rather
//! than against `scraper` directly:
//! - `Query`: a compiled CSS selector, loadable from configuration
//! - `HtmlDocument`: a loaded, traversable document with its base URL
//! - `Node`: an element handle offering attribute and text reads

mod document;
mod query;

pub use document::{resolve_link, resolve_source, HtmlDocument, Node};
pub use query::Query;
