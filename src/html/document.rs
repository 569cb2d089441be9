//! Loaded HTML documents and element handles

use crate::fetch::SourceDocument;
use crate::html::Query;
use crate::BubuwiError;
use scraper::{ElementRef, Html};
use url::Url;

/// A parsed HTML document together with the URL it was loaded from
///
/// The base URL is used to resolve relative `href`/`src` attributes.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
    base: Url,
}

impl HtmlDocument {
    /// Parses HTML text into a traversable document
    ///
    /// The HTML parser itself is error-tolerant, so the only payload that is
    /// rejected outright is one with no content at all.
    ///
    /// # Arguments
    ///
    /// * `text` - The HTML content
    /// * `base` - The URL the document was fetched from
    ///
    /// # Returns
    ///
    /// * `Ok(HtmlDocument)` - Successfully loaded document
    /// * `Err(BubuwiError::MalformedDocument)` - The payload is empty
    pub fn parse(text: &str, base: &Url) -> Result<Self, BubuwiError> {
        if text.trim().is_empty() {
            return Err(BubuwiError::MalformedDocument {
                url: base.to_string(),
                message: "document body is empty".to_string(),
            });
        }

        Ok(Self {
            html: Html::parse_document(text),
            base: base.clone(),
        })
    }

    /// Loads a fetched source document
    pub fn from_source(source: &SourceDocument) -> Result<Self, BubuwiError> {
        Self::parse(&source.body, &source.url)
    }

    /// The URL this document was loaded from
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Selects all elements matching the query, in document order
    pub fn select<'a>(&'a self, query: &'a Query) -> impl Iterator<Item = Node<'a>> + 'a {
        // Walk from the root element so detached subtrees are never visited
        let base = &self.base;
        self.html
            .root_element()
            .select(query.selector())
            .map(move |element| Node { element, base })
    }

    /// Selects the first element matching the query
    pub fn find<'a>(&'a self, query: &'a Query) -> Option<Node<'a>> {
        self.select(query).next()
    }

    /// Returns a copy of this document with every element matching the
    /// query detached from the tree
    pub fn without(&self, query: &Query) -> Self {
        let mut html = self.html.clone();

        let ids: Vec<_> = html
            .root_element()
            .select(query.selector())
            .map(|element| element.id())
            .collect();

        for id in ids {
            if let Some(mut node) = html.tree.get_mut(id) {
                node.detach();
            }
        }

        Self {
            html,
            base: self.base.clone(),
        }
    }
}

/// A handle to one element of an `HtmlDocument`
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
    base: &'a Url,
}

impl<'a> Node<'a> {
    /// Selects all descendants matching the query, in document order
    pub fn select<'b>(&self, query: &'b Query) -> impl Iterator<Item = Node<'a>> + 'b
    where
        'a: 'b,
    {
        let base = self.base;
        self.element
            .select(query.selector())
            .map(move |element| Node { element, base })
    }

    /// Selects the first descendant matching the query
    pub fn find(&self, query: &Query) -> Option<Node<'a>> {
        self.select(query).next()
    }

    /// Reads an attribute value; absent attributes yield `None`
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Reads an attribute holding a link and resolves it against the
    /// document URL
    pub fn link_attr(&self, name: &str) -> Option<String> {
        self.attr(name)
            .and_then(|href| resolve_link(href, self.base))
    }

    /// Reads an embed source attribute
    ///
    /// Relative values are resolved against the document URL. Anything else
    /// non-empty, such as `about:blank`, is kept verbatim.
    pub fn source_attr(&self, name: &str) -> Option<String> {
        self.attr(name)
            .and_then(|src| resolve_source(src, self.base))
    }

    /// Whether any ancestor of this element matches the query
    pub fn within(&self, query: &Query) -> bool {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| query.selector().matches(&ancestor))
    }

    /// Concatenated text content with surrounding whitespace trimmed
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}

/// Resolves a link to an absolute URL
///
/// Returns None if the link should be treated as absent:
/// - empty or whitespace-only values
/// - javascript:, mailto:, tel: schemes and data: URIs
/// - fragment-only links
/// - values that cannot be resolved, or resolve to a non-HTTP(S) URL
pub fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute.to_string())
        }
        _ => None,
    }
}

/// Resolves an embed source, keeping values that are not joinable URLs
///
/// Returns None only for empty or whitespace-only values.
pub fn resolve_source(src: &str, base: &Url) -> Option<String> {
    let src = src.trim();

    if src.is_empty() {
        return None;
    }

    match base.join(src) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(_) => Some(src.to_string()),
    }
}
