/// A request for one page type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// The latest-releases listing
    Latest,
    /// Search results for a free-text term
    Search { query: String },
    /// A series page by URL
    SeriesPage { url: String },
    /// An episode playback page by URL
    Episode { url: String },
}

impl PageRequest {
    /// Builds a request from optional inbound parameters
    ///
    /// Exactly one is honored, in priority order: episode URL, series URL,
    /// search term, then the latest listing. Blank values count as absent.
    ///
    /// # Example
    ///
    /// ```
    /// use bubuwi::PageRequest;
    ///
    /// let request = PageRequest::from_params(None, None, Some("naruto"));
    /// assert_eq!(request, PageRequest::Search { query: "naruto".to_string() });
    /// ```
    pub fn from_params(url: Option<&str>, series: Option<&str>, search: Option<&str>) -> Self {
        let present = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(url) = present(url) {
            Self::Episode { url }
        } else if let Some(url) = present(series) {
            Self::SeriesPage { url }
        } else if let Some(query) = present(search) {
            Self::Search { query }
        } else {
            Self::Latest
        }
    }

    /// The page-type tag as it appears on the wire
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Search { .. } => "search",
            Self::SeriesPage { .. } => "seriesPage",
            Self::Episode { .. } => "episode",
        }
    }
}
