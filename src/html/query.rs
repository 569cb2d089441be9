use crate::ConfigError;
use scraper::Selector;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A compiled CSS selector
///
/// Keeps its source text so selector tables can be logged and printed back.
/// Deserializes from a plain string; a selector that fails to compile is a
/// configuration error at load time.
#[derive(Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Query {
    source: String,
    selector: Selector,
}

impl Query {
    /// Compiles a selector string
    ///
    /// # Returns
    ///
    /// * `Ok(Query)` - Successfully compiled selector
    /// * `Err(ConfigError::InvalidSelector)` - The string is not a valid CSS selector
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let selector = Selector::parse(source)
            .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", source, e)))?;

        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }

    /// Compiles one of the built-in default selectors
    ///
    /// Panics on an invalid selector; only called with string literals that
    /// are covered by the config defaults test.
    pub(crate) fn builtin(source: &'static str) -> Self {
        match Self::parse(source) {
            Ok(query) => query,
            Err(e) => panic!("built-in selector is invalid: {}", e),
        }
    }

    /// The selector's source text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl TryFrom<String> for Query {
    type Error = ConfigError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Query::parse(&source)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Query").field(&self.source).finish()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
