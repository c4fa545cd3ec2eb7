//! Error types for filter URL encoding, decoding and configuration.

use thiserror::Error;

/// Errors that can occur while building a configuration or while
/// encoding/decoding filter URLs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterUrlError {
    /// A path token matched neither a mapped URL prefix nor an indexed key.
    #[error("unrecognized prefix in url part: {0}")]
    UnrecognizedPrefix(String),

    /// Two URL keys were mapped to the same filter key, so the mapping
    /// cannot be inverted.
    #[error("filter key `{filter_key}` is mapped from both `{first}` and `{second}`")]
    DuplicateFilterKey {
        filter_key: String,
        first: String,
        second: String,
    },

    /// The same key was declared twice as a positional slot.
    #[error("positional slot `{0}` is declared more than once")]
    DuplicateSlot(String),

    /// A positional slot was given an empty multi-value separator.
    #[error("positional slot `{0}` has an empty multi-value separator")]
    EmptySeparator(String),

    /// No URL builder is registered under the requested name.
    #[error("no url builder registered for `{0}`")]
    UnknownRoute(String),

    /// A base URL handed to the URL builder could not be parsed.
    #[error("URL parsing error: {0}")]
    UrlParse(String),
}

impl From<url::ParseError> for FilterUrlError {
    fn from(err: url::ParseError) -> Self {
        FilterUrlError::UrlParse(err.to_string())
    }
}
