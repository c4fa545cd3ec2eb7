//! Path tokens shared by the positional and prefix schemes.
//!
//! Encoding produces a `Vec<PathToken>` that is sorted and rendered as one
//! sequence; decoding parses raw segments back into the same type.

use crate::config::{Configuration, PREFIX_SEPARATOR};

/// One `/`-separated segment of the filters path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    /// Values of the positional slot at `slot_index`.
    Positional { slot_index: usize, values: Vec<String> },
    /// An empty positional slot kept to preserve the slot count.
    Placeholder { slot_index: usize },
    /// A `key-value` segment of the indexed scheme.
    Prefixed { url_key: String, value: String },
}

impl PathToken {
    /// Canonical ordering: positional slots in declared order, then prefixed
    /// tokens in indexed order. Unknown keys sort last.
    pub fn sort_key(&self, config: &Configuration) -> (u8, usize) {
        match self {
            PathToken::Positional { slot_index, .. } | PathToken::Placeholder { slot_index } => {
                (0, *slot_index)
            }
            PathToken::Prefixed { url_key, .. } => (
                1,
                config.indexed_position(url_key).unwrap_or(usize::MAX),
            ),
        }
    }

    /// Render the token into its path segment.
    pub fn render(&self, config: &Configuration) -> String {
        match self {
            PathToken::Positional { slot_index, values } => {
                let Some(slot) = config.slot(*slot_index) else {
                    return values.join(crate::config::DEFAULT_MULTI_VALUE_SEPARATOR);
                };
                match slot.value_prefix() {
                    Some(prefix) => values
                        .iter()
                        .map(|value| format!("{prefix}{value}"))
                        .collect::<Vec<_>>()
                        .join(&slot.multi_value_separator),
                    None => values.join(&slot.multi_value_separator),
                }
            }
            PathToken::Placeholder { slot_index } => config
                .slot(*slot_index)
                .map(|slot| slot.placeholder.clone())
                .unwrap_or_else(|| crate::config::DEFAULT_PLACEHOLDER.to_string()),
            PathToken::Prefixed { url_key, value } => {
                format!("{url_key}{PREFIX_SEPARATOR}{value}")
            }
        }
    }
}

/// Sort tokens into canonical order. The sort is stable, so values of one
/// key keep the order they were pushed in.
pub fn sort_tokens(config: &Configuration, tokens: &mut [PathToken]) {
    tokens.sort_by_key(|token| token.sort_key(config));
}

/// Join rendered tokens with `/`.
pub fn render_path(config: &Configuration, tokens: &[PathToken]) -> String {
    tokens
        .iter()
        .map(|token| token.render(config))
        .collect::<Vec<_>>()
        .join("/")
}

/// Split the filters path into raw segments.
///
/// An empty path yields no segments. Trailing empty segments (a trailing
/// slash) are dropped; interior ones are kept.
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}
