//! Prefix-tagged (`key-value`) path segments.

use tracing::{trace, warn};

use crate::config::{Configuration, PREFIX_SEPARATOR};
use crate::core::token::PathToken;
use crate::error::FilterUrlError;
use crate::types::FilterMap;

/// Emit one `Prefixed` token per value of every remaining path entry.
///
/// `path_args` must only hold indexed keys; values are expected to be
/// sorted already.
pub fn encode_prefixed(path_args: FilterMap) -> Vec<PathToken> {
    path_args
        .into_iter()
        .flat_map(|(url_key, value)| {
            value.into_vec().into_iter().map(move |value| PathToken::Prefixed {
                url_key: url_key.clone(),
                value,
            })
        })
        .collect()
}

/// Try to read a segment as a prefixed token.
///
/// Mapped URL keys are checked first, in declaration order, as literal
/// `{url_key}-` prefixes. Otherwise the text before the first `-` is looked
/// up in the indexed order.
pub fn recognise(config: &Configuration, segment: &str) -> Option<PathToken> {
    for url_key in config.key_mapping().keys() {
        let value = segment
            .strip_prefix(url_key.as_str())
            .and_then(|rest| rest.strip_prefix(PREFIX_SEPARATOR));
        if let Some(value) = value {
            return Some(PathToken::Prefixed {
                url_key: url_key.clone(),
                value: value.to_string(),
            });
        }
    }

    let (head, value) = segment
        .split_once(PREFIX_SEPARATOR)
        .unwrap_or((segment, ""));
    config.indexed_position(head).map(|_| PathToken::Prefixed {
        url_key: head.to_string(),
        value: value.to_string(),
    })
}

/// Parse every segment as a prefixed token, failing on the first one that
/// is not recognised.
pub fn decode_prefixed(
    config: &Configuration,
    segments: &[&str],
) -> Result<Vec<PathToken>, FilterUrlError> {
    segments
        .iter()
        .map(|segment| match recognise(config, segment) {
            Some(token) => {
                trace!(segment, "recognised prefixed segment");
                Ok(token)
            }
            None => {
                warn!(segment, "unrecognized filter path segment");
                Err(FilterUrlError::UnrecognizedPrefix(segment.to_string()))
            }
        })
        .collect()
}
