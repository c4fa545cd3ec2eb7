//! URL path and query arguments → filter map.

use std::collections::btree_map::Entry;

use tracing::debug;

use crate::config::Configuration;
use crate::core::keys::translate_to_filter;
use crate::core::normalizer::coerce_lists;
use crate::core::positional::decode_slots;
use crate::core::prefix::decode_prefixed;
use crate::core::token::{split_path, PathToken};
use crate::error::FilterUrlError;
use crate::types::{FilterMap, FilterValue, RawParams, FILTERS_PARAM};

/// Decode raw URL parameters into a filter map.
///
/// `raw` may hold a `filters` entry with the path segment; every other entry
/// is treated as a query argument. Decoding starts from the configured
/// defaults, which path and query data override.
///
/// # Errors
///
/// Returns [`FilterUrlError::UnrecognizedPrefix`] when a path segment is
/// neither positional nor a known `key-value` token. Nothing is returned
/// in that case.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use filterurl::{decode_url_params, Configuration, FilterValue};
///
/// let config = Configuration::builder()
///     .map_key("feat", "feature")
///     .indexed(["feat", "page"])
///     .build()?;
///
/// let raw = BTreeMap::from([
///     ("filters".to_string(), FilterValue::from("feat-helipad/feat-spa/page-2")),
/// ]);
///
/// let filters = decode_url_params(&config, raw)?;
/// assert_eq!(filters["feature"], FilterValue::from(["helipad", "spa"]));
/// assert_eq!(filters["page"], FilterValue::from("2"));
/// # Ok::<(), filterurl::FilterUrlError>(())
/// ```
pub fn decode_url_params(
    config: &Configuration,
    mut raw: RawParams,
) -> Result<FilterMap, FilterUrlError> {
    let mut filters = config.defaults().clone();

    // Step 1: Parse the path into tokens
    let path = raw
        .remove(FILTERS_PARAM)
        .map(|value| value.as_slice().join("/"))
        .unwrap_or_default();
    let tokens = parse_path(config, &path)?;
    let token_count = tokens.len();

    // Step 2: Path data, then query data, over the defaults
    filters.extend(fold_tokens(config, tokens));
    filters.extend(translate_to_filter(config, &raw));

    // Step 3: Normalize
    coerce_lists(config, &mut filters);
    let filters = config.apply_transform(filters);

    debug!(
        path = %path,
        tokens = token_count,
        query_args = raw.len(),
        "decoded filters"
    );

    Ok(filters)
}

/// Parse a filters path into tokens: positional segments first, then
/// prefixed ones.
pub fn parse_path(config: &Configuration, path: &str) -> Result<Vec<PathToken>, FilterUrlError> {
    let segments = split_path(path);
    let (mut tokens, used) = decode_slots(config, &segments);
    tokens.extend(decode_prefixed(config, &segments[used..])?);
    Ok(tokens)
}

/// Collapse tokens into filter-keyed values. Repeated prefixed keys become
/// lists in the order they were encountered.
fn fold_tokens(config: &Configuration, tokens: Vec<PathToken>) -> FilterMap {
    let mut filters = FilterMap::new();

    for token in tokens {
        match token {
            PathToken::Positional { slot_index, values } => {
                if let Some(slot) = config.slot(slot_index) {
                    filters.insert(
                        config.filter_key(&slot.key).to_string(),
                        FilterValue::from_parts(values),
                    );
                }
            }
            PathToken::Placeholder { .. } => {}
            PathToken::Prefixed { url_key, value } => {
                let key = config.filter_key(&url_key).to_string();
                match filters.entry(key) {
                    Entry::Occupied(mut entry) => entry.get_mut().push(value),
                    Entry::Vacant(entry) => {
                        entry.insert(FilterValue::Scalar(value));
                    }
                }
            }
        }
    }

    filters
}
