//! Filter map → URL path and query arguments.

use tracing::debug;

use crate::config::Configuration;
use crate::core::keys::translate_to_url;
use crate::core::normalizer::{coerce_lists, remove_defaults};
use crate::core::positional::encode_slots;
use crate::core::prefix::encode_prefixed;
use crate::core::token::{render_path, sort_tokens};
use crate::types::{EncodedFilters, FilterMap};

/// Encode a filter map into its canonical path segment and the arguments
/// left for the query string.
///
/// The caller's map is never modified. For a fixed configuration the output
/// only depends on the map's content: list order does not matter.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use filterurl::{encode_filters, Configuration, FilterValue};
///
/// let config = Configuration::builder()
///     .map_key("feat", "feature")
///     .map_key("cap", "capacity")
///     .indexed(["feat", "cap", "ndef", "page"])
///     .build()?;
///
/// let filters = BTreeMap::from([
///     ("capacity".to_string(), FilterValue::from(["25+"])),
///     ("feature".to_string(), FilterValue::from(["swimming-pool", "helipad"])),
///     ("page".to_string(), FilterValue::from(2)),
/// ]);
///
/// let encoded = encode_filters(&config, &filters);
/// assert_eq!(encoded.path_segment, "feat-helipad/feat-swimming-pool/cap-25+/page-2");
/// assert!(encoded.query_args.is_empty());
/// # Ok::<(), filterurl::FilterUrlError>(())
/// ```
pub fn encode_filters(config: &Configuration, filters: &FilterMap) -> EncodedFilters {
    // Step 1: Normalize a private copy
    let mut prepared = config.apply_transform(filters.clone());
    coerce_lists(config, &mut prepared);

    // Step 2: Drop defaults and switch to URL keys
    remove_defaults(config, &mut prepared);
    let url_args = translate_to_url(config, prepared);

    // Step 3: Split path from query
    let (mut path_args, query_args) = partition(config, url_args);

    // Step 4: Build, order and render the path tokens
    let mut tokens = encode_slots(config, &mut path_args);
    tokens.extend(encode_prefixed(path_args));
    sort_tokens(config, &mut tokens);
    let path_segment = render_path(config, &tokens);

    debug!(
        path = %path_segment,
        tokens = tokens.len(),
        query_args = query_args.len(),
        "encoded filters"
    );

    EncodedFilters {
        path_segment,
        query_args,
    }
}

/// Split URL-keyed arguments into path entries (sorted, blanks dropped) and
/// query entries (untouched).
fn partition(config: &Configuration, url_args: FilterMap) -> (FilterMap, FilterMap) {
    let mut path_args = FilterMap::new();
    let mut query_args = FilterMap::new();

    for (key, value) in url_args {
        if !config.is_path_key(&key) {
            query_args.insert(key, value);
        } else if !value.is_blank() {
            path_args.insert(key, value.sorted());
        }
    }

    (path_args, query_args)
}
