//! Query string parsing into raw URL parameters.

use std::collections::btree_map::Entry;

use url::form_urlencoded;

use crate::types::{FilterValue, RawParams};

/// Parse a query string into raw parameters.
///
/// Accepts the string with or without its leading `?`. `key[]` pairs are
/// collected into a list under `key`, and a plain key that repeats is
/// promoted to a list. This is the inverse of the query rendering done by
/// [`PathUrlBuilder`](crate::url::PathUrlBuilder).
///
/// # Examples
///
/// ```
/// use filterurl::{parse_query_args, FilterValue};
///
/// let params = parse_query_args("?some%5B%5D=another&some%5B%5D=other&page=2");
/// assert_eq!(params["some"], FilterValue::from(["another", "other"]));
/// assert_eq!(params["page"], FilterValue::from("2"));
/// ```
pub fn parse_query_args(query: &str) -> RawParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = RawParams::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let (key, is_list) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key.into_owned(), false),
        };
        let value = value.into_owned();

        match params.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(if is_list {
                    FilterValue::List(vec![value])
                } else {
                    FilterValue::Scalar(value)
                });
            }
        }
    }

    params
}
