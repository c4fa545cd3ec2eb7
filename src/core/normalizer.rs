//! List coercion and default elision.
//!
//! Both operate in place on a call-local [`FilterMap`]; configured values
//! are only ever cloned out of the [`Configuration`].

use crate::config::{Configuration, ListRule};
use crate::types::{FilterMap, FilterValue};

/// Coerce the configured list fields into list form.
///
/// `SplitBy` splits every scalar on the delimiter and drops empty pieces;
/// `ForceList` wraps a scalar into a one-element list. Fields that are not
/// present are left absent.
pub fn coerce_lists(config: &Configuration, filters: &mut FilterMap) {
    for (field, rule) in config.list_fields() {
        let Some(value) = filters.get_mut(field) else {
            continue;
        };

        *value = match rule {
            ListRule::SplitBy(delimiter) => FilterValue::List(
                value
                    .as_slice()
                    .iter()
                    .flat_map(|item| item.split(delimiter.as_str()))
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            ListRule::ForceList => FilterValue::List(std::mem::replace(
                value,
                FilterValue::List(Vec::new()),
            )
            .into_vec()),
        };
    }
}

/// Remove every entry equal to its configured default.
///
/// Lists are compared as unordered multisets and a scalar matches a
/// one-element list. Blank values are never elided.
pub fn remove_defaults(config: &Configuration, filters: &mut FilterMap) {
    for (key, default) in config.defaults() {
        let matches_default = filters
            .get(key)
            .is_some_and(|value| !value.is_blank() && value.same_members(default));

        if matches_default {
            filters.remove(key);
        }
    }
}
