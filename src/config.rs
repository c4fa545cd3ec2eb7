//! Filter URL schema: key mapping, path slots, indexed keys, defaults.
//!
//! A [`Configuration`] is built once through [`ConfigurationBuilder`] and is
//! read-only afterwards. Share it between threads behind an `Arc`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FilterUrlError;
use crate::types::{FilterMap, FilterValue};

/// Placeholder used by a positional slot when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "_";

/// Separator between multiple values of one positional slot.
pub const DEFAULT_MULTI_VALUE_SEPARATOR: &str = "--";

/// Separator between a key and its value inside a path token.
pub const PREFIX_SEPARATOR: char = '-';

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_separator() -> String {
    DEFAULT_MULTI_VALUE_SEPARATOR.to_string()
}

/// One fixed position at the start of the filters path.
///
/// The order in which slots are declared is the order in which they appear
/// in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalSlot {
    /// URL key bound to this position.
    pub key: String,
    /// Token written when the slot is empty but a later slot is not.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Joins several values inside the slot's single token.
    #[serde(default = "default_separator", alias = "multiple_separator")]
    pub multi_value_separator: String,
    /// Optional tag written in front of every value (`{prefix}-{value}`).
    #[serde(default)]
    pub prefix: Option<String>,
}

impl PositionalSlot {
    /// Create a slot with the default placeholder and separator.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            placeholder: default_placeholder(),
            multi_value_separator: default_separator(),
            prefix: None,
        }
    }

    /// Set the placeholder token.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the multi-value separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.multi_value_separator = separator.into();
        self
    }

    /// Set the per-value prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The literal text in front of each value, e.g. `loc-`, if a non-empty
    /// prefix is configured.
    pub fn value_prefix(&self) -> Option<String> {
        self.prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| format!("{prefix}{PREFIX_SEPARATOR}"))
    }
}

/// How a field is coerced into a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListRule {
    /// Split scalar values on the delimiter (`"a,b"` becomes `["a", "b"]`).
    SplitBy(String),
    /// Wrap a scalar into a one-element list.
    ForceList,
}

/// Cross-field normalization applied last when decoding and first when
/// encoding.
pub trait ValueTransform: Send + Sync {
    fn transform(&self, filters: FilterMap) -> FilterMap;
}

impl<F> ValueTransform for F
where
    F: Fn(FilterMap) -> FilterMap + Send + Sync,
{
    fn transform(&self, filters: FilterMap) -> FilterMap {
        self(filters)
    }
}

/// Immutable filter URL schema.
#[derive(Clone)]
pub struct Configuration {
    url_to_filter: IndexMap<String, String>,
    filter_to_url: HashMap<String, String>,
    indexed_order: IndexSet<String>,
    slots: IndexMap<String, PositionalSlot>,
    defaults: FilterMap,
    list_fields: IndexMap<String, ListRule>,
    transform: Option<Arc<dyn ValueTransform>>,
}

impl Configuration {
    /// Start building a configuration.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// URL key → filter key, in declaration order.
    pub fn key_mapping(&self) -> &IndexMap<String, String> {
        &self.url_to_filter
    }

    /// Filter key for a URL key, falling back to the key itself.
    pub fn filter_key<'a>(&'a self, url_key: &'a str) -> &'a str {
        self.url_to_filter
            .get(url_key)
            .map(String::as_str)
            .unwrap_or(url_key)
    }

    /// URL key for a filter key, falling back to the key itself.
    pub fn url_key<'a>(&'a self, filter_key: &'a str) -> &'a str {
        self.filter_to_url
            .get(filter_key)
            .map(String::as_str)
            .unwrap_or(filter_key)
    }

    pub fn indexed_order(&self) -> &IndexSet<String> {
        &self.indexed_order
    }

    /// Position of a URL key within the indexed (prefix) order.
    pub fn indexed_position(&self, url_key: &str) -> Option<usize> {
        self.indexed_order.get_index_of(url_key)
    }

    /// Declared positional slots, in path order.
    pub fn slots(&self) -> impl DoubleEndedIterator<Item = &PositionalSlot> + ExactSizeIterator {
        self.slots.values()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&PositionalSlot> {
        self.slots.get_index(index).map(|(_, slot)| slot)
    }

    /// Position of the slot bound to a URL key.
    pub fn slot_index(&self, url_key: &str) -> Option<usize> {
        self.slots.get_index_of(url_key)
    }

    /// Whether a URL key is rendered into the path rather than the query.
    pub fn is_path_key(&self, url_key: &str) -> bool {
        self.slots.contains_key(url_key) || self.indexed_order.contains(url_key)
    }

    pub fn defaults(&self) -> &FilterMap {
        &self.defaults
    }

    pub fn list_fields(&self) -> &IndexMap<String, ListRule> {
        &self.list_fields
    }

    /// Run the configured value transform, if any.
    pub fn apply_transform(&self, filters: FilterMap) -> FilterMap {
        match &self.transform {
            Some(transform) => transform.transform(filters),
            None => filters,
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("url_to_filter", &self.url_to_filter)
            .field("indexed_order", &self.indexed_order)
            .field("slots", &self.slots)
            .field("defaults", &self.defaults)
            .field("list_fields", &self.list_fields)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Builder for [`Configuration`].
///
/// # Examples
///
/// ```
/// use filterurl::{Configuration, PositionalSlot, ListRule};
///
/// let config = Configuration::builder()
///     .map_key("feat", "feature")
///     .map_key("cap", "capacity")
///     .indexed(["feat", "cap", "page"])
///     .positional(PositionalSlot::new("locations").placeholder("all-locations"))
///     .default_value("page", "1")
///     .list_field("feature", ListRule::ForceList)
///     .build()?;
///
/// assert_eq!(config.url_key("feature"), "feat");
/// assert_eq!(config.filter_key("page"), "page");
/// # Ok::<(), filterurl::FilterUrlError>(())
/// ```
#[derive(Default)]
pub struct ConfigurationBuilder {
    mapping: Vec<(String, String)>,
    indexed: Vec<String>,
    slots: Vec<PositionalSlot>,
    defaults: FilterMap,
    list_fields: IndexMap<String, ListRule>,
    transform: Option<Arc<dyn ValueTransform>>,
}

impl ConfigurationBuilder {
    /// Map a URL key to a filter key. Redeclaring a URL key replaces the
    /// earlier mapping.
    pub fn map_key(mut self, url_key: impl Into<String>, filter_key: impl Into<String>) -> Self {
        self.mapping.push((url_key.into(), filter_key.into()));
        self
    }

    /// Append URL keys to the indexed (prefix) order.
    pub fn indexed<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indexed.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Append a positional slot after the ones already declared.
    pub fn positional(mut self, slot: PositionalSlot) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn default_value(mut self, filter_key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.defaults.insert(filter_key.into(), value.into());
        self
    }

    pub fn list_field(mut self, filter_key: impl Into<String>, rule: ListRule) -> Self {
        self.list_fields.insert(filter_key.into(), rule);
        self
    }

    pub fn transform(mut self, transform: impl ValueTransform + 'static) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<Configuration, FilterUrlError> {
        let mut url_to_filter = IndexMap::new();
        for (url_key, filter_key) in self.mapping {
            url_to_filter.insert(url_key, filter_key);
        }

        let mut filter_to_url: HashMap<String, String> = HashMap::new();
        for (url_key, filter_key) in &url_to_filter {
            if let Some(first) = filter_to_url.get(filter_key) {
                return Err(FilterUrlError::DuplicateFilterKey {
                    filter_key: filter_key.clone(),
                    first: first.clone(),
                    second: url_key.clone(),
                });
            }
            filter_to_url.insert(filter_key.clone(), url_key.clone());
        }

        let mut slots = IndexMap::new();
        for slot in self.slots {
            if slot.multi_value_separator.is_empty() {
                return Err(FilterUrlError::EmptySeparator(slot.key));
            }
            if slots.contains_key(&slot.key) {
                return Err(FilterUrlError::DuplicateSlot(slot.key));
            }
            slots.insert(slot.key.clone(), slot);
        }

        let indexed_order: IndexSet<String> = self.indexed.into_iter().collect();

        debug!(
            mapped_keys = url_to_filter.len(),
            positional_slots = slots.len(),
            indexed_keys = indexed_order.len(),
            defaults = self.defaults.len(),
            "filter url configuration built"
        );

        Ok(Configuration {
            url_to_filter,
            filter_to_url,
            indexed_order,
            slots,
            defaults: self.defaults,
            list_fields: self.list_fields,
            transform: self.transform,
        })
    }
}
