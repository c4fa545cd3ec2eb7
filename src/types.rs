//! Core data structures shared by the encoder and decoder.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Name of the URL argument that carries the encoded path segment.
pub const FILTERS_PARAM: &str = "filters";

/// Filter state keyed by filter key (or URL key, depending on the stage).
///
/// A `BTreeMap` keeps iteration deterministic, so nothing downstream depends
/// on the order the caller inserted entries in.
pub type FilterMap = BTreeMap<String, FilterValue>;

/// Raw URL parameters as handed over by the routing layer: an optional
/// `filters` entry holding the path segment plus any query arguments.
pub type RawParams = BTreeMap<String, FilterValue>;

/// A single filter value: either a scalar or a list of scalars.
///
/// Scalars are kept in their rendered string form. Lists are compared as
/// unordered multisets when eliding defaults and are sorted before they are
/// rendered into a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A single value, e.g. `page = "2"`.
    Scalar(String),
    /// Several values for the same key, e.g. `feature = ["helipad", "spa"]`.
    List(Vec<String>),
}

impl FilterValue {
    /// Build a value from split parts: one part stays a scalar, anything else
    /// becomes a list.
    pub fn from_parts(mut parts: Vec<String>) -> Self {
        if parts.len() == 1 {
            FilterValue::Scalar(parts.remove(0))
        } else {
            FilterValue::List(parts)
        }
    }

    /// View the value as a slice of scalars. A scalar is a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            FilterValue::Scalar(value) => std::slice::from_ref(value),
            FilterValue::List(values) => values,
        }
    }

    /// Consume the value into its scalars.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FilterValue::Scalar(value) => vec![value],
            FilterValue::List(values) => values,
        }
    }

    /// The scalar string, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FilterValue::Scalar(value) => Some(value),
            FilterValue::List(_) => None,
        }
    }

    /// Check if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, FilterValue::List(_))
    }

    /// A blank value carries no information: an empty or whitespace-only
    /// scalar, or an empty list.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Scalar(value) => value.trim().is_empty(),
            FilterValue::List(values) => values.is_empty(),
        }
    }

    /// Compare two values as unordered multisets of scalars.
    ///
    /// A scalar compares equal to a one-element list holding the same value.
    pub fn same_members(&self, other: &FilterValue) -> bool {
        if self == other {
            return true;
        }
        let mut left: Vec<&String> = self.as_slice().iter().collect();
        let mut right: Vec<&String> = other.as_slice().iter().collect();
        left.sort();
        right.sort();
        left == right
    }

    /// Return the value with list members sorted ascending.
    pub fn sorted(self) -> Self {
        match self {
            FilterValue::List(mut values) => {
                values.sort();
                FilterValue::List(values)
            }
            scalar => scalar,
        }
    }

    /// Append a value, promoting a scalar to a list.
    pub fn push(&mut self, value: String) {
        match self {
            FilterValue::List(values) => values.push(value),
            FilterValue::Scalar(existing) => {
                let first = std::mem::take(existing);
                *self = FilterValue::List(vec![first, value]);
            }
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Scalar(value) => f.write_str(value),
            FilterValue::List(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Scalar(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Scalar(value)
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    FilterValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i32, i64, u32, u64, usize, bool);

impl<T: ToString> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for FilterValue {
    fn from(values: [T; N]) -> Self {
        FilterValue::List(values.iter().map(ToString::to_string).collect())
    }
}

/// Scalars as they may arrive from JSON or TOML.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarRepr {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ScalarRepr {
    fn into_string(self) -> String {
        match self {
            ScalarRepr::Str(value) => value,
            ScalarRepr::Int(value) => value.to_string(),
            ScalarRepr::Float(value) => value.to_string(),
            ScalarRepr::Bool(value) => value.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    List(Vec<ScalarRepr>),
    Scalar(ScalarRepr),
}

impl<'de> Deserialize<'de> for FilterValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ValueRepr::deserialize(deserializer)? {
            ValueRepr::Scalar(scalar) => FilterValue::Scalar(scalar.into_string()),
            ValueRepr::List(items) => {
                FilterValue::List(items.into_iter().map(ScalarRepr::into_string).collect())
            }
        })
    }
}

/// Result of encoding a filter map: the path segment plus the arguments that
/// stay in the query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncodedFilters {
    /// Slash-joined path tokens, e.g. `feat-helipad/page-2`.
    pub path_segment: String,
    /// Arguments that are not part of the path, keyed by URL key.
    pub query_args: FilterMap,
}

impl EncodedFilters {
    /// Merge the path segment into the query arguments under
    /// [`FILTERS_PARAM`], producing the argument map a URL builder expects.
    pub fn into_url_args(self) -> FilterMap {
        let mut args = self.query_args;
        args.insert(
            FILTERS_PARAM.to_string(),
            FilterValue::Scalar(self.path_segment),
        );
        args
    }
}
