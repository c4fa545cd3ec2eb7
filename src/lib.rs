//! filterurl - canonical, reversible filter URLs
//!
//! This crate converts the filter state of a search or listing page into a
//! human-readable URL path plus query arguments, and parses such URLs back
//! into the same filter state.
//!
//! # Features
//!
//! - **Canonical**: equal filter sets always render to the same URL, whatever
//!   the order of their list values
//! - **Reversible**: decoding an encoded URL yields the original filters,
//!   with defaults filled back in
//! - **Two path schemes**: fixed-position slots with placeholders, and
//!   order-independent `key-value` segments
//! - **Key translation**: short URL keys (`feat`) for long filter keys
//!   (`feature`)
//! - **Default elision**: values equal to their default never reach the URL
//!
//! # Quick Start
//!
//! ```
//! use std::collections::BTreeMap;
//! use filterurl::{Configuration, FilterValue, PathUrlBuilder, UrlParamsManager, parse_query_args};
//!
//! let config = Configuration::builder()
//!     .map_key("feat", "feature")
//!     .map_key("cap", "capacity")
//!     .map_key("some", "something")
//!     .indexed(["feat", "cap", "page"])
//!     .default_value("page", 1)
//!     .build()?;
//! let manager = UrlParamsManager::new(config, PathUrlBuilder::new().route("search_path", "/search"));
//!
//! // Filters -> URL
//! let filters = BTreeMap::from([
//!     ("feature".to_string(), FilterValue::from(["swimming-pool", "helipad"])),
//!     ("capacity".to_string(), FilterValue::from("25+")),
//!     ("something".to_string(), FilterValue::from("else")),
//!     ("page".to_string(), FilterValue::from(1)),
//! ]);
//! let url = manager.build_url("search_path", &filters)?;
//! assert_eq!(url, "/search/feat-helipad/feat-swimming-pool/cap-25+?some=else");
//!
//! // URL -> filters
//! let mut raw = parse_query_args("some=else");
//! raw.insert("filters".to_string(), FilterValue::from("feat-helipad/feat-swimming-pool/cap-25+"));
//! let decoded = manager.decode_url_params(raw)?;
//! assert_eq!(decoded["feature"], FilterValue::from(["helipad", "swimming-pool"]));
//! assert_eq!(decoded["page"], FilterValue::from(1));
//! # Ok::<(), filterurl::FilterUrlError>(())
//! ```
//!
//! # Path Format
//!
//! A filters path is a `/`-joined sequence of segments:
//!
//! | Part       | Example                 | Description |
//! |------------|-------------------------|-------------|
//! | positional | `all-locations`         | Placeholder for an empty slot |
//! | positional | `my-cat_AND_second-cat` | Slot values joined by the slot separator |
//! | prefixed   | `feat-helipad`          | One `key-value` segment per value |
//!
//! Positional segments always come first, in slot order. Prefixed segments
//! follow in indexed-key order, values sorted ascending.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, FilterUrlError>`. Common error
//! cases:
//!
//! - A path segment that is neither positional nor a known `key-value` token
//! - A key mapping that cannot be inverted
//! - A route name no URL builder knows about

// Re-export main encoding and decoding functions
pub use crate::core::{decode_url_params, encode_filters, parse_path, PathToken};

// Re-export configuration
pub use crate::config::{Configuration, ConfigurationBuilder, ListRule, PositionalSlot, ValueTransform};

// Re-export URL collaborators
pub use crate::url::{parse_query_args, BuilderRegistry, PathUrlBuilder, UrlBuilder};

// Re-export public types
pub use crate::error::FilterUrlError;
pub use crate::manager::UrlParamsManager;
pub use crate::types::{EncodedFilters, FilterMap, FilterValue, RawParams, FILTERS_PARAM};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod manager;
pub mod types;
pub mod url;
