//! URL-facing collaborators of the codec.
//!
//! This module contains the pieces that touch real URLs:
//! - Builders that turn encoded filters into route URLs
//! - Query string parsing into raw parameters

pub mod builder;
pub mod query;

// Re-export main functionality
pub use builder::{BuilderRegistry, PathUrlBuilder, UrlBuilder};
pub use query::parse_query_args;
