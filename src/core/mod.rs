//! Core filter URL encoding and decoding.
//!
//! This module contains the codec itself:
//! - Encoding filter maps into a canonical path and query arguments
//! - Decoding paths and query arguments back into filter maps
//! - The positional and prefixed path schemes
//! - Key translation, list coercion and default elision

pub mod decoder;
pub mod encoder;
pub mod keys;
pub mod normalizer;
pub mod positional;
pub mod prefix;
pub mod token;

// Re-export main functionality
pub use decoder::{decode_url_params, parse_path};
pub use encoder::encode_filters;
pub use keys::{translate_to_filter, translate_to_url};
pub use normalizer::{coerce_lists, remove_defaults};
pub use token::PathToken;
