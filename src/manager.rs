//! High-level entry point tying a configuration to a URL builder.

use std::sync::Arc;

use tracing::debug;

use crate::config::Configuration;
use crate::core::{decode_url_params, encode_filters, translate_to_filter};
use crate::error::FilterUrlError;
use crate::types::{EncodedFilters, FilterMap, RawParams};
use crate::url::UrlBuilder;

/// Encodes filters into URLs for named routes and decodes incoming URL
/// parameters back into filters.
///
/// The configuration is held behind an `Arc`, so a manager can be cloned
/// cheaply and shared between threads when its builder allows it.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use filterurl::{Configuration, FilterValue, PathUrlBuilder, UrlParamsManager};
///
/// let config = Configuration::builder()
///     .map_key("feat", "feature")
///     .indexed(["feat", "page"])
///     .build()?;
/// let manager = UrlParamsManager::new(config, PathUrlBuilder::new().route("search_path", "/search"));
///
/// let filters = BTreeMap::from([
///     ("feature".to_string(), FilterValue::from(["spa", "helipad"])),
///     ("page".to_string(), FilterValue::from(2)),
/// ]);
/// let url = manager.build_url("search_path", &filters)?;
/// assert_eq!(url, "/search/feat-helipad/feat-spa/page-2");
/// # Ok::<(), filterurl::FilterUrlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UrlParamsManager<B> {
    config: Arc<Configuration>,
    builder: B,
}

impl<B: UrlBuilder> UrlParamsManager<B> {
    pub fn new(config: Configuration, builder: B) -> Self {
        Self::with_shared_config(Arc::new(config), builder)
    }

    /// Create a manager around a configuration shared with other managers.
    pub fn with_shared_config(config: Arc<Configuration>, builder: B) -> Self {
        Self { config, builder }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Encode filters without building a URL.
    pub fn encode_filters(&self, filters: &FilterMap) -> EncodedFilters {
        encode_filters(&self.config, filters)
    }

    /// Encode filters and hand them to the URL builder under `name`.
    pub fn build_url(&self, name: &str, filters: &FilterMap) -> Result<String, FilterUrlError> {
        let args = self.encode_filters(filters).into_url_args();
        let url = self.builder.build(name, &args)?;
        debug!(route = name, url = %url, "built filter url");
        Ok(url)
    }

    /// Decode URL parameters into filters.
    pub fn decode_url_params(&self, raw: RawParams) -> Result<FilterMap, FilterUrlError> {
        decode_url_params(&self.config, raw)
    }

    /// Translate query arguments from URL keys to filter keys, leaving the
    /// values untouched.
    pub fn query_to_filters(&self, params: &RawParams) -> FilterMap {
        translate_to_filter(&self.config, params)
    }
}
