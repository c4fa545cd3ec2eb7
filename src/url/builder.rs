//! URL builders that turn encoded filter arguments into final URLs.
//!
//! The encoder only produces a path segment plus query arguments. Turning
//! those into a route is the host application's business, expressed through
//! the [`UrlBuilder`] trait. Two ready-made builders are provided:
//! [`BuilderRegistry`] for host-supplied closures and [`PathUrlBuilder`]
//! for the common "base path + filters + query string" layout.

use std::collections::HashMap;
use std::fmt;

use url::{Position, Url};

use crate::error::FilterUrlError;
use crate::types::{FilterMap, FilterValue, FILTERS_PARAM};

/// Base used to resolve relative routes such as `/search`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Builds a URL for a named route from its arguments.
///
/// `args` always carries the encoded path under `filters` plus every query
/// argument, keyed by URL key.
pub trait UrlBuilder: Send + Sync {
    fn build(&self, name: &str, args: &FilterMap) -> Result<String, FilterUrlError>;
}

impl<T: UrlBuilder + ?Sized> UrlBuilder for std::sync::Arc<T> {
    fn build(&self, name: &str, args: &FilterMap) -> Result<String, FilterUrlError> {
        (**self).build(name, args)
    }
}

type RouteFn = Box<dyn Fn(&FilterMap) -> String + Send + Sync>;

/// Named URL-building closures registered by the host.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use filterurl::{BuilderRegistry, FilterValue, UrlBuilder};
///
/// let registry = BuilderRegistry::new()
///     .register("my_thing_path", |args| format!("/search/{}", args["filters"]));
///
/// let args = BTreeMap::from([("filters".to_string(), FilterValue::from("page-2"))]);
/// assert_eq!(registry.build("my_thing_path", &args)?, "/search/page-2");
/// assert!(registry.build("other_path", &args).is_err());
/// # Ok::<(), filterurl::FilterUrlError>(())
/// ```
#[derive(Default)]
pub struct BuilderRegistry {
    routes: HashMap<String, RouteFn>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder under `name`, replacing any previous one.
    pub fn register<F>(mut self, name: impl Into<String>, route: F) -> Self
    where
        F: Fn(&FilterMap) -> String + Send + Sync + 'static,
    {
        self.routes.insert(name.into(), Box::new(route));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl UrlBuilder for BuilderRegistry {
    fn build(&self, name: &str, args: &FilterMap) -> Result<String, FilterUrlError> {
        let route = self
            .routes
            .get(name)
            .ok_or_else(|| FilterUrlError::UnknownRoute(name.to_string()))?;
        Ok(route(args))
    }
}

impl fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.routes.keys().collect();
        names.sort();
        f.debug_struct("BuilderRegistry").field("routes", &names).finish()
    }
}

/// Renders `{base}/{filters}?{query}` for named routes.
///
/// The base may be a path (`/search`) or an absolute URL
/// (`https://example.com/search`); the output keeps the same form. Query
/// arguments are form-encoded in key order and lists are written as
/// repeated `key[]=value` pairs.
#[derive(Debug, Clone, Default)]
pub struct PathUrlBuilder {
    routes: HashMap<String, String>,
}

impl PathUrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a route name to a base path or URL.
    pub fn route(mut self, name: impl Into<String>, base: impl Into<String>) -> Self {
        self.routes.insert(name.into(), base.into());
        self
    }

    /// Render the arguments against a base path or URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use filterurl::{FilterValue, PathUrlBuilder};
    ///
    /// let args = BTreeMap::from([
    ///     ("filters".to_string(), FilterValue::from("feat-helipad/page-2")),
    ///     ("some".to_string(), FilterValue::from(["another", "other"])),
    /// ]);
    ///
    /// let url = PathUrlBuilder::render("/search", &args)?;
    /// assert_eq!(url, "/search/feat-helipad/page-2?some%5B%5D=another&some%5B%5D=other");
    /// # Ok::<(), filterurl::FilterUrlError>(())
    /// ```
    pub fn render(base: &str, args: &FilterMap) -> Result<String, FilterUrlError> {
        let (mut url, relative) = match Url::parse(base) {
            Ok(url) => (url, false),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                (Url::parse(RELATIVE_BASE)?.join(base)?, true)
            }
            Err(err) => return Err(err.into()),
        };

        let filters = args
            .get(FILTERS_PARAM)
            .map(|value| value.as_slice().join("/"))
            .unwrap_or_default();
        let base_path = url.path().trim_end_matches('/').to_string();
        let path = match (base_path.is_empty(), filters.is_empty()) {
            (true, true) => "/".to_string(),
            (false, true) => base_path,
            (_, false) => format!("{base_path}/{filters}"),
        };
        url.set_path(&path);

        let mut query_args = args.iter().filter(|(key, _)| key.as_str() != FILTERS_PARAM).peekable();
        if query_args.peek().is_none() {
            url.set_query(None);
        } else {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in query_args {
                match value {
                    FilterValue::Scalar(value) => {
                        pairs.append_pair(key, value);
                    }
                    FilterValue::List(values) => {
                        let list_key = format!("{key}[]");
                        for value in values {
                            pairs.append_pair(&list_key, value);
                        }
                    }
                }
            }
        }

        if relative {
            Ok(url[Position::BeforePath..].to_string())
        } else {
            Ok(url.to_string())
        }
    }
}

impl UrlBuilder for PathUrlBuilder {
    fn build(&self, name: &str, args: &FilterMap) -> Result<String, FilterUrlError> {
        let base = self
            .routes
            .get(name)
            .ok_or_else(|| FilterUrlError::UnknownRoute(name.to_string()))?;
        Self::render(base, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(filters: &str, query: &[(&str, FilterValue)]) -> FilterMap {
        let mut args: FilterMap = query
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        args.insert(FILTERS_PARAM.to_string(), FilterValue::from(filters));
        args
    }

    #[test]
    fn test_render_relative_path() {
        let url = PathUrlBuilder::render("/search", &args("feat-helipad/cap-25+", &[])).unwrap();
        assert_eq!(url, "/search/feat-helipad/cap-25+");
    }

    #[test]
    fn test_render_without_filters() {
        let url = PathUrlBuilder::render("/search", &args("", &[])).unwrap();
        assert_eq!(url, "/search");

        let url = PathUrlBuilder::render("/", &args("", &[])).unwrap();
        assert_eq!(url, "/");

        let url = PathUrlBuilder::render("/search/", &args("page-2", &[])).unwrap();
        assert_eq!(url, "/search/page-2");
    }

    #[test]
    fn test_render_query_string() {
        let url = PathUrlBuilder::render(
            "/search",
            &args(
                "",
                &[
                    ("first_query", FilterValue::from(["a", "b"])),
                    ("second_query", FilterValue::from("c d")),
                ],
            ),
        )
        .unwrap();
        assert_eq!(
            url,
            "/search?first_query%5B%5D=a&first_query%5B%5D=b&second_query=c+d"
        );
    }

    #[test]
    fn test_render_absolute_base() {
        let url = PathUrlBuilder::render(
            "https://example.com/search",
            &args("page-2", &[("q", FilterValue::from("x"))]),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/search/page-2?q=x");
    }

    #[test]
    fn test_invalid_absolute_base() {
        let result = PathUrlBuilder::render("https://", &args("page-2", &[]));
        assert!(matches!(result, Err(FilterUrlError::UrlParse(_))));
    }

    #[test]
    fn test_unknown_route() {
        let builder = PathUrlBuilder::new().route("search_path", "/search");
        let result = builder.build("missing_path", &args("", &[]));
        assert_eq!(
            result.unwrap_err(),
            FilterUrlError::UnknownRoute("missing_path".to_string())
        );
        assert_eq!(builder.build("search_path", &args("", &[])).unwrap(), "/search");
    }

    #[test]
    fn test_registry_dispatch() {
        let registry = BuilderRegistry::new()
            .register("a_path", |_| "/a".to_string())
            .register("b_path", |args| format!("/b/{}", args[FILTERS_PARAM]));

        assert!(registry.contains("a_path"));
        assert_eq!(registry.build("a_path", &args("x", &[])).unwrap(), "/a");
        assert_eq!(registry.build("b_path", &args("x", &[])).unwrap(), "/b/x");
        assert!(format!("{registry:?}").contains("a_path"));
    }
}
