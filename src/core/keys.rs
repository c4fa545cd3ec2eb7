//! Filter key ↔ URL key translation.

use crate::config::Configuration;
use crate::types::FilterMap;

/// Rename filter keys to their URL keys. Unmapped keys keep their name.
pub fn translate_to_url(config: &Configuration, filters: FilterMap) -> FilterMap {
    filters
        .into_iter()
        .map(|(key, value)| (config.url_key(&key).to_string(), value))
        .collect()
}

/// Rename URL keys to their filter keys. Unmapped keys keep their name.
pub fn translate_to_filter(config: &Configuration, params: &FilterMap) -> FilterMap {
    params
        .iter()
        .map(|(key, value)| (config.filter_key(key).to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FilterValue;

    fn config() -> Configuration {
        Configuration::builder()
            .map_key("feat", "feature")
            .map_key("some", "something")
            .build()
            .unwrap()
    }

    #[test]
    fn test_translate_to_url() {
        let mut filters = FilterMap::new();
        filters.insert("feature".to_string(), FilterValue::from(["helipad"]));
        filters.insert("page".to_string(), FilterValue::from(2));

        let url_args = translate_to_url(&config(), filters);
        assert!(url_args.contains_key("feat"));
        assert!(url_args.contains_key("page"));
        assert!(!url_args.contains_key("feature"));
    }

    #[test]
    fn test_translate_to_filter() {
        let mut params = FilterMap::new();
        params.insert("some".to_string(), FilterValue::from(["another", "other"]));
        params.insert("first_query".to_string(), FilterValue::from("a"));

        let filters = translate_to_filter(&config(), &params);
        assert_eq!(
            filters.get("something"),
            Some(&FilterValue::from(["another", "other"]))
        );
        assert_eq!(filters.get("first_query"), Some(&FilterValue::from("a")));
    }
}
