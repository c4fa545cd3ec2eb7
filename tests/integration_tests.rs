//! Integration tests for the prefixed (indexed) scheme, key translation,
//! default elision and value transforms.

use filterurl::*;

fn map(entries: &[(&str, FilterValue)]) -> FilterMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn config() -> Configuration {
    Configuration::builder()
        // URL => FILTER
        .map_key("feat", "feature")
        .map_key("cap", "capacity")
        .map_key("some", "something")
        .map_key("ndef", "non_default")
        .map_key("page", "page")
        .indexed(["feat", "cap", "ndef", "page"])
        .default_value("non_default", 99)
        .default_value("with_default_value", 2)
        .default_value("with_default_list", [1, 2])
        .build()
        .unwrap()
}

fn manager() -> UrlParamsManager<PathUrlBuilder> {
    UrlParamsManager::new(config(), PathUrlBuilder::new().route("my_thing_path", "/search"))
}

#[test]
fn test_indexed_path_is_sorted() {
    let filters = map(&[
        ("capacity", FilterValue::from(["25+"])),
        ("feature", FilterValue::from(["swimming-pool", "helipad"])),
        ("page", FilterValue::from(2)),
    ]);

    let encoded = encode_filters(&config(), &filters);
    assert_eq!(encoded.path_segment, "feat-helipad/feat-swimming-pool/cap-25+/page-2");
}

#[test]
fn test_url_from_filters() {
    let filters = map(&[
        ("capacity", FilterValue::from(["25+"])),
        ("page", FilterValue::from(2)),
        ("feature", FilterValue::from(["swimming-pool", "helipad"])),
        ("something", FilterValue::from(["another", "other"])),
        ("with_default_value", FilterValue::from(2)),
        ("with_default_list", FilterValue::from([2, 1])),
        ("non_default", FilterValue::from(1)),
    ]);

    let path = manager().build_url("my_thing_path", &filters).unwrap();
    assert_eq!(
        path,
        "/search/feat-helipad/feat-swimming-pool/cap-25+/ndef-1/page-2?some%5B%5D=another&some%5B%5D=other"
    );
}

#[test]
fn test_filters_from_url() {
    let url_params = map(&[
        ("filters", FilterValue::from("feat-helipad/feat-swimming-pool/cap-25+/page-2")),
        ("some", FilterValue::from(["another", "other"])),
    ]);

    let mut expected = config().defaults().clone();
    expected.extend(map(&[
        ("feature", FilterValue::from(["helipad", "swimming-pool"])),
        ("capacity", FilterValue::from("25+")),
        ("something", FilterValue::from(["another", "other"])),
        ("page", FilterValue::from("2")),
    ]));

    let filters = manager().decode_url_params(url_params).unwrap();
    assert_eq!(filters, expected);
}

#[test]
fn test_unrecognized_indexed_param() {
    let url_params = map(&[
        (
            "filters",
            FilterValue::from("feat-helipad/feat-swimming-pool/cap-25+/whoareyou-value/page-2"),
        ),
        ("some", FilterValue::from(["another", "other"])),
    ]);

    let error = manager().decode_url_params(url_params).unwrap_err();
    assert_eq!(error, FilterUrlError::UnrecognizedPrefix("whoareyou-value".to_string()));
    assert_eq!(error.to_string(), "unrecognized prefix in url part: whoareyou-value");
}

#[test]
fn test_short_unrecognized_path() {
    let url_params = map(&[("filters", FilterValue::from("feat-helipad/whoareyou-value"))]);

    let result = decode_url_params(&config(), url_params);
    assert!(matches!(result, Err(FilterUrlError::UnrecognizedPrefix(token)) if token == "whoareyou-value"));
}

#[test]
fn test_defaults_are_elided() {
    let filters = map(&[
        ("non_default", FilterValue::from(99)),
        ("with_default_value", FilterValue::from("2")),
        ("with_default_list", FilterValue::from(["2", "1"])),
    ]);

    let encoded = encode_filters(&config(), &filters);
    assert_eq!(encoded, EncodedFilters::default());

    // Encoding twice gives the same result
    assert_eq!(encode_filters(&config(), &filters), encoded);
}

mod treatment {
    use super::*;

    fn treated_config() -> Configuration {
        Configuration::builder()
            .map_key("feat", "feature")
            .map_key("cap", "capacity")
            .map_key("some", "something")
            .indexed(["feat", "cap", "page"])
            .transform(|mut filters: FilterMap| {
                let many = filters
                    .get("stuff_to_treat")
                    .is_some_and(|value| value.as_slice().len() > 1);
                if many {
                    filters.insert("stuff_to_treat".to_string(), FilterValue::from("treated!"));
                }
                filters
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_treatment_applied() {
        let url_params = map(&[
            ("filters", FilterValue::from("feat-helipad/feat-swimming-pool/cap-25+/page-2")),
            ("some", FilterValue::from(["another", "other"])),
            ("stuff_to_treat", FilterValue::from(["open", "closed"])),
        ]);

        let filters = decode_url_params(&treated_config(), url_params).unwrap();
        assert_eq!(
            filters,
            map(&[
                ("feature", FilterValue::from(["helipad", "swimming-pool"])),
                ("capacity", FilterValue::from("25+")),
                ("something", FilterValue::from(["another", "other"])),
                ("stuff_to_treat", FilterValue::from("treated!")),
                ("page", FilterValue::from("2")),
            ])
        );
    }

    #[test]
    fn test_treatment_not_applied() {
        let url_params = map(&[
            ("filters", FilterValue::from("feat-helipad/feat-swimming-pool/cap-25+/page-2")),
            ("some", FilterValue::from(["another", "other"])),
            ("stuff_to_treat", FilterValue::from("open")),
        ]);

        let filters = decode_url_params(&treated_config(), url_params).unwrap();
        assert_eq!(filters["stuff_to_treat"], FilterValue::from("open"));
    }

    #[test]
    fn test_treatment_runs_on_encode() {
        let filters = map(&[("stuff_to_treat", FilterValue::from(["open", "closed"]))]);

        let encoded = encode_filters(&treated_config(), &filters);
        assert_eq!(
            encoded.query_args.get("stuff_to_treat"),
            Some(&FilterValue::from("treated!"))
        );
    }
}

#[test]
fn test_list_fields_round_trip() {
    let config = Configuration::builder()
        .map_key("feat", "feature")
        .indexed(["feat"])
        .list_field("feature", ListRule::ForceList)
        .list_field("tags", ListRule::SplitBy(",".to_string()))
        .build()
        .unwrap();

    let filters = map(&[
        ("feature", FilterValue::from("helipad")),
        ("tags", FilterValue::from("b,a")),
    ]);

    let encoded = encode_filters(&config, &filters);
    assert_eq!(encoded.path_segment, "feat-helipad");
    assert_eq!(encoded.query_args["tags"], FilterValue::from(["b", "a"]));

    let decoded = decode_url_params(&config, encoded.into_url_args()).unwrap();
    assert_eq!(decoded["feature"], FilterValue::from(["helipad"]));
    assert_eq!(decoded["tags"], FilterValue::from(["b", "a"]));
}

#[test]
fn test_configuration_is_shared_across_threads() {
    let manager = std::sync::Arc::new(manager());

    let handles: Vec<_> = (0..4)
        .map(|page| {
            let manager = std::sync::Arc::clone(&manager);
            std::thread::spawn(move || {
                let filters = map(&[("page", FilterValue::from(page + 2))]);
                manager.build_url("my_thing_path", &filters).unwrap()
            })
        })
        .collect();

    let urls: Vec<String> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert_eq!(urls, vec!["/search/page-2", "/search/page-3", "/search/page-4", "/search/page-5"]);
}
