use std::collections::BTreeMap;

use filterurl::{
    parse_query_args, Configuration, FilterMap, FilterUrlError, FilterValue, PathUrlBuilder,
    PositionalSlot, UrlParamsManager, FILTERS_PARAM,
};

fn filters(entries: &[(&str, FilterValue)]) -> FilterMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn main() -> Result<(), FilterUrlError> {
    println!("Filter URL Walkthrough");
    println!("======================");

    let routes = PathUrlBuilder::new().route("search_path", "/search");

    // Indexed (prefixed) scheme
    println!("\n1. Prefixed segments:");
    let indexed = UrlParamsManager::new(
        Configuration::builder()
            .map_key("feat", "feature")
            .map_key("cap", "capacity")
            .map_key("some", "something")
            .map_key("ndef", "non_default")
            .indexed(["feat", "cap", "ndef", "page"])
            .default_value("non_default", 99)
            .build()?,
        routes.clone(),
    );

    let input = filters(&[
        ("capacity", FilterValue::from(["25+"])),
        ("feature", FilterValue::from(["swimming-pool", "helipad"])),
        ("something", FilterValue::from(["another", "other"])),
        ("non_default", FilterValue::from(99)),
        ("page", FilterValue::from(2)),
    ]);
    let url = indexed.build_url("search_path", &input)?;
    println!("  {:?}", input);
    println!("    → {}", url);

    let rest = url.trim_start_matches("/search/");
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let mut raw = parse_query_args(query);
    raw.insert(FILTERS_PARAM.to_string(), FilterValue::from(path));
    println!("    ← {:?}", indexed.decode_url_params(raw)?);

    // Unrecognized segment
    println!("\n2. Unrecognized segment:");
    let raw = BTreeMap::from([(
        FILTERS_PARAM.to_string(),
        FilterValue::from("feat-helipad/whoareyou-value"),
    )]);
    match indexed.decode_url_params(raw) {
        Ok(decoded) => println!("  ✗ Unexpectedly decoded: {:?}", decoded),
        Err(e) => println!("  ✓ Rejected: {}", e),
    }

    // Positional slots with placeholders
    println!("\n3. Positional slots:");
    let positional = UrlParamsManager::new(
        Configuration::builder()
            .map_key("by_prefix", "by_prefix_filter")
            .indexed(["by_prefix", "page"])
            .positional(PositionalSlot::new("locations").placeholder("all-locations"))
            .positional(
                PositionalSlot::new("categories")
                    .placeholder("all-categories")
                    .separator("_AND_"),
            )
            .positional(PositionalSlot::new("themes").placeholder("all-themes"))
            .positional(PositionalSlot::new("offers").placeholder("all-offers"))
            .build()?,
        routes,
    );

    let paths = [
        "all-locations/my-cat_AND_second-cat/all-themes",
        "all-locations/my-cat_AND_second-cat/all-themes/my-offer/by_prefix-hey/by_prefix-you/page-2",
        "madrid",
    ];
    for path in paths {
        let raw = BTreeMap::from([(FILTERS_PARAM.to_string(), FilterValue::from(path))]);
        let decoded = positional.decode_url_params(raw)?;
        let rebuilt = positional.encode_filters(&decoded);
        println!("  {}", path);
        println!("    → {:?}", decoded);
        println!("    ⇢ {}", rebuilt.path_segment);
    }

    Ok(())
}
