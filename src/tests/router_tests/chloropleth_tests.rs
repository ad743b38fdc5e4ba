use crate::router::handle;
use crate::data::{AssetStore, MapData};
use crate::tests::utils::{fixture_boroughs, init_test_data, listing, read_body, request};
use http::Method;
use serde_json::Value;

#[test]
fn chloropleth_returns_merged_feature_collection() {
    let data = init_test_data();

    let resp = handle(request(Method::GET, "/chloropleth"), &data).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(body["type"], "FeatureCollection");

    let features = body["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);

    let price_of = |name: &str| {
        features
            .iter()
            .find(|f| f["properties"]["name"] == name)
            .map(|f| f["properties"]["average_price"].clone())
            .unwrap_or_else(|| panic!("feature {name} missing"))
    };

    assert_eq!(price_of("Bronx"), 150.0);
    assert_eq!(price_of("Manhattan"), 150.0);
    // Queens only has an unpriced listing, Staten Island has none.
    assert_eq!(price_of("Queens"), Value::Null);
    assert_eq!(price_of("Staten Island"), Value::Null);
}

#[test]
fn chloropleth_keeps_geometry() {
    let data = init_test_data();

    let resp = handle(request(Method::GET, "/chloropleth"), &data).unwrap();

    let body: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(body["features"][0]["geometry"]["type"], "Point");
}

#[test]
fn chloropleth_is_idempotent() {
    let data = init_test_data();

    let first = read_body(handle(request(Method::GET, "/chloropleth"), &data).unwrap());
    let second = read_body(handle(request(Method::GET, "/chloropleth"), &data).unwrap());

    assert_eq!(first, second);
}

#[test]
fn chloropleth_ignores_query_string() {
    let data = init_test_data();

    let resp = handle(request(Method::GET, "/chloropleth?borough=Bronx"), &data).unwrap();

    let body: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(body["features"].as_array().unwrap().len(), 4);
}

#[test]
fn huge_prices_still_serialize_as_numbers() {
    let listings = vec![
        listing(Some("Bronx"), Some(40.83), Some(-73.86), Some(1e308)),
        listing(Some("Bronx"), Some(40.84), Some(-73.87), Some(1e308)),
    ];
    let data = MapData::from_parts(&listings, fixture_boroughs(), AssetStore::default());

    let resp = handle(request(Method::GET, "/chloropleth"), &data).unwrap();

    let body: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(body["features"][0]["properties"]["name"], "Bronx");
    assert_eq!(body["features"][0]["properties"]["average_price"], 1e308);
}
