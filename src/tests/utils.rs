use crate::data::{AssetStore, MapData};
use crate::domain::{FeatureCollection, Listing};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::json;
use std::io::Read;

pub const SCRIPT_BODY: &str = "document.addEventListener('DOMContentLoaded', () => {});";

pub fn listing(
    group: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    price: Option<f64>,
) -> Listing {
    Listing {
        neighbourhood_group: group.map(str::to_string),
        latitude,
        longitude,
        price,
    }
}

pub fn fixture_listings() -> Vec<Listing> {
    vec![
        listing(Some("Bronx"), Some(40.83), Some(-73.86), Some(100.0)),
        listing(Some("Bronx"), Some(40.84), Some(-73.87), Some(200.0)),
        listing(Some("Queens"), Some(40.74), Some(-73.90), None),
        listing(Some("Manhattan"), None, Some(-73.9), Some(50.0)),
        listing(Some("Manhattan"), Some(40.78), Some(-73.97), Some(250.0)),
    ]
}

pub fn fixture_boroughs() -> FeatureCollection {
    let feature = |name: &str| {
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [-73.9, 40.7] },
            "properties": { "name": name }
        })
    };

    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [
            feature("Bronx"),
            feature("Queens"),
            feature("Manhattan"),
            feature("Staten Island"),
        ]
    }))
    .expect("fixture boroughs should parse")
}

/// Map data built straight from in-memory fixtures, no files involved.
pub fn init_test_data() -> MapData {
    let mut assets = AssetStore::default();
    assets.insert("js/chloropleth.js", SCRIPT_BODY.as_bytes().to_vec());

    MapData::from_parts(&fixture_listings(), fixture_boroughs(), assets)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
