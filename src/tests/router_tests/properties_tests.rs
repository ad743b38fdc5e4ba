use crate::router::handle;
use crate::tests::utils::{init_test_data, read_body, request};
use http::Method;
use serde_json::{json, Value};

#[test]
fn properties_lists_complete_listings_in_order() {
    let data = init_test_data();

    let resp = handle(request(Method::GET, "/properties"), &data).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(
        body,
        json!([
            { "latitude": 40.83, "longitude": -73.86, "price": 100.0 },
            { "latitude": 40.84, "longitude": -73.87, "price": 200.0 },
            { "latitude": 40.78, "longitude": -73.97, "price": 250.0 }
        ])
    );
}

#[test]
fn post_to_properties_is_rejected() {
    let data = init_test_data();

    let Err(err) = handle(request(Method::POST, "/properties"), &data) else {
        panic!("expected an error response");
    };

    assert_eq!(err.status(), 405);
}
