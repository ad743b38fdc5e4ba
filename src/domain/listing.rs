// src/domain/listing.rs

use serde::Serialize;

/// One row of the listings CSV, reduced to the columns the map needs.
/// Every field is optional: blank or unparseable cells load as `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub neighbourhood_group: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
}

/// A listing with coordinates and price all present, as served by `/properties`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
}

impl Listing {
    pub fn to_point(&self) -> Option<PropertyPoint> {
        Some(PropertyPoint {
            latitude: self.latitude?,
            longitude: self.longitude?,
            price: self.price?,
        })
    }
}

/// Keeps the listings that have latitude, longitude and price, in input order.
pub fn project_properties(listings: &[Listing]) -> Vec<PropertyPoint> {
    listings.iter().filter_map(Listing::to_point).collect()
}
