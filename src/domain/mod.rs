pub mod aggregate;
pub mod boundary;
pub mod listing;

pub use aggregate::average_price_by_group;
pub use boundary::{merge_average_prices, unmatched_boroughs, FeatureCollection};
pub use listing::{project_properties, Listing, PropertyPoint};
