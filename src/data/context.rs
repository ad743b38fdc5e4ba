// src/data/context.rs

use crate::config::Config;
use crate::data::boundaries::load_boundaries;
use crate::data::listings::load_listings;
use crate::data::{AssetStore, LoadError};
use crate::domain::{
    average_price_by_group, merge_average_prices, project_properties, unmatched_boroughs,
    FeatureCollection, Listing, PropertyPoint,
};

/// Everything the handlers serve, built once before the server starts and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct MapData {
    /// Borough boundaries with `average_price` merged into each feature.
    pub chloropleth: FeatureCollection,
    /// Listings that have coordinates and a price, in file order.
    pub properties: Vec<PropertyPoint>,
    pub assets: AssetStore,
}

impl MapData {
    /// Run the aggregate/merge/project pipeline over already-loaded inputs.
    pub fn from_parts(
        listings: &[Listing],
        boundaries: FeatureCollection,
        assets: AssetStore,
    ) -> Self {
        let aggregates = average_price_by_group(listings);
        for aggregate in &aggregates {
            tracing::debug!(
                "Average price for {}: {:.2}",
                aggregate.group_name,
                aggregate.mean_price
            );
        }

        let chloropleth = merge_average_prices(boundaries, &aggregates);
        let unmatched = unmatched_boroughs(&chloropleth);
        if !unmatched.is_empty() {
            tracing::warn!("No listings priced for: {}", unmatched.join(", "));
        }

        let properties = project_properties(listings);

        MapData {
            chloropleth,
            properties,
            assets,
        }
    }

    /// Load both data files and the static directory named in `config`.
    pub fn load(config: &Config) -> Result<Self, LoadError> {
        let listings = load_listings(&config.listings)?;
        tracing::info!(
            "Loaded {} listings from {}",
            listings.len(),
            config.listings.display()
        );

        let boundaries = load_boundaries(&config.boroughs)?;
        tracing::info!(
            "Loaded {} borough features from {}",
            boundaries.features.len(),
            config.boroughs.display()
        );

        let assets = AssetStore::load(&config.static_dir)?;
        if assets.is_empty() {
            tracing::warn!("No static assets loaded, the page will render without its map script");
        } else {
            tracing::info!("Loaded {} static assets", assets.len());
        }

        let data = MapData::from_parts(&listings, boundaries, assets);

        let dropped = listings.len() - data.properties.len();
        if dropped > 0 {
            tracing::info!("Skipped {dropped} listings missing coordinates or price");
        }

        Ok(data)
    }
}
