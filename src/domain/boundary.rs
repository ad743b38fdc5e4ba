// src/domain/boundary.rs

use crate::domain::aggregate::{average_price_index, BoroughAggregate};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A GeoJSON `FeatureCollection` whose features are named boroughs.
///
/// Only the members the merge needs are typed. Everything else (bbox, crs,
/// ids, extra properties) rides along in the flattened maps and is
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    pub features: Vec<BoundaryFeature>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionKind {
    FeatureCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    #[serde(default)]
    pub geometry: Value,
    pub properties: BoundaryProperties,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Feature,
}

/// Feature properties. `average_price` is always serialized, as `null` when
/// no listing group matched `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryProperties {
    pub name: String,
    #[serde(default, deserialize_with = "discard_previous")]
    pub average_price: Option<f64>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

// Whatever the file carried under `average_price` is replaced by the merge.
fn discard_previous<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(None)
}

/// Writes each borough's mean price into the matching feature.
///
/// Every feature is visited once, in order. A feature whose `name` has no
/// aggregate with exactly the same `group_name` gets `average_price: null`.
pub fn merge_average_prices(
    mut collection: FeatureCollection,
    aggregates: &[BoroughAggregate],
) -> FeatureCollection {
    let index = average_price_index(aggregates);

    for feature in &mut collection.features {
        feature.properties.average_price = index.get(feature.properties.name.as_str()).copied();
    }

    collection
}

/// Names of features left without an average price.
pub fn unmatched_boroughs(collection: &FeatureCollection) -> Vec<&str> {
    collection
        .features
        .iter()
        .filter(|f| f.properties.average_price.is_none())
        .map(|f| f.properties.name.as_str())
        .collect()
}
