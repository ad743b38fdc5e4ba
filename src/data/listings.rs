// src/data/listings.rs

use crate::data::LoadError;
use crate::domain::Listing;
use csv::{Reader, ReaderBuilder, Trim};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 4] = ["neighbourhood_group", "latitude", "longitude", "price"];

/// Raw CSV row. Extra columns in the file are ignored.
#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(deserialize_with = "non_empty_text")]
    neighbourhood_group: Option<String>,
    #[serde(deserialize_with = "coerced_number")]
    latitude: Option<f64>,
    #[serde(deserialize_with = "coerced_number")]
    longitude: Option<f64>,
    #[serde(deserialize_with = "coerced_number")]
    price: Option<f64>,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            neighbourhood_group: row.neighbourhood_group,
            latitude: row.latitude,
            longitude: row.longitude,
            price: row.price,
        }
    }
}

/// Load every listing from the CSV at `path`.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    read_listings(reader, path)
}

/// Parse listings from an open CSV reader. `path` is only used in error messages.
pub fn read_listings<R: Read>(mut reader: Reader<R>, path: &Path) -> Result<Vec<Listing>, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?;
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    reader
        .deserialize::<ListingRow>()
        .map(|row| row.map(Listing::from).map_err(csv_err))
        .collect()
}

/// Text-to-number coercion for numeric cells.
///
/// Accepts plain decimals plus a leading `$` and `,` thousands separators
/// (`"$1,060"`). Blank, unparseable and non-finite values come back as `None`.
pub fn coerce_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn coerced_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(coerce_number))
}

fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
