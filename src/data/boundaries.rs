// src/data/boundaries.rs

use crate::data::LoadError;
use crate::domain::FeatureCollection;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and validate the borough GeoJSON file.
pub fn load_boundaries(path: &Path) -> Result<FeatureCollection, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Boundary {
        path: path.to_path_buf(),
        source,
    })
}
