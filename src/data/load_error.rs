use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops the map data from loading. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} is not a valid feature collection: {source}", .path.display())]
    Boundary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
