// src/data/assets.rs

use crate::data::LoadError;
use mime::Mime;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub content_type: Mime,
    pub bytes: Vec<u8>,
}

/// Static files read into memory at startup, keyed by `/`-separated path
/// relative to the static directory (`js/chloropleth.js`).
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: HashMap<String, Asset>,
}

impl AssetStore {
    /// Read every regular file under `dir`. A missing directory gives an empty store.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let mut store = AssetStore::default();

        if !dir.is_dir() {
            tracing::warn!(
                "Static directory {} not found, serving no assets",
                dir.display()
            );
            return Ok(store);
        }

        store.load_dir(dir, "")?;
        Ok(store)
    }

    fn load_dir(&mut self, dir: &Path, prefix: &str) -> Result<(), LoadError> {
        let io_err = |source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        };

        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            let file_type = entry.file_type().map_err(io_err)?;
            if file_type.is_dir() {
                self.load_dir(&path, &key)?;
            } else if file_type.is_file() {
                let bytes = fs::read(&path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!("Loaded asset {key} ({} bytes)", bytes.len());
                self.insert(key, bytes);
            }
        }

        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, bytes: Vec<u8>) {
        let key = key.into();
        let content_type = content_type_for(&key);
        self.assets.insert(key, Asset { content_type, bytes });
    }

    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.assets.get(key)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

pub fn content_type_for(path: &str) -> Mime {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("html") | Some("htm") => mime::TEXT_HTML_UTF_8,
        Some("json") | Some("geojson") => mime::APPLICATION_JSON,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("txt") => mime::TEXT_PLAIN_UTF_8,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
