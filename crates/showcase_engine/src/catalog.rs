use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use showcase_core::Item;
use showcase_logging::showcase_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(String),
}

/// Parses a JSON array of items. Ids must be unique; tags are deduplicated.
pub fn parse_catalog(json: &str) -> Result<Vec<Item>, CatalogError> {
    let mut items: Vec<Item> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for item in &mut items {
        if !seen.insert(item.id.clone()) {
            return Err(CatalogError::DuplicateId(item.id.to_string()));
        }
        item.dedupe_tags();
    }
    Ok(items)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_catalog(&json)?;
    showcase_info!("Loaded {} items from {:?}", items.len(), path);
    Ok(items)
}
