use showcase_core::SavedSet;
use showcase_logging::{showcase_debug, showcase_warn};

use crate::store::KeyValueStore;

/// Reads the saved set under `key`. Missing or malformed data yields an empty set.
pub fn hydrate_saved(store: &dyn KeyValueStore, key: &str) -> SavedSet {
    let Some(blob) = store.get(key) else {
        showcase_debug!("No saved set under {}", key);
        return SavedSet::new();
    };
    let saved = SavedSet::from_json(&blob);
    if saved.is_empty() && blob.split_whitespace().collect::<String>() != "[]" {
        showcase_warn!("Discarding malformed saved set under {}", key);
    }
    saved
}

/// Writes the saved set under `key`. Failures are logged and swallowed.
pub fn persist_saved(store: &dyn KeyValueStore, key: &str, saved: &SavedSet) {
    if let Err(err) = store.set(key, &saved.to_json()) {
        showcase_warn!("Failed to persist saved set under {}: {}", key, err);
    }
}
