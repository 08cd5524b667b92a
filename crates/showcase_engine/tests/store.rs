use std::fs;

use showcase_core::{update, BrowserState, Effect, ItemId, ListKind, Msg, SavedSet};
use showcase_engine::{
    hydrate_saved, persist_saved, FileStore, KeyValueStore, MemoryStore, StoreError,
};
use tempfile::TempDir;

fn init_logging() {
    showcase_logging::initialize_for_tests();
}

#[test]
fn file_store_round_trips_and_misses_cleanly() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("state"));

    assert_eq!(store.get("savedJobs_v1"), None);
    store.set("savedJobs_v1", "[\"1\"]").unwrap();
    assert_eq!(store.get("savedJobs_v1").as_deref(), Some("[\"1\"]"));
    assert!(temp.path().join("state").join("savedJobs_v1.json").is_file());
}

#[test]
fn file_store_rejects_path_like_keys() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    assert!(matches!(
        store.set("../escape", "[]"),
        Err(StoreError::InvalidKey(_))
    ));
    assert_eq!(store.get("../escape"), None);
}

#[test]
fn hydrate_yields_empty_on_missing_or_malformed() {
    init_logging();
    let store = MemoryStore::new();
    assert!(hydrate_saved(&store, "savedJobs_v1").is_empty());

    for blob in ["", "{", "{\"ids\":[1]}", "[1,{}]", "42"] {
        store.seed("savedJobs_v1", blob);
        assert!(hydrate_saved(&store, "savedJobs_v1").is_empty(), "blob {blob:?}");
    }

    store.seed("savedJobs_v1", "[3, 1]");
    assert_eq!(
        hydrate_saved(&store, "savedJobs_v1").ids(),
        &[ItemId::from("3"), ItemId::from("1")]
    );
}

#[test]
fn hydrate_from_corrupt_file_is_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("savedWork_v1.json"), "not json").unwrap();
    let store = FileStore::new(temp.path());
    assert!(hydrate_saved(&store, "savedWork_v1").is_empty());
}

#[test]
fn unavailable_store_degrades_to_memory_only() {
    init_logging();
    let store = MemoryStore::new();
    store.set_failing(true);
    assert!(hydrate_saved(&store, "savedJobs_v1").is_empty());

    let (state, effects) = update(BrowserState::default(), Msg::SaveToggled(ItemId::from("1")));
    for effect in effects {
        if let Effect::PersistSaved { key, saved } = effect {
            persist_saved(&store, key, &saved);
        }
    }
    assert!(state.saved().contains(&ItemId::from("1")));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn double_toggle_leaves_storage_at_final_state() {
    init_logging();
    let store = MemoryStore::new();
    store.seed("savedJobs_v1", "[\"2\"]");

    let restored = hydrate_saved(&store, ListKind::Jobs.storage_key());
    let (mut state, _) = update(BrowserState::default(), Msg::SavedRestored(restored.clone()));

    for _ in 0..2 {
        let (next, effects) = update(state, Msg::SaveToggled(ItemId::from("4")));
        for effect in effects {
            if let Effect::PersistSaved { key, saved } = effect {
                persist_saved(&store, key, &saved);
            }
        }
        state = next;
    }

    assert_eq!(state.saved(), &restored);
    assert_eq!(store.write_count(), 2);
    assert_eq!(
        SavedSet::from_json(&store.get("savedJobs_v1").unwrap()),
        restored
    );
}
