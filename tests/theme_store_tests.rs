use std::sync::Arc;

use async_trait::async_trait;

use cinedeck::core::themes;
use cinedeck::errors::CineError;
use cinedeck::storage::{KeyValueStore, MemoryStore, SELECTED_THEME_KEY};
use cinedeck::store::ThemeStore;

struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CineError> {
        Err(CineError::StorageUnavailable(format!("read {key}")))
    }

    async fn set(&self, key: &str, _value: &str) -> Result<(), CineError> {
        Err(CineError::StorageUnavailable(format!("write {key}")))
    }
}

#[tokio::test]
async fn starts_on_the_default_theme() {
    let store = ThemeStore::new(Arc::new(MemoryStore::new()));
    assert_eq!(store.current_theme().id, "default");
    assert_eq!(store.current_theme().id, themes::THEMES[0].id);
}

#[tokio::test]
async fn set_theme_switches_immediately() {
    let store = ThemeStore::new(Arc::new(MemoryStore::new()));

    store.set_theme("ocean");
    assert_eq!(store.current_theme().id, "ocean");
}

#[tokio::test]
async fn unknown_ids_fall_back_to_the_default() {
    let store = ThemeStore::new(Arc::new(MemoryStore::new()));

    store.set_theme("ocean");
    store.set_theme("nonexistent");
    assert_eq!(store.current_theme().id, "default");
}

#[tokio::test]
async fn selection_round_trips_across_a_restart() {
    let storage = Arc::new(MemoryStore::new());

    let store = ThemeStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    store.set_theme("aurora");
    store.flush().await;

    let reloaded = ThemeStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    reloaded.load_theme().await;
    assert_eq!(reloaded.current_theme().id, "aurora");
}

#[tokio::test]
async fn persisted_unknown_id_loads_as_the_default() {
    // The raw requested id is what gets persisted; a stored id that is not
    // in the catalog is treated like an absent key.
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(SELECTED_THEME_KEY, "retired-theme")
        .await
        .unwrap();

    let store = ThemeStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    store.load_theme().await;
    assert_eq!(store.current_theme().id, "default");
}

#[tokio::test]
async fn load_theme_is_idempotent() {
    let storage = Arc::new(MemoryStore::new());
    storage.set(SELECTED_THEME_KEY, "sunset").await.unwrap();

    let store = ThemeStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    store.load_theme().await;
    let first = store.current_theme().id;
    store.load_theme().await;
    assert_eq!(store.current_theme().id, first);
}

#[tokio::test]
async fn absent_key_leaves_the_default_in_place() {
    let store = ThemeStore::new(Arc::new(MemoryStore::new()));
    store.load_theme().await;
    assert_eq!(store.current_theme().id, "default");
}

#[tokio::test]
async fn storage_failures_never_surface() {
    let store = ThemeStore::new(Arc::new(BrokenStore));

    store.set_theme("ocean");
    store.flush().await;
    store.load_theme().await;

    // The write was dropped and the failed read left the selection alone.
    assert_eq!(store.current_theme().id, "ocean");
}

#[tokio::test]
async fn subscribers_hear_theme_changes() {
    use std::sync::Mutex;

    let store = ThemeStore::new(Arc::new(MemoryStore::new()));
    let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);

    let id = store.subscribe(move |theme| {
        seen_clone.lock().unwrap().push(theme.id);
    });

    store.set_theme("ocean");
    store.set_theme("sunset");

    assert_eq!(*seen.lock().unwrap(), vec!["ocean", "sunset"]);
    assert!(store.unsubscribe(id));
}
