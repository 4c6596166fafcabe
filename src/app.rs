use std::sync::Arc;

use crate::clients::TmdbClient;
use crate::core::config::AppConfig;
use crate::errors::CineError;
use crate::storage::{FileStore, KeyValueStore};
use crate::store::{MovieStore, ThemeStore};

/// Wires the stores and the catalog client together.
///
/// Screens hold an `App` and talk to its parts; nothing in here is global
/// state, so tests construct one per case with whatever storage they want.
pub struct App {
    tmdb: TmdbClient,
    theme_store: ThemeStore,
    movie_store: MovieStore,
}

impl App {
    /// Build an app persisting to the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog client rejects the configuration.
    pub fn new(config: &AppConfig) -> Result<Self, CineError> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.data_dir));
        Self::with_storage(config, storage)
    }

    /// Build an app over an injected storage backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog client rejects the configuration.
    pub fn with_storage(
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, CineError> {
        Ok(Self {
            tmdb: TmdbClient::new(config)?,
            theme_store: ThemeStore::new(Arc::clone(&storage)),
            movie_store: MovieStore::new(storage),
        })
    }

    /// Populate in-memory state from storage. Runs once at startup, before
    /// any user interaction is possible.
    pub async fn load(&self) {
        self.theme_store.load_theme().await;
        self.movie_store.load_favorites().await;
        self.movie_store.load_reviews().await;
    }

    /// Wait for every outstanding persistence write.
    pub async fn flush(&self) {
        self.theme_store.flush().await;
        self.movie_store.flush().await;
    }

    #[must_use]
    pub fn tmdb(&self) -> &TmdbClient {
        &self.tmdb
    }

    #[must_use]
    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme_store
    }

    #[must_use]
    pub fn movie_store(&self) -> &MovieStore {
        &self.movie_store
    }
}
