use std::sync::Arc;

use tracing::warn;

use super::{PendingWrites, StateCell, SubscriptionId};
use crate::core::themes::{self, Theme};
use crate::storage::{KeyValueStore, SELECTED_THEME_KEY};

/// Holds the selected theme and mirrors the selection to storage.
///
/// Selection never fails: an id that isn't in the catalog silently resolves
/// to the default theme, both when set and when loaded back.
pub struct ThemeStore {
    cell: StateCell<&'static Theme>,
    storage: Arc<dyn KeyValueStore>,
    pending: PendingWrites,
}

impl ThemeStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            cell: StateCell::new(themes::default_theme()),
            storage,
            pending: PendingWrites::default(),
        }
    }

    #[must_use]
    pub fn current_theme(&self) -> &'static Theme {
        self.cell.get()
    }

    /// Select a theme and persist the selection (fire-and-forget).
    ///
    /// The requested id is persisted as-is, not the resolved one; an id that
    /// later drops out of the catalog falls back to the default on load.
    pub fn set_theme(&self, theme_id: &str) {
        let theme = themes::resolve(theme_id);
        self.cell.mutate(|current| *current = theme);

        let storage = Arc::clone(&self.storage);
        let requested = theme_id.to_string();
        let handle = tokio::spawn(async move {
            if let Err(e) = storage.set(SELECTED_THEME_KEY, &requested).await {
                warn!("Failed to persist theme selection: {}", e);
            }
        });
        self.pending.track(handle);
    }

    /// Populate the selection from storage. Called once at startup;
    /// idempotent, and a failed or absent read leaves the state unchanged.
    pub async fn load_theme(&self) {
        match self.storage.get(SELECTED_THEME_KEY).await {
            Ok(Some(stored)) => {
                let theme = themes::resolve(&stored);
                self.cell.mutate(|current| *current = theme);
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to load theme selection: {}", e),
        }
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&'static Theme) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.cell.subscribe(move |theme| listener(*theme))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.cell.unsubscribe(id)
    }

    /// Wait for outstanding persistence writes; tests use this to make the
    /// fire-and-forget path deterministic.
    pub async fn flush(&self) {
        self.pending.flush().await;
    }
}
