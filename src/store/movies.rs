use std::sync::Arc;

use tracing::{error, warn};

use super::{PendingWrites, StateCell, SubscriptionId};
use crate::core::models::{Movie, Review};
use crate::storage::{FAVORITES_KEY, KeyValueStore, REVIEWS_KEY};

/// Favorites and reviews held together, the way the screens consume them.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub favorites: Vec<Movie>,
    pub reviews: Vec<Review>,
}

/// Holds the user's favorites and reviews and mirrors both to storage.
///
/// Mutation is append or filter-and-replace only; every mutation re-persists
/// the whole affected list (wholesale, not a delta) without awaiting the
/// write. Duplicates are permitted in both lists: favoriting the same movie
/// twice yields two entries, and nothing enforces one review per movie.
pub struct MovieStore {
    cell: StateCell<CatalogState>,
    storage: Arc<dyn KeyValueStore>,
    pending: PendingWrites,
}

impl MovieStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            cell: StateCell::new(CatalogState::default()),
            storage,
            pending: PendingWrites::default(),
        }
    }

    /// Append a movie to the favorites list, no duplicate check.
    pub fn add_favorite(&self, movie: Movie) {
        let payload = self.cell.mutate(|state| {
            state.favorites.push(movie);
            serde_json::to_string(&state.favorites)
        });
        self.persist(FAVORITES_KEY, payload);
    }

    /// Remove every favorite with this id. Removing an id that isn't present
    /// is a no-op that still re-persists the unchanged list.
    pub fn remove_favorite(&self, movie_id: i64) {
        let payload = self.cell.mutate(|state| {
            state.favorites.retain(|m| m.id != movie_id);
            serde_json::to_string(&state.favorites)
        });
        self.persist(FAVORITES_KEY, payload);
    }

    /// Append a review; a second review for the same movie is kept alongside
    /// the first.
    pub fn add_review(&self, review: Review) {
        let payload = self.cell.mutate(|state| {
            state.reviews.push(review);
            serde_json::to_string(&state.reviews)
        });
        self.persist(REVIEWS_KEY, payload);
    }

    /// Replace favorites from storage. Absent, unreadable, or malformed data
    /// leaves the in-memory list unchanged. Idempotent.
    pub async fn load_favorites(&self) {
        match self.storage.get(FAVORITES_KEY).await {
            Ok(Some(stored)) => match serde_json::from_str::<Vec<Movie>>(&stored) {
                Ok(favorites) => {
                    self.cell.mutate(|state| state.favorites = favorites);
                }
                Err(e) => warn!("Ignoring malformed favorites payload: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("Failed to load favorites: {}", e),
        }
    }

    /// Replace reviews from storage, with the same absence semantics as
    /// [`load_favorites`](Self::load_favorites).
    pub async fn load_reviews(&self) {
        match self.storage.get(REVIEWS_KEY).await {
            Ok(Some(stored)) => match serde_json::from_str::<Vec<Review>>(&stored) {
                Ok(reviews) => {
                    self.cell.mutate(|state| state.reviews = reviews);
                }
                Err(e) => warn!("Ignoring malformed reviews payload: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("Failed to load reviews: {}", e),
        }
    }

    #[must_use]
    pub fn favorites(&self) -> Vec<Movie> {
        self.cell.with(|state| state.favorites.clone())
    }

    #[must_use]
    pub fn reviews(&self) -> Vec<Review> {
        self.cell.with(|state| state.reviews.clone())
    }

    #[must_use]
    pub fn is_favorite(&self, movie_id: i64) -> bool {
        self.cell
            .with(|state| state.favorites.iter().any(|m| m.id == movie_id))
    }

    /// First review for this movie in insertion order, if any.
    #[must_use]
    pub fn review_for(&self, movie_id: i64) -> Option<Review> {
        self.cell.with(|state| {
            state
                .reviews
                .iter()
                .find(|r| r.movie_id == movie_id)
                .cloned()
        })
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&CatalogState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.cell.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.cell.unsubscribe(id)
    }

    /// Wait for outstanding persistence writes; tests use this to make the
    /// fire-and-forget path deterministic.
    pub async fn flush(&self) {
        self.pending.flush().await;
    }

    // The payload is serialized under the mutation lock by the caller, so a
    // write always carries the state its mutation produced even when writes
    // land out of order.
    fn persist(&self, key: &'static str, payload: serde_json::Result<String>) {
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize {} payload: {}", key, e);
                return;
            }
        };

        let storage = Arc::clone(&self.storage);
        let handle = tokio::spawn(async move {
            if let Err(e) = storage.set(key, &payload).await {
                warn!("Failed to persist {}: {}", key, e);
            }
        });
        self.pending.track(handle);
    }
}
