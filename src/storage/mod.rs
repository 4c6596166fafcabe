//! Durable key-value storage.
//!
//! Everything the app persists locally goes through [`KeyValueStore`]: three
//! independent string keys, each overwritten wholesale on every mutation.
//! There are no transactions and no multi-key atomicity; deletion is modeled
//! as absence and never produced.

use async_trait::async_trait;

use crate::errors::CineError;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the favorites list (JSON array of movies).
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key for the reviews list (JSON array of reviews).
pub const REVIEWS_KEY: &str = "reviews";

/// Storage key for the selected theme id (plain text).
pub const SELECTED_THEME_KEY: &str = "selected_theme";

/// Async get/set over string keys and string values, durable across restarts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a key. A missing key is `Ok(None)`; only I/O failures are errors.
    async fn get(&self, key: &str) -> Result<Option<String>, CineError>;

    /// Write a key. The value is durable once this returns `Ok`.
    async fn set(&self, key: &str, value: &str) -> Result<(), CineError>;
}
