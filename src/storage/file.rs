use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::KeyValueStore;
use crate::errors::CineError;

/// [`KeyValueStore`] that keeps one file per key beneath a base directory.
///
/// This is the on-device durable store. The directory is created lazily on
/// the first write, so constructing a `FileStore` never touches the disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CineError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CineError::StorageUnavailable(format!(
                "read {}: {}",
                key, e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CineError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CineError::StorageUnavailable(format!("create {:?}: {}", self.dir, e)))?;
        fs::write(self.path_for(key), value)
            .await
            .map_err(|e| CineError::StorageUnavailable(format!("write {}: {}", key, e)))
    }
}
