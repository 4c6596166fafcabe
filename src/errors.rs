use thiserror::Error;

#[derive(Debug, Error)]
pub enum CineError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to fetch from the movie catalog: {0}")]
    RemoteFetch(String),

    #[error("Malformed persisted data: {0}")]
    MalformedData(String),
}

impl From<reqwest::Error> for CineError {
    fn from(error: reqwest::Error) -> Self {
        CineError::RemoteFetch(error.to_string())
    }
}

impl From<serde_json::Error> for CineError {
    fn from(error: serde_json::Error) -> Self {
        CineError::MalformedData(error.to_string())
    }
}

impl From<std::io::Error> for CineError {
    fn from(error: std::io::Error) -> Self {
        CineError::StorageUnavailable(error.to_string())
    }
}

impl From<anyhow::Error> for CineError {
    fn from(error: anyhow::Error) -> Self {
        CineError::RemoteFetch(error.to_string())
    }
}
