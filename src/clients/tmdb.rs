//! Remote movie catalog (TMDB) client.
//!
//! Three read-only endpoints feed the screens: popular, search, and details.
//! Payloads are decoded into the minimal typed models; unknown fields ride
//! along untouched. Failures map to [`CineError::RemoteFetch`] and callers
//! leave their lists unchanged, no retry.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::info;
use url::Url;

use crate::core::config::{AppConfig, DEFAULT_TMDB_IMAGE_BASE_URL};
use crate::core::models::{MovieDetails, MoviePage};
use crate::errors::CineError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Poster/backdrop size token understood by the image CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    #[default]
    W500,
    Original,
}

impl ImageSize {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Compose a relative image path from the catalog into an absolute URL.
#[must_use]
pub fn image_url(path: &str, size: ImageSize) -> String {
    format!("{}/{}{}", DEFAULT_TMDB_IMAGE_BASE_URL, size.as_str(), path)
}

pub struct TmdbClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot be parsed.
    pub fn new(config: &AppConfig) -> Result<Self, CineError> {
        Url::parse(&config.tmdb_base_url)
            .map_err(|e| CineError::RemoteFetch(format!("invalid catalog base URL: {}", e)))?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            http,
            api_key: config.tmdb_api_key.clone(),
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`CineError::RemoteFetch`] on network failure, a non-success
    /// status, or an undecodable payload.
    pub async fn popular(&self, page: u32) -> Result<MoviePage, CineError> {
        info!("Fetching popular movies, page {}", page);
        self.get_json("movie/popular", &[("page", page.to_string())])
            .await
    }

    /// # Errors
    ///
    /// Returns [`CineError::RemoteFetch`] on network failure, a non-success
    /// status, or an undecodable payload.
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage, CineError> {
        info!("Searching catalog for {:?}, page {}", query, page);
        self.get_json(
            "search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`CineError::RemoteFetch`] on network failure, a non-success
    /// status, or an undecodable payload.
    pub async fn details(&self, movie_id: i64) -> Result<MovieDetails, CineError> {
        info!("Fetching details for movie {}", movie_id);
        self.get_json(&format!("movie/{}", movie_id), &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CineError> {
        let mut query: Vec<(&str, String)> = vec![("api_key", self.api_key.clone())];
        query.extend(params.iter().cloned());

        let url = Url::parse_with_params(&format!("{}/{}", self.base_url, path), &query)
            .map_err(|e| CineError::RemoteFetch(format!("invalid catalog URL: {}", e)))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CineError::RemoteFetch(format!("catalog request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CineError::RemoteFetch(format!(
                "catalog returned {} for {}",
                response.status(),
                path
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CineError::RemoteFetch(format!("failed to decode catalog response: {}", e)))
    }
}
