use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A movie as returned by the remote catalog.
///
/// Only the fields the stores and screens rely on are typed; everything else
/// the catalog sends is carried verbatim in `extra` so a favorited movie
/// round-trips through storage without losing fields we don't model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of catalog results, as returned by the popular and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Detail payload for a single movie.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i64>,
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single-user review of a movie.
///
/// `movie_id` is a weak reference: it points at a catalog id and is never
/// validated against the catalog. Nothing enforces one review per movie;
/// lookups take the first match in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub movie_id: i64,
    pub rating: i32,
    pub content: String,
    pub created_at: String,
}

impl Review {
    /// Create a review with a fresh id and an ISO-8601 creation timestamp.
    ///
    /// The rating is not range-checked here; the screens only offer 1-5 but
    /// the data model stays permissive.
    #[must_use]
    pub fn new(movie_id: i64, rating: i32, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            movie_id,
            rating,
            content: content.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
