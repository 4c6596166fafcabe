use std::env;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_DATA_DIR: &str = ".cinedeck";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
    pub data_dir: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error naming the variable if `TMDB_API_KEY` is missing.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            tmdb_api_key: env::var("TMDB_API_KEY").map_err(|e| format!("TMDB_API_KEY: {}", e))?,
            tmdb_base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TMDB_BASE_URL.to_string()),
            tmdb_image_base_url: env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TMDB_IMAGE_BASE_URL.to_string()),
            data_dir: env::var("CINEDECK_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
        })
    }
}
