pub mod tmdb;

pub use tmdb::{ImageSize, TmdbClient, image_url};
