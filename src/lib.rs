/// cinedeck - the core of a movie-browsing app: remote catalog access,
/// favorites, single-user reviews, and color-theme selection.
///
/// Remote data comes from a TMDB-shaped catalog API; everything local
/// (favorites, reviews, the selected theme) lives in reactive in-memory
/// stores mirrored to a key-value store on every mutation. Mutators return
/// immediately; persistence is fire-and-forget, with a `flush` hook for
/// code that needs the writes settled.
///
/// # Example
///
/// ```no_run
/// use cinedeck::app::App;
/// use cinedeck::core::config::AppConfig;
/// use cinedeck::core::models::Review;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     cinedeck::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let app = App::new(&config)?;
///
///     // Restore favorites, reviews, and the selected theme.
///     app.load().await;
///
///     // Browse the remote catalog.
///     let popular = app.tmdb().popular(1).await?;
///     if let Some(movie) = popular.results.into_iter().next() {
///         let id = movie.id;
///         app.movie_store().add_favorite(movie);
///         app.movie_store().add_review(Review::new(id, 5, "Loved it."));
///     }
///
///     app.theme_store().set_theme("ocean");
///
///     // Let the fire-and-forget writes land before exiting.
///     app.flush().await;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod app;
pub mod clients;
pub mod core;
pub mod errors;
pub mod storage;
pub mod store;

/// Configure structured logging with JSON output.
///
/// Call once at process start; store mutators log their dropped
/// persistence errors through this.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
