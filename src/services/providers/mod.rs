/// Movie metadata provider abstraction
///
/// The recommender only needs display metadata for a movie id. Keeping the
/// remote service behind a trait lets tests substitute fixtures for TMDB.
use crate::{
    error::AppResult,
    models::{MovieId, TmdbMovieDetails},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch display metadata for a single movie
    ///
    /// Any transport, status or decoding failure is returned as
    /// `AppError::EnrichmentFailed`; callers decide how to degrade.
    async fn fetch_movie(&self, movie_id: MovieId) -> AppResult<TmdbMovieDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
