/// TMDB (The Movie Database) metadata provider
///
/// API Flow:
/// 1. Details: /movie/{movie_id}?api_key=...&language=... → poster, release date, rating, overview
use crate::{
    error::{AppError, AppResult},
    models::{MovieId, TmdbMovieDetails},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    /// Creates a TMDB provider whose requests give up after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    fn movie_url(&self, movie_id: MovieId) -> String {
        format!("{}/movie/{}", self.api_url, movie_id)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_movie(&self, movie_id: MovieId) -> AppResult<TmdbMovieDetails> {
        let response = self
            .http_client
            .get(self.movie_url(movie_id))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::EnrichmentFailed(format!(
                    "TMDB request for movie {} failed: {}",
                    movie_id,
                    e.without_url()
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::EnrichmentFailed(format!(
                "TMDB API returned status {} for movie {}: {}",
                status, movie_id, body
            )));
        }

        let response_text = response.text().await.map_err(|e| {
            AppError::EnrichmentFailed(format!(
                "Failed to read TMDB response for movie {}: {}",
                movie_id,
                e.without_url()
            ))
        })?;
        tracing::debug!(movie_id = %movie_id, response = %response_text, "Raw TMDB API response");

        let details: TmdbMovieDetails = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                movie_id = %movie_id,
                "Failed to deserialize TMDB response"
            );
            AppError::EnrichmentFailed(format!("Failed to parse TMDB response: {}", e))
        })?;

        tracing::debug!(
            movie_id = %movie_id,
            has_poster = details.poster_path.is_some(),
            provider = "tmdb",
            "Movie details fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
