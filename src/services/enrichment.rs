use std::sync::Arc;
use tokio::task::JoinSet;

use crate::{
    models::{EnrichedRecord, MovieId, Rating, TmdbMovieDetails, NOT_AVAILABLE, NO_DESCRIPTION},
    services::providers::MetadataProvider,
};

/// Decorates catalog entries with display metadata from a [`MetadataProvider`]
///
/// Failures never reach the caller: a movie whose metadata cannot be fetched
/// gets the fallback record (placeholder poster, "N/A" fields) and a warning
/// is logged.
#[derive(Clone)]
pub struct MetadataEnricher {
    provider: Arc<dyn MetadataProvider>,
    image_base_url: String,
    placeholder_poster_url: String,
}

impl MetadataEnricher {
    pub fn new(
        provider: Arc<dyn MetadataProvider>,
        image_base_url: String,
        placeholder_poster_url: String,
    ) -> Self {
        Self {
            provider,
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
            placeholder_poster_url,
        }
    }

    /// Full default record
    pub fn fallback(&self) -> EnrichedRecord {
        EnrichedRecord::fallback(&self.placeholder_poster_url)
    }

    /// Maps a provider response onto display fields, defaulting whatever is missing
    pub fn to_record(&self, details: TmdbMovieDetails) -> EnrichedRecord {
        let poster_path = match details.poster_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => {
                format!("{}/{}", self.image_base_url, path.trim_start_matches('/'))
            }
            _ => self.placeholder_poster_url.clone(),
        };

        let release_date = details
            .release_date
            .filter(|date| !date.trim().is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let rating = details
            .vote_average
            .map(Rating::Score)
            .unwrap_or(Rating::NotAvailable);

        let overview = details
            .overview
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        EnrichedRecord {
            poster_path,
            release_date,
            rating,
            overview,
        }
    }

    /// Fetches display metadata for one movie, degrading to the fallback record
    pub async fn fetch_details(&self, movie_id: MovieId) -> EnrichedRecord {
        self.fetch_or_fallback(movie_id).await.0
    }

    /// Like [`fetch_details`](Self::fetch_details), also reporting whether the
    /// provider actually answered
    async fn fetch_or_fallback(&self, movie_id: MovieId) -> (EnrichedRecord, bool) {
        match self.provider.fetch_movie(movie_id).await {
            Ok(details) => (self.to_record(details), true),
            Err(e) => {
                tracing::warn!(
                    movie_id = %movie_id,
                    provider = self.provider.name(),
                    error = %e,
                    "Metadata enrichment failed, using defaults"
                );
                (self.fallback(), false)
            }
        }
    }

    /// Fetches metadata for several movies in parallel
    ///
    /// The returned records line up with `movie_ids` regardless of the order
    /// in which the requests complete. Dropping the returned future aborts
    /// every request still in flight.
    pub async fn fetch_details_batch(&self, movie_ids: Vec<MovieId>) -> Vec<EnrichedRecord> {
        let mut records = vec![self.fallback(); movie_ids.len()];
        let mut tasks = JoinSet::new();

        for (slot, movie_id) in movie_ids.into_iter().enumerate() {
            let enricher = self.clone();
            tasks.spawn(async move {
                let (record, fetched) = enricher.fetch_or_fallback(movie_id).await;
                (slot, record, fetched)
            });
        }

        let mut fetched_count = 0usize;
        let mut fallback_count = 0usize;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, record, fetched)) => {
                    if fetched {
                        fetched_count += 1;
                    } else {
                        fallback_count += 1;
                    }
                    records[slot] = record;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Enrichment task join error");
                    fallback_count += 1;
                }
            }
        }

        if fallback_count > 0 {
            tracing::warn!(
                fetched_count,
                fallback_count,
                "Partial enrichment failure"
            );
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::services::providers::MockMetadataProvider;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
    const PLACEHOLDER: &str = "https://via.placeholder.com/500x750";

    fn create_enricher(provider: MockMetadataProvider) -> MetadataEnricher {
        MetadataEnricher::new(
            Arc::new(provider),
            IMAGE_BASE.to_string(),
            PLACEHOLDER.to_string(),
        )
    }

    fn details(poster_path: Option<&str>) -> TmdbMovieDetails {
        TmdbMovieDetails {
            poster_path: poster_path.map(str::to_string),
            release_date: Some("2010-07-15".to_string()),
            vote_average: Some(8.4),
            overview: Some("Dreams within dreams.".to_string()),
        }
    }

    #[test]
    fn test_poster_path_prefixed_with_image_base() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let record = enricher.to_record(details(Some("/abc.jpg")));
        assert_eq!(record.poster_path, "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn test_null_poster_uses_placeholder() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let record = enricher.to_record(details(None));
        assert_eq!(record.poster_path, PLACEHOLDER);
    }

    #[test]
    fn test_empty_poster_uses_placeholder() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let record = enricher.to_record(details(Some("")));
        assert_eq!(record.poster_path, PLACEHOLDER);
    }

    #[test]
    fn test_present_fields_pass_through() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let record = enricher.to_record(details(Some("/abc.jpg")));
        assert_eq!(record.release_date, "2010-07-15");
        assert_eq!(record.rating, Rating::Score(8.4));
        assert_eq!(record.overview, "Dreams within dreams.");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let record = enricher.to_record(TmdbMovieDetails::default());
        assert_eq!(record, EnrichedRecord::fallback(PLACEHOLDER));
    }

    #[test]
    fn test_blank_release_date_is_not_available() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let record = enricher.to_record(TmdbMovieDetails {
            release_date: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(record.release_date, "N/A");
    }

    #[tokio::test]
    async fn test_fetch_details_maps_provider_response() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_fetch_movie()
            .with(eq(MovieId(27205)))
            .times(1)
            .returning(|_| Ok(details(Some("/inception.jpg"))));

        let record = create_enricher(provider).fetch_details(MovieId(27205)).await;
        assert_eq!(
            record.poster_path,
            "https://image.tmdb.org/t/p/w500/inception.jpg"
        );
        assert_eq!(record.rating, Rating::Score(8.4));
    }

    #[tokio::test]
    async fn test_fetch_details_degrades_on_provider_error() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_fetch_movie()
            .returning(|_| Err(AppError::EnrichmentFailed("connection refused".to_string())));
        provider.expect_name().return_const("mock");

        let record = create_enricher(provider).fetch_details(MovieId(1)).await;
        assert_eq!(record, EnrichedRecord::fallback(PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_batch_keeps_input_order_and_isolates_failures() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_fetch_movie().returning(|id| match id.0 {
            2 => Err(AppError::EnrichmentFailed("timeout".to_string())),
            n => Ok(TmdbMovieDetails {
                overview: Some(format!("movie {}", n)),
                ..Default::default()
            }),
        });
        provider.expect_name().return_const("mock");

        let records = create_enricher(provider)
            .fetch_details_batch(vec![MovieId(3), MovieId(2), MovieId(1)])
            .await;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].overview, "movie 3");
        assert_eq!(records[1], EnrichedRecord::fallback(PLACEHOLDER));
        assert_eq!(records[2].overview, "movie 1");
    }

    #[test]
    fn test_batch_of_nothing_is_empty() {
        let enricher = create_enricher(MockMetadataProvider::new());
        let records = tokio_test::block_on(enricher.fetch_details_batch(vec![]));
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_reported_as_fallback() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_fetch_movie().returning(|id| {
            if id == MovieId(1) {
                Ok(TmdbMovieDetails::default())
            } else {
                Err(AppError::EnrichmentFailed("timeout".to_string()))
            }
        });
        provider.expect_name().return_const("mock");
        let enricher = create_enricher(provider);

        let (_, fetched) = enricher.fetch_or_fallback(MovieId(1)).await;
        assert!(fetched);

        let (record, fetched) = enricher.fetch_or_fallback(MovieId(2)).await;
        assert!(!fetched);
        assert_eq!(record, EnrichedRecord::fallback(PLACEHOLDER));
    }

    /// Counts calls that ran to completion after a long delay
    struct SlowProvider {
        completed: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl MetadataProvider for SlowProvider {
        async fn fetch_movie(&self, _movie_id: MovieId) -> AppResult<TmdbMovieDetails> {
            tokio::time::sleep(Duration::from_millis(300)).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(TmdbMovieDetails::default())
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_dropping_batch_aborts_in_flight_requests() {
        let completed = Arc::new(AtomicUsize::new(0));
        let enricher = MetadataEnricher::new(
            Arc::new(SlowProvider {
                completed: completed.clone(),
            }),
            IMAGE_BASE.to_string(),
            PLACEHOLDER.to_string(),
        );

        let batch = enricher.fetch_details_batch(vec![MovieId(1), MovieId(2), MovieId(3)]);
        let timed_out = tokio::time::timeout(Duration::from_millis(30), batch).await;
        assert!(timed_out.is_err());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_batch_completes_when_not_dropped() {
        let completed = Arc::new(AtomicUsize::new(0));
        let enricher = MetadataEnricher::new(
            Arc::new(SlowProvider {
                completed: completed.clone(),
            }),
            IMAGE_BASE.to_string(),
            PLACEHOLDER.to_string(),
        );

        let records = enricher
            .fetch_details_batch(vec![MovieId(1), MovieId(2)])
            .await;

        assert_eq!(records.len(), 2);
        assert_eq!(completed.load(Ordering::SeqCst), 2);
    }
}
