use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// Marker used for release dates and ratings the metadata service did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Overview used when the metadata service has no synopsis
pub const NO_DESCRIPTION: &str = "No description available.";

/// TMDB movie identifier (`movie_id` in the catalog artifact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recommendable movie, positioned in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Row/column of this entry in the similarity matrix
    pub internal_index: usize,
    pub external_id: MovieId,
}

/// Average vote, or the "N/A" marker when unknown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::NotAvailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Display metadata for a single movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub poster_path: String,
    pub release_date: String,
    pub rating: Rating,
    pub overview: String,
}

impl EnrichedRecord {
    /// Record used when nothing could be fetched for a movie
    pub fn fallback(placeholder_poster_url: &str) -> Self {
        Self {
            poster_path: placeholder_poster_url.to_string(),
            release_date: NOT_AVAILABLE.to_string(),
            rating: Rating::NotAvailable,
            overview: NO_DESCRIPTION.to_string(),
        }
    }
}

/// A recommended movie as returned to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub movie_title: String,
    pub poster_path: String,
    pub release_date: String,
    pub rating: Rating,
    pub overview: String,
}

impl RecommendationResult {
    pub fn new(movie_title: String, record: EnrichedRecord) -> Self {
        Self {
            movie_title,
            poster_path: record.poster_path,
            release_date: record.release_date,
            rating: record.rating,
            overview: record.overview,
        }
    }
}

// ============================================================================
// Artifact Types
// ============================================================================

/// Row of the precomputed catalog artifact
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub movie_id: u64,
    pub title: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Subset of the TMDB `GET /movie/{id}` response that we display
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
}
