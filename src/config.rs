use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key (v3)
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix for poster paths returned by TMDB
    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Language requested from TMDB
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,

    /// Poster shown when TMDB has none or cannot be reached
    #[serde(default = "default_placeholder_poster_url")]
    pub placeholder_poster_url: String,

    /// Per-call timeout for metadata requests
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Number of recommendations returned per title
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Path to the precomputed catalog (JSON array of movies)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the precomputed similarity matrix, co-indexed with the catalog
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_tmdb_language() -> String {
    "en-US".to_string()
}

fn default_placeholder_poster_url() -> String {
    "https://via.placeholder.com/500x750".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_recommendation_count() -> usize {
    5
}

fn default_catalog_path() -> String {
    "model/movie_list.json".to_string()
}

fn default_similarity_path() -> String {
    "model/movie_similarity.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
