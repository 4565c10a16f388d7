//! Movie recommender back end.
//!
//! Given a movie title, finds the most similar titles in a precomputed
//! similarity matrix and decorates each with poster, release date, rating and
//! overview from TMDB.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
