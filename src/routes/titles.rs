use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct TitlesQuery {
    q: Option<String>,
}

/// Lists catalog titles in catalog order, optionally filtered by `q`
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TitlesQuery>,
) -> Json<Vec<String>> {
    let titles: Vec<String> = state
        .context
        .catalog()
        .titles(params.q.as_deref())
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::debug!(query = ?params.q, results = titles.len(), "Listed catalog titles");

    Json(titles)
}
