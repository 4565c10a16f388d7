use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::RecommendationResult,
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<RecommendationResult>>> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        "Processing recommendation request"
    );

    let results = recommendations::get_recommendations(
        &state.context,
        &state.enricher,
        &request.title,
        state.recommendation_count,
    )
    .await
    .map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Recommendation request rejected");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        results = results.len(),
        "Recommendations completed"
    );

    Ok(Json(results))
}
