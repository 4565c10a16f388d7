use crate::{
    error::{AppError, AppResult},
    models::{CatalogEntry, RecommendationResult},
    services::enrichment::MetadataEnricher,
    store::RecommenderContext,
};

/// Finds the `k` catalog entries most similar to `title`
///
/// Entries are ranked by their score in the query's similarity row, highest
/// first; equal scores keep catalog order. The query entry itself is excluded
/// by index, so it never shows up among its own recommendations even when
/// another entry outscores its self-similarity.
pub fn recommend(
    context: &RecommenderContext,
    title: &str,
    k: usize,
) -> AppResult<Vec<CatalogEntry>> {
    let catalog = context.catalog();

    let query = catalog
        .find_by_title(title)
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' is not in the catalog", title)))?;

    let required = k.saturating_add(1);
    if catalog.len() < required {
        return Err(AppError::InsufficientCatalog {
            required,
            available: catalog.len(),
        });
    }

    let row = context.similarity().row(query.internal_index).ok_or_else(|| {
        AppError::Internal(format!(
            "No similarity row for catalog index {}",
            query.internal_index
        ))
    })?;

    let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
    // sort_by is stable: ties stay in catalog order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let recommendations: Vec<CatalogEntry> = ranked
        .into_iter()
        .filter(|(index, _)| *index != query.internal_index)
        .take(k)
        .filter_map(|(index, _)| catalog.get(index).cloned())
        .collect();

    tracing::debug!(
        title = %title,
        internal_index = query.internal_index,
        results = recommendations.len(),
        "Similarity lookup completed"
    );

    Ok(recommendations)
}

/// Recommends `k` movies similar to `title`, decorated with display metadata
///
/// Lookup errors propagate; metadata failures only degrade the affected
/// entries. Results come back in similarity rank order.
pub async fn get_recommendations(
    context: &RecommenderContext,
    enricher: &MetadataEnricher,
    title: &str,
    k: usize,
) -> AppResult<Vec<RecommendationResult>> {
    let entries = recommend(context, title, k)?;

    let movie_ids = entries.iter().map(|entry| entry.external_id).collect();
    let records = enricher.fetch_details_batch(movie_ids).await;

    Ok(entries
        .into_iter()
        .zip(records)
        .map(|(entry, record)| RecommendationResult::new(entry.title, record))
        .collect())
}
