pub mod artifacts;
pub mod catalog;
pub mod similarity;

pub use artifacts::load_context;
pub use catalog::CatalogStore;
pub use similarity::SimilarityIndex;

use crate::error::{AppError, AppResult};

/// Catalog and similarity matrix, loaded together and shared read-only
///
/// The only way to build one is through [`RecommenderContext::new`], which
/// checks that entry `i` of the catalog is row `i` of the matrix.
#[derive(Debug, Clone)]
pub struct RecommenderContext {
    catalog: CatalogStore,
    similarity: SimilarityIndex,
}

impl RecommenderContext {
    pub fn new(catalog: CatalogStore, similarity: SimilarityIndex) -> AppResult<Self> {
        if catalog.len() != similarity.size() {
            return Err(AppError::InvalidArtifact(format!(
                "catalog has {} entries but similarity matrix is {}x{}",
                catalog.len(),
                similarity.size(),
                similarity.size()
            )));
        }

        Ok(Self {
            catalog,
            similarity,
        })
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityIndex {
        &self.similarity
    }
}
