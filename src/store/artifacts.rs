use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::CatalogRecord,
    store::{CatalogStore, RecommenderContext, SimilarityIndex},
};

/// Loads the catalog and its similarity matrix from precomputed JSON artifacts
///
/// Catalog: `[{"movie_id": 19995, "title": "Avatar", ...}, ...]` in catalog order.
/// Similarity: `[[1.0, 0.12, ...], ...]`, one row per catalog entry.
pub fn load_context(
    catalog_path: impl AsRef<Path>,
    similarity_path: impl AsRef<Path>,
) -> AppResult<RecommenderContext> {
    let records: Vec<CatalogRecord> = read_json(catalog_path.as_ref())?;
    let rows: Vec<Vec<f32>> = read_json(similarity_path.as_ref())?;

    let catalog = CatalogStore::new(records);
    let similarity = SimilarityIndex::from_rows(rows)?;
    let context = RecommenderContext::new(catalog, similarity)?;

    tracing::info!(
        entries = context.catalog().len(),
        catalog = %catalog_path.as_ref().display(),
        similarity = %similarity_path.as_ref().display(),
        "Loaded recommendation artifacts"
    );

    Ok(context)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = File::open(path).map_err(|source| AppError::ArtifactIo {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| AppError::ArtifactParse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_artifacts() {
        let catalog = write_temp(
            r#"[
                {"movie_id": 19995, "title": "Avatar", "tags": "future"},
                {"movie_id": 285, "title": "Pirates of the Caribbean: At World's End"}
            ]"#,
        );
        let similarity = write_temp("[[1.0, 0.25], [0.25, 1.0]]");

        let context = load_context(catalog.path(), similarity.path()).unwrap();

        assert_eq!(context.catalog().len(), 2);
        assert_eq!(
            context.catalog().find_by_title("Avatar").unwrap().external_id,
            MovieId(19995)
        );
        assert_eq!(context.similarity().row(0).unwrap(), &[1.0f32, 0.25][..]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let similarity = write_temp("[]");
        let result = load_context("/nonexistent/movie_list.json", similarity.path());
        assert!(matches!(result, Err(AppError::ArtifactIo { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let catalog = write_temp(r#"[{"movie_id": "oops"}]"#);
        let similarity = write_temp("[[1.0]]");
        let result = load_context(catalog.path(), similarity.path());
        assert!(matches!(result, Err(AppError::ArtifactParse { .. })));
    }

    #[test]
    fn test_length_mismatch_is_invalid_artifact() {
        let catalog = write_temp(r#"[{"movie_id": 1, "title": "A"}]"#);
        let similarity = write_temp("[[1.0, 0.5], [0.5, 1.0]]");
        let result = load_context(catalog.path(), similarity.path());
        assert!(matches!(result, Err(AppError::InvalidArtifact(_))));
    }
}
