use crate::error::{AppError, AppResult};

/// Precomputed N×N similarity scores, stored row-major
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityIndex {
    /// Builds the index from matrix rows
    ///
    /// Rejects non-square input and non-finite scores so that ranking never
    /// has to reason about NaN.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AppError::InvalidArtifact(format!(
                    "similarity row {} has {} scores, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            if let Some(j) = row.iter().position(|score| !score.is_finite()) {
                return Err(AppError::InvalidArtifact(format!(
                    "similarity score at ({}, {}) is not finite",
                    i, j
                )));
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scores of every entry relative to `index`, self score included
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}
