//! Matrix Normalizer - Vector normalization of criterion columns.

use super::DecisionMatrix;
use crate::domain::foundation::TopsisError;

/// Column-wise vector normalization.
pub struct MatrixNormalizer;

impl MatrixNormalizer {
    /// Euclidean norm of every column.
    ///
    /// Accumulates with `hypot` so large raw values do not overflow.
    pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
        (0..matrix.criterion_count())
            .map(|col| matrix.column(col).fold(0.0_f64, f64::hypot))
            .collect()
    }

    /// Divides every column by its Euclidean norm.
    ///
    /// # Errors
    /// - `DegenerateCriterion` if a column is entirely zero.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<DecisionMatrix, TopsisError> {
        let norms = Self::column_norms(matrix);

        if let Some(index) = norms.iter().position(|n| *n == 0.0) {
            return Err(TopsisError::DegenerateCriterion {
                index,
                criterion: matrix.criteria()[index].clone(),
            });
        }

        let values = matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&norms).map(|(v, n)| v / n).collect())
            .collect();

        Ok(matrix.with_values(values))
    }
}
