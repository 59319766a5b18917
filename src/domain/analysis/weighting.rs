//! Weighting Stage - Scales normalized criterion columns by their weights.

use tracing::warn;

use super::DecisionMatrix;
use crate::domain::foundation::{TopsisError, WeightVector};

/// Applies per-criterion weights to a normalized matrix.
pub struct WeightingStage;

impl WeightingStage {
    /// Multiplies column `j` by `weights[j]`.
    ///
    /// Non-positive weights invert or cancel a criterion; they are logged as
    /// usage warnings and applied as given.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the weight count differs from the criteria count.
    pub fn apply(
        normalized: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<DecisionMatrix, TopsisError> {
        Self::check_dimensions(normalized, weights)?;

        for index in weights.non_positive() {
            warn!(
                criterion = %normalized.criteria()[index],
                weight = weights.as_slice()[index],
                "Non-positive weight inverts or cancels this criterion"
            );
        }

        let values = normalized
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(v, w)| v * w)
                    .collect()
            })
            .collect();

        Ok(normalized.with_values(values))
    }

    /// Verifies one weight per criterion.
    pub fn check_dimensions(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<(), TopsisError> {
        if weights.len() != matrix.criterion_count() {
            return Err(TopsisError::dimension_mismatch(
                "weights",
                matrix.criterion_count(),
                weights.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("A", vec![0.6, 0.5])
            .alternative("B", vec![0.8, 0.5])
            .build()
            .unwrap()
    }

    #[test]
    fn multiplies_columns_by_weights() {
        let weights = WeightVector::parse("2,0.5").unwrap();
        let weighted = WeightingStage::apply(&matrix(), &weights).unwrap();

        assert_eq!(weighted.value(0, 0), Some(1.2));
        assert_eq!(weighted.value(1, 0), Some(1.6));
        assert_eq!(weighted.value(0, 1), Some(0.25));
    }

    #[test]
    fn rejects_too_many_weights() {
        let weights = WeightVector::parse("1,1,1").unwrap();
        let err = WeightingStage::apply(&matrix(), &weights).unwrap_err();
        assert_eq!(err, TopsisError::dimension_mismatch("weights", 2, 3));
    }

    #[test]
    fn rejects_too_few_weights() {
        let weights = WeightVector::parse("1").unwrap();
        assert!(WeightingStage::check_dimensions(&matrix(), &weights).is_err());
    }

    #[test]
    fn zero_weight_is_applied_not_rejected() {
        let weights = WeightVector::parse("1,0").unwrap();
        let weighted = WeightingStage::apply(&matrix(), &weights).unwrap();
        assert_eq!(weighted.value(0, 1), Some(0.0));
        assert_eq!(weighted.value(1, 1), Some(0.0));
    }
}
