//! Ideal Point Resolver - Best and worst composite reference vectors.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;
use crate::domain::foundation::{Impact, ImpactVector, TopsisError};

/// Ideal-best and ideal-worst values, one per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Resolves ideal points from a weighted matrix and impact directions.
pub struct IdealPointResolver;

impl IdealPointResolver {
    /// Computes both ideal points.
    ///
    /// # Algorithm
    /// - Benefit: best = column max, worst = column min
    /// - Cost: best = column min, worst = column max
    ///
    /// # Errors
    /// - `DimensionMismatch` if the impact count differs from the criteria count.
    pub fn resolve(
        weighted: &DecisionMatrix,
        impacts: &ImpactVector,
    ) -> Result<IdealPoints, TopsisError> {
        Self::check_dimensions(weighted, impacts)?;

        let (best, worst) = impacts
            .iter()
            .enumerate()
            .map(|(col, impact)| {
                let (min, max) = Self::column_extremes(weighted, col);
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();

        Ok(IdealPoints { best, worst })
    }

    /// Verifies one impact per criterion.
    pub fn check_dimensions(
        matrix: &DecisionMatrix,
        impacts: &ImpactVector,
    ) -> Result<(), TopsisError> {
        if impacts.len() != matrix.criterion_count() {
            return Err(TopsisError::dimension_mismatch(
                "impacts",
                matrix.criterion_count(),
                impacts.len(),
            ));
        }
        Ok(())
    }

    /// Minimum and maximum of a column. Matrices are never empty.
    fn column_extremes(matrix: &DecisionMatrix, col: usize) -> (f64, f64) {
        matrix
            .column(col)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            })
    }
}
