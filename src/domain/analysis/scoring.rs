//! Distance & Score Engine - Euclidean separation and closeness coefficient.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, IdealPoints};
use crate::domain::foundation::TopsisError;

/// Separation measures and closeness coefficient of one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Closeness {
    pub distance_to_best: f64,
    pub distance_to_worst: f64,
    /// `distance_to_worst / (distance_to_best + distance_to_worst)`, in [0, 1].
    pub score: f64,
}

/// Computes distances to both ideal points and the resulting scores.
pub struct DistanceScoreEngine;

impl DistanceScoreEngine {
    /// Scores every row of the weighted matrix.
    ///
    /// # Errors
    /// - `DimensionMismatch` if an ideal point has the wrong length.
    /// - `DegenerateScore` for the first row whose two distances are both zero.
    /// - `NonFiniteScore` for the first row whose distances overflow.
    pub fn score(
        weighted: &DecisionMatrix,
        ideal: &IdealPoints,
    ) -> Result<Vec<Closeness>, TopsisError> {
        let criteria = weighted.criterion_count();
        if ideal.best.len() != criteria {
            return Err(TopsisError::dimension_mismatch(
                "ideal_best",
                criteria,
                ideal.best.len(),
            ));
        }
        if ideal.worst.len() != criteria {
            return Err(TopsisError::dimension_mismatch(
                "ideal_worst",
                criteria,
                ideal.worst.len(),
            ));
        }

        weighted
            .rows()
            .iter()
            .enumerate()
            .map(|(row, values)| {
                let distance_to_best = euclidean(values, &ideal.best);
                let distance_to_worst = euclidean(values, &ideal.worst);
                let label = || weighted.alternatives()[row].clone();

                // Dividing through by the larger distance keeps the sum finite.
                let scale = distance_to_best.max(distance_to_worst);
                if scale == 0.0 {
                    return Err(TopsisError::DegenerateScore {
                        row,
                        label: label(),
                    });
                }
                let to_best = distance_to_best / scale;
                let to_worst = distance_to_worst / scale;
                let score = to_worst / (to_best + to_worst);

                if !score.is_finite() {
                    return Err(TopsisError::NonFiniteScore {
                        row,
                        label: label(),
                    });
                }

                Ok(Closeness {
                    distance_to_best,
                    distance_to_worst,
                    // Rounding can land a hair outside [0, 1].
                    score: score.clamp(0.0, 1.0),
                })
            })
            .collect()
    }
}

/// Euclidean distance between two equal-length vectors.
///
/// Accumulated with `hypot`, so very large or very small components
/// neither overflow nor underflow in the squares.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc.hypot(x - y))
}
