//! TOPSIS Analyzer - Runs the full scoring pipeline on a decision matrix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    DecisionMatrix, DistanceScoreEngine, IdealPointResolver, IdealPoints, MatrixNormalizer,
    Ranker, RankingPolicy, WeightingStage,
};
use crate::domain::foundation::{ImpactVector, TopsisError, WeightVector};

/// Score and rank of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub label: String,
    pub distance_to_best: f64,
    pub distance_to_worst: f64,
    pub score: f64,
    pub rank: usize,
}

/// Result of a ranking run, aligned with the input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    pub alternatives: Vec<AlternativeScore>,
    pub ideal: IdealPoints,
    pub policy: RankingPolicy,
}

impl TopsisOutcome {
    /// Scores in row order.
    pub fn scores(&self) -> Vec<f64> {
        self.alternatives.iter().map(|a| a.score).collect()
    }

    /// Ranks in row order.
    pub fn ranks(&self) -> Vec<usize> {
        self.alternatives.iter().map(|a| a.rank).collect()
    }

    /// The first alternative holding rank 1.
    pub fn best(&self) -> Option<&AlternativeScore> {
        self.alternatives.iter().find(|a| a.rank == 1)
    }
}

/// TOPSIS pipeline entry point.
///
/// # Pipeline
/// normalize -> weight -> ideal points -> distances and scores -> ranks
///
/// Every stage returns a new value; the input matrix is never modified.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Scores and ranks every alternative.
    ///
    /// Weight and impact counts are checked before any numeric work.
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
        policy: RankingPolicy,
    ) -> Result<TopsisOutcome, TopsisError> {
        WeightingStage::check_dimensions(matrix, weights)?;
        IdealPointResolver::check_dimensions(matrix, impacts)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            %weights,
            %impacts,
            "Running TOPSIS"
        );

        let normalized = MatrixNormalizer::normalize(matrix)?;
        let weighted = WeightingStage::apply(&normalized, weights)?;
        let ideal = IdealPointResolver::resolve(&weighted, impacts)?;
        debug!(best = ?ideal.best, worst = ?ideal.worst, "Resolved ideal points");

        let closeness = DistanceScoreEngine::score(&weighted, &ideal)?;
        let scores: Vec<f64> = closeness.iter().map(|c| c.score).collect();
        let ranks = Ranker::rank(&scores, policy);

        let alternatives = matrix
            .alternatives()
            .iter()
            .zip(closeness.iter().zip(&ranks))
            .map(|(label, (c, &rank))| AlternativeScore {
                label: label.clone(),
                distance_to_best: c.distance_to_best,
                distance_to_worst: c.distance_to_worst,
                score: c.score,
                rank,
            })
            .collect();

        Ok(TopsisOutcome {
            alternatives,
            ideal,
            policy,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    use crate::domain::foundation::{Impact, ImpactVector};

    fn arb_problem() -> impl Strategy<Value = (DecisionMatrix, WeightVector, ImpactVector)> {
        (2usize..8, 1usize..6).prop_flat_map(|(n, m)| {
            (
                proptest::collection::vec(proptest::collection::vec(0.5f64..100.0, m), n),
                proptest::collection::vec(
                    prop_oneof![1e-200f64..1e-190, 0.1f64..5.0, 1e190f64..1e200],
                    m,
                ),
                proptest::collection::vec(any::<bool>(), m),
            )
                .prop_map(move |(rows, weights, benefit)| {
                    let matrix = rows
                        .into_iter()
                        .enumerate()
                        .fold(
                            DecisionMatrix::builder()
                                .criteria((0..m).map(|j| format!("C{}", j)).collect::<Vec<String>>()),
                            |b, (i, row)| b.alternative(format!("A{}", i), row),
                        )
                        .build()
                        .unwrap();
                    let impacts = benefit
                        .into_iter()
                        .map(|b| if b { Impact::Benefit } else { Impact::Cost })
                        .collect();
                    (
                        matrix,
                        WeightVector::try_new(weights).unwrap(),
                        ImpactVector::new(impacts),
                    )
                })
        })
    }

    proptest! {
        /// Scores always fall in [0, 1]
        #[test]
        fn scores_are_bounded((matrix, weights, impacts) in arb_problem()) {
            match TopsisAnalyzer::analyze(&matrix, &weights, &impacts, RankingPolicy::Ordinal) {
                Ok(outcome) => {
                    for s in outcome.scores() {
                        prop_assert!((0.0..=1.0).contains(&s), "Score {} out of bounds", s);
                    }
                }
                Err(TopsisError::DegenerateScore { .. }) => {}
                Err(other) => prop_assert!(false, "Unexpected error: {}", other),
            }
        }

        /// Ordinal ranks are a permutation of 1..=n and the top score holds rank 1
        #[test]
        fn ordinal_ranks_form_permutation((matrix, weights, impacts) in arb_problem()) {
            if let Ok(outcome) = TopsisAnalyzer::analyze(&matrix, &weights, &impacts, RankingPolicy::Ordinal) {
                let mut ranks = outcome.ranks();
                ranks.sort_unstable();
                let expected: Vec<usize> = (1..=matrix.alternative_count()).collect();
                prop_assert_eq!(ranks, expected);

                let scores = outcome.scores();
                let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let best = outcome.best().unwrap();
                prop_assert_eq!(best.score, max);
            }
        }

        /// Rescaling a column by a positive constant leaves its normalized values unchanged
        #[test]
        fn normalization_is_scale_invariant(
            (matrix, _weights, _impacts) in arb_problem(),
            factor in 0.01f64..1000.0,
        ) {
            let scaled_rows: Vec<Vec<f64>> = matrix
                .rows()
                .iter()
                .map(|row| {
                    let mut row = row.clone();
                    row[0] *= factor;
                    row
                })
                .collect();
            let scaled = DecisionMatrix::try_new(
                matrix.alternatives().to_vec(),
                matrix.criteria().to_vec(),
                scaled_rows,
            )
            .unwrap();

            let a = MatrixNormalizer::normalize(&matrix).unwrap();
            let b = MatrixNormalizer::normalize(&scaled).unwrap();
            for (ra, rb) in a.rows().iter().zip(b.rows()) {
                for (x, y) in ra.iter().zip(rb) {
                    prop_assert!((x - y).abs() < 1e-9, "{} != {}", x, y);
                }
            }
        }
    }
}
