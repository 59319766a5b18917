//! Ranker - Converts closeness scores into ranks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How equal scores are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPolicy {
    /// Ranks are a permutation of 1..=n. Equal scores are ordered by row
    /// index, lower index first.
    #[default]
    Ordinal,
    /// Equal scores share a rank and the next distinct score takes the next
    /// integer (1, 1, 2).
    Dense,
}

impl fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingPolicy::Ordinal => write!(f, "ordinal"),
            RankingPolicy::Dense => write!(f, "dense"),
        }
    }
}

impl FromStr for RankingPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ordinal" => Ok(RankingPolicy::Ordinal),
            "dense" => Ok(RankingPolicy::Dense),
            other => Err(ValidationError::invalid_format(
                "ties",
                format!("'{}' is not one of: ordinal, dense", other),
            )),
        }
    }
}

/// Ranking functions.
pub struct Ranker;

impl Ranker {
    /// Assigns a rank to every score; rank 1 is the highest score.
    ///
    /// The returned vector is aligned with `scores` by row index.
    /// Score equality is exact `f64` equality.
    pub fn rank(scores: &[f64], policy: RankingPolicy) -> Vec<usize> {
        let order = Self::order_by_score(scores);
        let mut ranks = vec![0; scores.len()];

        match policy {
            RankingPolicy::Ordinal => {
                for (position, &row) in order.iter().enumerate() {
                    ranks[row] = position + 1;
                }
            }
            RankingPolicy::Dense => {
                let mut current = 0;
                let mut previous: Option<f64> = None;
                for &row in &order {
                    if previous != Some(scores[row]) {
                        current += 1;
                        previous = Some(scores[row]);
                    }
                    ranks[row] = current;
                }
            }
        }

        ranks
    }

    /// Row indices sorted by score descending.
    ///
    /// The sort is stable, so equal scores keep their original row order.
    pub fn order_by_score(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        order
    }
}
