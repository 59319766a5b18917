//! Ranking configuration

use serde::Deserialize;

use crate::domain::analysis::RankingPolicy;

/// Ranking configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RankingConfig {
    /// How equal scores are ranked (`ordinal` or `dense`)
    #[serde(default)]
    pub ties: RankingPolicy,
}
