//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! This module contains stateless functions that operate on domain objects
//! to score and rank alternatives against weighted, directional criteria.
//!
//! # Components
//!
//! - `LabeledTable` - Raw record set; source of the numeric sub-matrix
//! - `DecisionMatrix` - Alternatives x criteria numeric table
//! - `MatrixNormalizer` - Column-wise vector normalization
//! - `WeightingStage` - Per-criterion weights
//! - `IdealPointResolver` - Ideal-best and ideal-worst points per impact direction
//! - `DistanceScoreEngine` - Euclidean separation and closeness coefficient
//! - `Ranker` - Score to rank conversion with an explicit tie policy
//! - `ResultAssembler` - Scores and ranks merged back onto the records
//! - `TopsisAnalyzer` - The full pipeline
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return new values. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod decision_matrix;
mod ideal_point;
mod labeled_table;
mod normalizer;
mod ranker;
mod result_assembler;
mod scoring;
mod topsis_analyzer;
mod weighting;

// Re-export all public types
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use ideal_point::{IdealPointResolver, IdealPoints};
pub use labeled_table::LabeledTable;
pub use normalizer::MatrixNormalizer;
pub use ranker::{Ranker, RankingPolicy};
pub use result_assembler::{ChartBar, OutputColumns, RankedRow, RankedTable, ResultAssembler};
pub use scoring::{euclidean, Closeness, DistanceScoreEngine};
pub use topsis_analyzer::{AlternativeScore, TopsisAnalyzer, TopsisOutcome};
pub use weighting::WeightingStage;
