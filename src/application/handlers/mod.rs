//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod rank_dataset;

pub use rank_dataset::{RankDatasetCommand, RankDatasetHandler, RankDatasetResult, RankError};
