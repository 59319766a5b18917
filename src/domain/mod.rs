//! Domain layer containing the ranking logic and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (impacts, weights, errors)
//! - `analysis` - Pure TOPSIS pipeline (normalize, weight, ideal points, score, rank)

pub mod analysis;
pub mod foundation;
