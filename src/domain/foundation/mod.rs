//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! a ranking run: impact directions, weights and the error taxonomy.

mod errors;
mod impact;
mod weights;

pub use errors::{TopsisError, ValidationError};
pub use impact::{Impact, ImpactVector};
pub use weights::WeightVector;
