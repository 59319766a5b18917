//! TOPSIS Rank - Multi-criteria ranking of alternatives
//!
//! This crate ranks the rows of a tabular dataset (for example, text
//! generation models scored on BLEU, ROUGE and similar metrics) with TOPSIS:
//! closeness to an ideal best and distance from an ideal worst alternative.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
