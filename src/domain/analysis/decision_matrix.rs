//! Decision Matrix - Alternatives x criteria numeric table for TOPSIS.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Numeric matrix of alternatives (rows) by criteria (columns).
///
/// Construction guarantees at least one alternative and one criterion,
/// a rectangular shape and finite values. Every pipeline stage returns a
/// new matrix with the same labels instead of mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Ordered alternative labels, one per row.
    alternatives: Vec<String>,
    /// Ordered criterion names, one per column.
    criteria: Vec<String>,
    /// Row-major values.
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a validated matrix.
    pub fn try_new(
        alternatives: Vec<String>,
        criteria: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, ValidationError> {
        if alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives"));
        }
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if values.len() != alternatives.len() {
            return Err(ValidationError::invalid_format(
                "values",
                format!(
                    "{} rows of values for {} alternatives",
                    values.len(),
                    alternatives.len()
                ),
            ));
        }

        for (row, (label, cells)) in alternatives.iter().zip(&values).enumerate() {
            if cells.len() != criteria.len() {
                return Err(ValidationError::ragged_row(
                    row,
                    label.clone(),
                    criteria.len(),
                    cells.len(),
                ));
            }
            if let Some(col) = cells.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::invalid_cell(
                    row,
                    label.clone(),
                    criteria[col].clone(),
                    "value is not finite",
                ));
            }
        }

        Ok(Self {
            alternatives,
            criteria,
            values,
        })
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns a matrix with the same labels and new values.
    ///
    /// Callers must preserve the shape; stages derive `values` from `self`.
    pub(crate) fn with_values(&self, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(values.len(), self.alternatives.len());
        Self {
            alternatives: self.alternatives.clone(),
            criteria: self.criteria.clone(),
            values,
        }
    }

    /// Number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Alternative labels in row order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// A single value, if present.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterates the values of column `col` in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(move |row| row.get(col).copied())
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends an alternative and its row of values.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(label.into());
        self.values.push(values);
        self
    }

    /// Builds and validates the matrix.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        DecisionMatrix::try_new(self.alternatives, self.criteria, self.values)
    }
}
