//! Labeled Table - The raw record set as loaded from a tabular source.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;
use crate::domain::foundation::ValidationError;

/// Text records with a header row.
///
/// Column 0 holds the alternative label, columns 1.. hold criteria. Cell text
/// is kept verbatim so results can be written back exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LabeledTable {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Headers of the criteria columns.
    pub fn criteria_headers(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Label of the record at `row`.
    pub fn label(&self, row: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.first())
            .map(String::as_str)
    }

    /// Extracts the numeric criteria sub-matrix.
    ///
    /// Every criteria cell must parse as a finite `f64`; missing values are
    /// rejected, not imputed.
    pub fn to_decision_matrix(&self) -> Result<DecisionMatrix, ValidationError> {
        if self.headers.len() < 2 {
            return Err(ValidationError::invalid_format(
                "headers",
                "expected a label column followed by at least one criterion column",
            ));
        }
        if self.rows.is_empty() {
            return Err(ValidationError::empty_field("rows"));
        }

        let criteria = self.criteria_headers().to_vec();
        let mut alternatives = Vec::with_capacity(self.rows.len());
        let mut values = Vec::with_capacity(self.rows.len());

        for (row, record) in self.rows.iter().enumerate() {
            let label = record.first().cloned().unwrap_or_default();
            if record.len() != self.headers.len() {
                return Err(ValidationError::ragged_row(
                    row,
                    label,
                    self.headers.len(),
                    record.len(),
                ));
            }

            let parsed = record[1..]
                .iter()
                .zip(&criteria)
                .map(|(cell, criterion)| Self::parse_cell(row, &label, criterion, cell))
                .collect::<Result<Vec<_>, _>>()?;

            alternatives.push(label);
            values.push(parsed);
        }

        DecisionMatrix::try_new(alternatives, criteria, values)
    }

    fn parse_cell(
        row: usize,
        label: &str,
        criterion: &str,
        cell: &str,
    ) -> Result<f64, ValidationError> {
        let text = cell.trim();
        if text.is_empty() {
            return Err(ValidationError::invalid_cell(
                row,
                label,
                criterion,
                "value is missing",
            ));
        }

        let value: f64 = text.parse().map_err(|_| {
            ValidationError::invalid_cell(
                row,
                label,
                criterion,
                format!("'{}' is not a number", text),
            )
        })?;

        if !value.is_finite() {
            return Err(ValidationError::invalid_cell(
                row,
                label,
                criterion,
                "value is not finite",
            ));
        }
        Ok(value)
    }
}
