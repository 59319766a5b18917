//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while constructing value objects and tables from raw input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Row {row} ('{label}') has {actual} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row {row} ('{label}'), criterion '{criterion}': {reason}")]
    InvalidCell {
        row: usize,
        label: String,
        criterion: String,
        reason: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a ragged row validation error.
    pub fn ragged_row(row: usize, label: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::RaggedRow {
            row,
            label: label.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid cell validation error.
    pub fn invalid_cell(
        row: usize,
        label: impl Into<String>,
        criterion: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidCell {
            row,
            label: label.into(),
            criterion: criterion.into(),
            reason: reason.into(),
        }
    }
}

/// Failures of a TOPSIS ranking run.
///
/// Each variant identifies the criterion or row that triggered it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("{vector} has {actual} entries but the matrix has {expected} criteria")]
    DimensionMismatch {
        vector: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Impact at position {position} is '{token}', expected '+' or '-'")]
    InvalidImpactToken { position: usize, token: String },

    #[error("Criterion {index} ('{criterion}') has zero norm and cannot be normalized")]
    DegenerateCriterion { index: usize, criterion: String },

    #[error(
        "Alternative {row} ('{label}') coincides with both ideal points; closeness is undefined"
    )]
    DegenerateScore { row: usize, label: String },

    #[error("Alternative {row} ('{label}') has distances too large to score")]
    NonFiniteScore { row: usize, label: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TopsisError {
    /// Creates a dimension mismatch error for the named input vector.
    pub fn dimension_mismatch(vector: &'static str, expected: usize, actual: usize) -> Self {
        TopsisError::DimensionMismatch {
            vector,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_names_vector_and_counts() {
        let err = TopsisError::dimension_mismatch("weights", 2, 3);
        assert_eq!(
            format!("{}", err),
            "weights has 3 entries but the matrix has 2 criteria"
        );
    }

    #[test]
    fn degenerate_criterion_names_column() {
        let err = TopsisError::DegenerateCriterion {
            index: 1,
            criterion: "ROUGE Score".to_string(),
        };
        assert!(format!("{}", err).contains("'ROUGE Score'"));
    }

    #[test]
    fn degenerate_score_names_row() {
        let err = TopsisError::DegenerateScore {
            row: 0,
            label: "GPT-3".to_string(),
        };
        assert!(format!("{}", err).starts_with("Alternative 0 ('GPT-3')"));
    }

    #[test]
    fn validation_error_converts_into_topsis_error() {
        let err: TopsisError = ValidationError::empty_field("impacts").into();
        assert!(matches!(err, TopsisError::Validation(_)));
        assert_eq!(format!("{}", err), "Field 'impacts' cannot be empty");
    }

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("weights");
        assert_eq!(format!("{}", err), "Field 'weights' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("weights[2]", "'abc' is not a number");
        assert_eq!(
            format!("{}", err),
            "Field 'weights[2]' has invalid format: 'abc' is not a number"
        );
    }

    #[test]
    fn validation_error_ragged_row_names_row() {
        let err = ValidationError::ragged_row(3, "BART", 6, 5);
        assert_eq!(format!("{}", err), "Row 3 ('BART') has 5 fields, expected 6");
    }

    #[test]
    fn validation_error_invalid_cell_names_row_and_criterion() {
        let err = ValidationError::invalid_cell(1, "GPT-2", "BLEU Score", "value is missing");
        assert_eq!(
            format!("{}", err),
            "Row 1 ('GPT-2'), criterion 'BLEU Score': value is missing"
        );
    }
}
