//! Output configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::OutputColumns;

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Header of the appended score column
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_column")]
    pub rank_column: String,

    /// Write rows in rank order instead of input order
    #[serde(default)]
    pub sort_by_rank: bool,

    /// Title drawn above the ranking chart
    #[serde(default = "default_chart_title")]
    pub chart_title: String,
}

impl OutputConfig {
    /// Names of the appended output columns
    pub fn columns(&self) -> OutputColumns {
        OutputColumns {
            score: self.score_column.clone(),
            rank: self.rank_column.clone(),
        }
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("output.score_column"));
        }
        if self.rank_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("output.rank_column"));
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateOutputColumn(
                self.score_column.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            score_column: default_score_column(),
            rank_column: default_rank_column(),
            sort_by_rank: false,
            chart_title: default_chart_title(),
        }
    }
}

fn default_score_column() -> String {
    "Topsis Score".to_string()
}

fn default_rank_column() -> String {
    "Rank".to_string()
}

fn default_chart_title() -> String {
    "TOPSIS Ranking of Text Generation Models".to_string()
}
