//! Result Assembler - Attaches scores and ranks to the original records.

use serde::{Deserialize, Serialize};

use super::LabeledTable;
use crate::domain::foundation::{TopsisError, ValidationError};

/// Names of the two appended output columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumns {
    pub score: String,
    pub rank: String,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            score: "Topsis Score".to_string(),
            rank: "Rank".to_string(),
        }
    }
}

/// One input record with its score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Original cell text, unchanged.
    pub fields: Vec<String>,
    pub score: f64,
    pub rank: usize,
}

impl RankedRow {
    /// Alternative label (first field).
    pub fn label(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// All fields as text, score and rank last.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = self.fields.clone();
        record.push(self.score.to_string());
        record.push(self.rank.to_string());
        record
    }
}

/// A bar of the ranking chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub score: f64,
}

/// The input record set plus score and rank columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    /// Input headers followed by the score and rank column names.
    pub headers: Vec<String>,
    pub rows: Vec<RankedRow>,
}

impl RankedTable {
    /// A copy ordered by rank; equal ranks keep row order.
    pub fn sorted_by_rank(&self) -> RankedTable {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|r| r.rank);
        RankedTable {
            headers: self.headers.clone(),
            rows,
        }
    }

    /// (label, score) pairs in the current row order.
    pub fn chart_bars(&self) -> Vec<ChartBar> {
        self.rows
            .iter()
            .map(|r| ChartBar {
                label: r.label().to_string(),
                score: r.score,
            })
            .collect()
    }
}

/// Assembles ranked output tables.
pub struct ResultAssembler;

impl ResultAssembler {
    /// Merges scores and ranks onto `table` in original row order.
    ///
    /// # Errors
    /// - `DimensionMismatch` if scores or ranks are not aligned with the rows.
    /// - `Validation` if an output column name already exists in the input.
    pub fn assemble(
        table: &LabeledTable,
        scores: &[f64],
        ranks: &[usize],
        columns: &OutputColumns,
    ) -> Result<RankedTable, TopsisError> {
        if scores.len() != table.len() {
            return Err(TopsisError::dimension_mismatch("scores", table.len(), scores.len()));
        }
        if ranks.len() != table.len() {
            return Err(TopsisError::dimension_mismatch("ranks", table.len(), ranks.len()));
        }

        for name in [&columns.score, &columns.rank] {
            if table.headers.iter().any(|h| h == name) {
                return Err(ValidationError::invalid_format(
                    name.clone(),
                    "output column already present in input",
                )
                .into());
            }
        }

        let mut headers = table.headers.clone();
        headers.push(columns.score.clone());
        headers.push(columns.rank.clone());

        let rows = table
            .rows
            .iter()
            .zip(scores.iter().zip(ranks))
            .map(|(fields, (&score, &rank))| RankedRow {
                fields: fields.clone(),
                score,
                rank,
            })
            .collect();

        Ok(RankedTable { headers, rows })
    }
}
