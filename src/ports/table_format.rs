//! Table formats and the errors shared by the tabular I/O ports.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Tabular file formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// Comma-separated values.
    Csv,
    /// JSON document (output only).
    Json,
    /// Excel workbook. Input reads the first worksheet.
    Xlsx,
}

impl TableFormat {
    /// Detects the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DatasetError::UnsupportedFormat(path.display().to_string()))?;
        extension.parse()
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Json => "json",
            TableFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for TableFormat {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            "xlsx" => Ok(TableFormat::Xlsx),
            _ => Err(DatasetError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors from reading datasets or writing results.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Input file does not exist.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Format is not handled by the chosen adapter.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// File could not be opened, read or written.
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// File content could not be parsed.
    #[error("Malformed table in {path}: {message}")]
    Malformed { path: String, message: String },
}

impl DatasetError {
    /// Creates a not found error.
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.display().to_string(),
        }
    }

    /// Creates an IO error.
    pub fn io(path: &Path, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Creates a malformed content error.
    pub fn malformed(path: &Path, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}
