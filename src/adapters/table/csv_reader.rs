//! CSV Dataset Reader - Implementation of DatasetReader for `.csv` files.

use std::path::Path;
use tracing::debug;

use crate::domain::analysis::LabeledTable;
use crate::ports::{DatasetError, DatasetReader, TableFormat};

/// Reads comma-separated files with a header row.
///
/// Records of unequal length are passed through so the domain can report
/// the offending row by label.
#[derive(Debug, Clone, Default)]
pub struct CsvDatasetReader;

impl CsvDatasetReader {
    /// Creates a new CSV reader.
    pub fn new() -> Self {
        Self
    }
}

impl DatasetReader for CsvDatasetReader {
    fn read(&self, path: &Path) -> Result<LabeledTable, DatasetError> {
        if !path.is_file() {
            return Err(DatasetError::not_found(path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DatasetError::io(path, e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::malformed(path, e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| DatasetError::malformed(path, e.to_string()))
            })
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        debug!(path = %path.display(), rows = rows.len(), "Loaded CSV dataset");

        Ok(LabeledTable::new(headers, rows))
    }

    fn format(&self) -> TableFormat {
        TableFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_headers_and_rows_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "models.csv",
            "Model Name,BLEU Score,ROUGE Score\nGPT-3,85.3,88.1\nGPT-2,72.4,75.6\n",
        );

        let table = CsvDatasetReader::new().read(&path).unwrap();

        assert_eq!(table.headers, vec!["Model Name", "BLEU Score", "ROUGE Score"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["GPT-2", "72.4", "75.6"]);
    }

    #[test]
    fn quoted_labels_keep_commas() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "q.csv", "Model,Score\n\"T5, large\",1.5\n");

        let table = CsvDatasetReader::new().read(&path).unwrap();
        assert_eq!(table.label(0), Some("T5, large"));
    }

    #[test]
    fn ragged_rows_reach_domain_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ragged.csv", "Model,A,B\nX,1,2\nY,3\n");

        let table = CsvDatasetReader::new().read(&path).unwrap();
        assert_eq!(table.rows[1].len(), 2);
        assert!(table.to_decision_matrix().is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = CsvDatasetReader::new()
            .read(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }

    #[test]
    fn reports_csv_format() {
        assert_eq!(CsvDatasetReader::new().format(), TableFormat::Csv);
    }
}
