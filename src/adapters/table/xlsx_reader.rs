//! XLSX Dataset Reader - Implementation of DatasetReader for `.xlsx` workbooks.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::debug;

use crate::domain::analysis::LabeledTable;
use crate::ports::{DatasetError, DatasetReader, TableFormat};

/// Reads the first worksheet of a workbook; its first row is the header.
///
/// Numeric cells are rendered back to text so the domain parses them the
/// same way as CSV input. Fully blank rows are skipped.
#[derive(Debug, Clone, Default)]
pub struct XlsxDatasetReader;

impl XlsxDatasetReader {
    /// Creates a new XLSX reader.
    pub fn new() -> Self {
        Self
    }
}

impl DatasetReader for XlsxDatasetReader {
    fn read(&self, path: &Path) -> Result<LabeledTable, DatasetError> {
        if !path.is_file() {
            return Err(DatasetError::not_found(path));
        }

        let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
            open_workbook(path).map_err(|e: calamine::XlsxError| DatasetError::malformed(path, e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DatasetError::malformed(path, "workbook has no worksheets"))?
            .map_err(|e| DatasetError::malformed(path, e.to_string()))?;

        let mut rows = range
            .rows()
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());

        let headers = rows
            .next()
            .ok_or_else(|| DatasetError::malformed(path, "worksheet is empty"))?;
        let rows: Vec<Vec<String>> = rows.collect();

        debug!(path = %path.display(), rows = rows.len(), "Loaded XLSX dataset");

        Ok(LabeledTable::new(headers, rows))
    }

    fn format(&self) -> TableFormat {
        TableFormat::Xlsx
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn write_workbook(path: &Path, rows: &[&[&str]]) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let written = match cell.parse::<f64>() {
                    Ok(n) if r > 0 && c > 0 => sheet.write_number(r as u32, c as u16, n),
                    _ => sheet.write_string(r as u32, c as u16, *cell),
                };
                written.unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn reads_first_sheet_with_numeric_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.xlsx");
        write_workbook(
            &path,
            &[
                &["Model Name", "BLEU Score", "ROUGE Score"],
                &["GPT-3", "85.3", "88.1"],
                &["GPT-2", "72.4", "75.6"],
            ],
        );

        let table = XlsxDatasetReader::new().read(&path).unwrap();

        assert_eq!(table.headers, vec!["Model Name", "BLEU Score", "ROUGE Score"]);
        assert_eq!(table.rows[1], vec!["GPT-2", "72.4", "75.6"]);
        let matrix = table.to_decision_matrix().unwrap();
        assert_eq!(matrix.value(0, 1), Some(88.1));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = XlsxDatasetReader::new()
            .read(&dir.path().join("absent.xlsx"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }

    #[test]
    fn non_workbook_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.xlsx");
        std::fs::write(&path, "Model,A\nX,1\n").unwrap();

        let err = XlsxDatasetReader::new().read(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }
}
