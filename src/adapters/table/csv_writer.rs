//! CSV Result Writer - Implementation of ResultWriter for `.csv` files.

use std::path::Path;

use crate::domain::analysis::RankedTable;
use crate::ports::{DatasetError, ResultWriter, TableFormat};

/// Writes the ranked table as comma-separated values with a header row.
#[derive(Debug, Clone, Default)]
pub struct CsvResultWriter;

impl CsvResultWriter {
    /// Creates a new CSV writer.
    pub fn new() -> Self {
        Self
    }
}

impl ResultWriter for CsvResultWriter {
    fn write(&self, path: &Path, table: &RankedTable) -> Result<(), DatasetError> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| DatasetError::io(path, e.to_string()))?;

        writer
            .write_record(&table.headers)
            .map_err(|e| DatasetError::io(path, e.to_string()))?;

        for row in &table.rows {
            writer
                .write_record(row.to_record())
                .map_err(|e| DatasetError::io(path, e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| DatasetError::io(path, e.to_string()))
    }

    fn format(&self) -> TableFormat {
        TableFormat::Csv
    }
}
