//! JSON Result Writer - Implementation of ResultWriter for `.json` files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::analysis::RankedTable;
use crate::ports::{DatasetError, ResultWriter, TableFormat};

/// Writes the ranked table as a pretty-printed JSON document.
///
/// ```text
/// { "headers": [...], "rows": [{ "fields": [...], "score": 0.68, "rank": 2 }] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonResultWriter;

impl JsonResultWriter {
    /// Creates a new JSON writer.
    pub fn new() -> Self {
        Self
    }
}

impl ResultWriter for JsonResultWriter {
    fn write(&self, path: &Path, table: &RankedTable) -> Result<(), DatasetError> {
        let file = File::create(path).map_err(|e| DatasetError::io(path, e.to_string()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, table)
            .map_err(|e| DatasetError::io(path, e.to_string()))?;
        writer
            .flush()
            .map_err(|e| DatasetError::io(path, e.to_string()))
    }

    fn format(&self) -> TableFormat {
        TableFormat::Json
    }
}
