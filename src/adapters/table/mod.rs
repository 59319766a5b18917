//! Table adapters - Readers and writers for tabular files.
//!
//! - `CsvDatasetReader` - Loads `.csv` datasets
//! - `XlsxDatasetReader` - Loads the first sheet of `.xlsx` workbooks
//! - `CsvResultWriter` - Writes ranked results as `.csv`
//! - `JsonResultWriter` - Writes ranked results as `.json`
//! - `XlsxResultWriter` - Writes ranked results as `.xlsx`

mod csv_reader;
mod csv_writer;
mod json_writer;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_reader::CsvDatasetReader;
pub use csv_writer::CsvResultWriter;
pub use json_writer::JsonResultWriter;
pub use xlsx_reader::XlsxDatasetReader;
pub use xlsx_writer::XlsxResultWriter;

use crate::ports::{DatasetError, DatasetReader, ResultWriter, TableFormat};

/// Selects a reader for the given input format.
pub fn reader_for(format: TableFormat) -> Result<Box<dyn DatasetReader>, DatasetError> {
    match format {
        TableFormat::Csv => Ok(Box::new(CsvDatasetReader::new())),
        TableFormat::Xlsx => Ok(Box::new(XlsxDatasetReader::new())),
        TableFormat::Json => Err(DatasetError::UnsupportedFormat(
            "json input (supported: csv, xlsx)".to_string(),
        )),
    }
}

/// Selects a writer for the given output format.
pub fn writer_for(format: TableFormat) -> Result<Box<dyn ResultWriter>, DatasetError> {
    match format {
        TableFormat::Csv => Ok(Box::new(CsvResultWriter::new())),
        TableFormat::Json => Ok(Box::new(JsonResultWriter::new())),
        TableFormat::Xlsx => Ok(Box::new(XlsxResultWriter::new())),
    }
}
