//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the ranking core to files on disk:
//! - `table` - CSV and XLSX readers, CSV, JSON and XLSX result writers
//! - `chart` - SVG bar chart renderer
//! - `sample` - Text generation models sample dataset

pub mod chart;
pub mod sample;
pub mod table;

pub use chart::SvgBarChartRenderer;
pub use table::{
    reader_for, writer_for, CsvDatasetReader, CsvResultWriter, JsonResultWriter,
    XlsxDatasetReader, XlsxResultWriter,
};
