//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the ranking core and the outside world. Adapters implement these ports.
//!
//! - `DatasetReader` - Loads the labeled input table
//! - `ResultWriter` - Persists the ranked table
//! - `ChartRenderer` - Draws the score bar chart

mod chart_renderer;
mod dataset_reader;
mod result_writer;
mod table_format;

pub use chart_renderer::{ChartError, ChartRenderer};
pub use dataset_reader::DatasetReader;
pub use result_writer::ResultWriter;
pub use table_format::{DatasetError, TableFormat};
