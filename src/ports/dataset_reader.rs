//! Dataset Reader Port - Loads a labeled table from a tabular source.
//!
//! The domain depends on this trait, while adapters (like CsvDatasetReader)
//! provide the implementation.

use std::path::Path;

use super::{DatasetError, TableFormat};
use crate::domain::analysis::LabeledTable;

/// Port for loading the raw record set of a ranking run.
///
/// # Contract
///
/// Implementations must:
/// - Return the header row and every record with cell text unchanged
/// - Report a missing file as `DatasetError::NotFound`
/// - Leave numeric validation to `LabeledTable::to_decision_matrix`
///
/// # Usage
///
/// ```rust,ignore
/// let reader: &dyn DatasetReader = get_reader();
/// let table = reader.read(Path::new("text_generation_models.csv"))?;
/// let matrix = table.to_decision_matrix()?;
/// ```
pub trait DatasetReader: Send + Sync {
    /// Reads the table at `path`.
    fn read(&self, path: &Path) -> Result<LabeledTable, DatasetError>;

    /// The format this reader handles.
    fn format(&self) -> TableFormat;
}
