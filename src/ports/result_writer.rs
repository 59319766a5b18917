//! Result Writer Port - Persists a ranked table.

use std::path::Path;

use super::{DatasetError, TableFormat};
use crate::domain::analysis::RankedTable;

/// Port for writing ranking results.
///
/// # Contract
///
/// Implementations must:
/// - Write every input field unchanged, followed by score and rank
/// - Keep the row order of the given table
/// - Write scores without losing precision
pub trait ResultWriter: Send + Sync {
    /// Writes `table` to `path`, replacing any existing file.
    fn write(&self, path: &Path, table: &RankedTable) -> Result<(), DatasetError>;

    /// The format this writer produces.
    fn format(&self) -> TableFormat;
}
