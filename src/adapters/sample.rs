//! Sample dataset - Benchmark scores of five text generation models.
//!
//! Used to try the ranking end to end without preparing a dataset.

use std::path::Path;
use tracing::info;

use crate::domain::analysis::LabeledTable;
use crate::ports::DatasetError;

/// Default file name for the generated dataset.
pub const SAMPLE_FILE_NAME: &str = "text_generation_models.csv";

const HEADERS: [&str; 6] = [
    "Model Name",
    "BLEU Score",
    "ROUGE Score",
    "METEOR Score",
    "Diversity Score",
    "Coherence Score",
];

const MODELS: [[&str; 6]; 5] = [
    ["GPT-3", "85.3", "88.1", "78.2", "0.85", "4.5"],
    ["GPT-2", "72.4", "75.6", "65.4", "0.78", "3.9"],
    ["T5", "81.2", "83.5", "74.5", "0.82", "4.3"],
    ["BART", "78.9", "80.2", "72.8", "0.8", "4.1"],
    ["XLNet", "74.5", "77.0", "68.3", "0.77", "3.8"],
];

/// The text generation models dataset as a labeled table.
pub fn textgen_dataset() -> LabeledTable {
    LabeledTable::new(
        HEADERS.iter().map(|h| h.to_string()).collect(),
        MODELS
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

/// Writes the dataset as CSV to `path`.
pub fn write_textgen_csv(path: &Path) -> Result<(), DatasetError> {
    let table = textgen_dataset();
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| DatasetError::io(path, e.to_string()))?;

    writer
        .write_record(&table.headers)
        .map_err(|e| DatasetError::io(path, e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| DatasetError::io(path, e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| DatasetError::io(path, e.to_string()))?;

    info!(path = %path.display(), rows = table.len(), "Generated sample dataset");
    Ok(())
}
