//! Integration tests for the ranking flow.
//!
//! These tests verify the end-to-end path on real files:
//! 1. The sample dataset is generated as CSV (XLSX round-trips through the output)
//! 2. RankDatasetHandler reads it, scores it and writes the ranked table
//! 3. The chart is drawn when requested
//!
//! Uses temporary directories so no fixture files are needed.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use topsis_rank::adapters::sample::write_textgen_csv;
use topsis_rank::adapters::{reader_for, writer_for, SvgBarChartRenderer, XlsxDatasetReader};
use topsis_rank::application::{RankDatasetCommand, RankDatasetHandler, RankError};
use topsis_rank::domain::analysis::{OutputColumns, RankedTable, RankingPolicy};
use topsis_rank::domain::foundation::TopsisError;
use topsis_rank::ports::{DatasetError, DatasetReader, TableFormat};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handler_for(input: &Path, output: &Path) -> Result<RankDatasetHandler, DatasetError> {
    let reader = reader_for(TableFormat::from_path(input)?)?;
    let writer = writer_for(TableFormat::from_path(output)?)?;
    Ok(RankDatasetHandler::new(
        Arc::from(reader),
        Arc::from(writer),
        Arc::new(SvgBarChartRenderer::new()),
    ))
}

fn sample_in(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("text_generation_models.csv");
    write_textgen_csv(&path).unwrap();
    path
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn csv_to_csv_appends_score_and_rank_in_input_order() {
    let dir = TempDir::new().unwrap();
    let input = sample_in(&dir);
    let output = dir.path().join("result.csv");

    let result = handler_for(&input, &output)
        .unwrap()
        .handle(RankDatasetCommand::new(&input, "1,1,1,1,1", "+,+,+,+,+", &output))
        .unwrap();

    assert_eq!(result.best_alternative.as_deref(), Some("GPT-3"));

    let records = read_csv(&output);
    assert_eq!(records.len(), 6);
    assert_eq!(
        records[0],
        vec![
            "Model Name",
            "BLEU Score",
            "ROUGE Score",
            "METEOR Score",
            "Diversity Score",
            "Coherence Score",
            "Topsis Score",
            "Rank",
        ]
    );

    let labels: Vec<&str> = records[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(labels, vec!["GPT-3", "GPT-2", "T5", "BART", "XLNet"]);
    let ranks: Vec<&str> = records[1..].iter().map(|r| r[7].as_str()).collect();
    assert_eq!(ranks, vec!["1", "5", "2", "3", "4"]);

    // Original cells pass through untouched.
    assert_eq!(records[4][4], "0.8");
    assert_eq!(records[5][2], "77.0");

    let top: f64 = records[1][6].parse().unwrap();
    assert_eq!(top, 1.0);
    for record in &records[1..] {
        let score: f64 = record[6].parse().unwrap();
        assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn scores_written_with_full_precision() {
    let dir = TempDir::new().unwrap();
    let input = sample_in(&dir);
    let output = dir.path().join("result.csv");

    let result = handler_for(&input, &output)
        .unwrap()
        .handle(RankDatasetCommand::new(&input, "1,1,1,1,1", "+,+,+,+,+", &output))
        .unwrap();

    let records = read_csv(&output);
    for (record, alternative) in records[1..].iter().zip(&result.alternatives) {
        let written: f64 = record[6].parse().unwrap();
        assert_eq!(written, alternative.score);
    }
}

#[test]
fn json_output_with_sorted_rows_and_chart() {
    let dir = TempDir::new().unwrap();
    let input = sample_in(&dir);
    let output = dir.path().join("result.json");
    let chart = dir.path().join("ranking.svg");

    let cmd = RankDatasetCommand::new(&input, "2,1,1,0.5,1", "+,+,+,-,+", &output)
        .with_chart(&chart, "TOPSIS Ranking of Text Generation Models")
        .with_policy(RankingPolicy::Dense)
        .sorted_by_rank(true);
    let result = handler_for(&input, &output).unwrap().handle(cmd).unwrap();

    let table: RankedTable = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(table.rows.len(), 5);
    let ranks: Vec<usize> = table.rows.iter().map(|r| r.rank).collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted);

    assert_eq!(result.chart_path.as_deref(), Some(chart.as_path()));
    let svg = fs::read_to_string(&chart).unwrap();
    assert!(svg.contains("TOPSIS Ranking of Text Generation Models"));
    let first = svg.find(&format!(">{}</text>", table.rows[0].label())).unwrap();
    let last = svg.find(&format!(">{}</text>", table.rows[4].label())).unwrap();
    assert!(first < last);
}

#[test]
fn impact_count_mismatch_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = sample_in(&dir);
    let output = dir.path().join("result.csv");

    let err = handler_for(&input, &output)
        .unwrap()
        .handle(RankDatasetCommand::new(&input, "1,1,1,1,1", "+,+,+", &output))
        .unwrap_err();

    assert!(matches!(
        err,
        RankError::Topsis(TopsisError::DimensionMismatch { vector: "impacts", expected: 5, actual: 3 })
    ));
    assert!(!output.exists());
}

#[test]
fn missing_input_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("result.csv");

    let err = handler_for(&input, &output)
        .unwrap()
        .handle(RankDatasetCommand::new(&input, "1", "+", &output))
        .unwrap_err();

    assert!(matches!(err, RankError::Dataset(DatasetError::NotFound { .. })));
}

#[test]
fn xlsx_output_reads_back_and_ranks_again() {
    let dir = TempDir::new().unwrap();
    let input = sample_in(&dir);
    let workbook = dir.path().join("result.xlsx");

    handler_for(&input, &workbook)
        .unwrap()
        .handle(RankDatasetCommand::new(&input, "1,1,1,1,1", "+,+,+,+,+", &workbook))
        .unwrap();

    let table = XlsxDatasetReader::new().read(&workbook).unwrap();
    assert_eq!(table.headers[6], "Topsis Score");
    assert_eq!(table.headers[7], "Rank");
    let ranks: Vec<&str> = table.rows.iter().map(|r| r[7].as_str()).collect();
    assert_eq!(ranks, vec!["1", "5", "2", "3", "4"]);

    // The workbook is valid input: rank its five original criteria again.
    let output = dir.path().join("again.csv");
    let result = handler_for(&workbook, &output)
        .unwrap()
        .handle(
            RankDatasetCommand::new(&workbook, "1,1,1,1,1,0,0", "+,+,+,+,+,+,-", &output)
                .with_columns(OutputColumns {
                    score: "Score Again".to_string(),
                    rank: "Rank Again".to_string(),
                }),
        )
        .unwrap();

    assert_eq!(result.best_alternative.as_deref(), Some("GPT-3"));
    let records = read_csv(&output);
    assert_eq!(records[0][8], "Score Again");
    assert_eq!(records.len(), 6);
}

#[test]
fn non_numeric_cell_names_row_and_criterion() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.csv");
    fs::write(&input, "Model Name,BLEU,ROUGE\nGPT-3,85.3,88.1\nT5,n/a,83.5\n").unwrap();
    let output = dir.path().join("result.csv");

    let err = handler_for(&input, &output)
        .unwrap()
        .handle(RankDatasetCommand::new(&input, "1,1", "+,+", &output))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("T5"), "{}", message);
    assert!(message.contains("BLEU"), "{}", message);
}
