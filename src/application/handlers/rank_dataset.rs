//! RankDatasetHandler - Command handler for ranking a dataset file.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::analysis::{
    AlternativeScore, OutputColumns, RankingPolicy, ResultAssembler, TopsisAnalyzer,
};
use crate::domain::foundation::{ImpactVector, TopsisError, ValidationError, WeightVector};
use crate::ports::{ChartError, ChartRenderer, DatasetError, DatasetReader, ResultWriter};

/// Command to rank the alternatives of a dataset file.
#[derive(Debug, Clone)]
pub struct RankDatasetCommand {
    pub input: PathBuf,
    /// Comma-separated weights, one per criterion.
    pub weights: String,
    /// Comma-separated `+`/`-` tokens, one per criterion.
    pub impacts: String,
    pub output: PathBuf,
    pub chart: Option<PathBuf>,
    pub chart_title: String,
    pub policy: RankingPolicy,
    pub sort_by_rank: bool,
    pub columns: OutputColumns,
}

impl RankDatasetCommand {
    /// Creates a command with default policy, columns and chart title.
    pub fn new(
        input: impl Into<PathBuf>,
        weights: impl Into<String>,
        impacts: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            weights: weights.into(),
            impacts: impacts.into(),
            output: output.into(),
            chart: None,
            chart_title: "TOPSIS Ranking".to_string(),
            policy: RankingPolicy::default(),
            sort_by_rank: false,
            columns: OutputColumns::default(),
        }
    }

    pub fn with_chart(mut self, path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        self.chart = Some(path.into());
        self.chart_title = title.into();
        self
    }

    pub fn with_policy(mut self, policy: RankingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn sorted_by_rank(mut self, sort: bool) -> Self {
        self.sort_by_rank = sort;
        self
    }

    pub fn with_columns(mut self, columns: OutputColumns) -> Self {
        self.columns = columns;
        self
    }
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankDatasetResult {
    pub output_path: PathBuf,
    pub chart_path: Option<PathBuf>,
    /// Label of the alternative ranked first.
    pub best_alternative: Option<String>,
    /// Per-alternative scores and ranks in input row order.
    pub alternatives: Vec<AlternativeScore>,
}

/// Errors from a ranking run.
#[derive(Debug, Error)]
pub enum RankError {
    #[error(transparent)]
    Topsis(#[from] TopsisError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl From<ValidationError> for RankError {
    fn from(err: ValidationError) -> Self {
        RankError::Topsis(err.into())
    }
}

/// Handler for ranking datasets.
pub struct RankDatasetHandler {
    reader: Arc<dyn DatasetReader>,
    writer: Arc<dyn ResultWriter>,
    chart_renderer: Arc<dyn ChartRenderer>,
}

impl RankDatasetHandler {
    pub fn new(
        reader: Arc<dyn DatasetReader>,
        writer: Arc<dyn ResultWriter>,
        chart_renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            reader,
            writer,
            chart_renderer,
        }
    }

    /// Runs the command end to end.
    ///
    /// The ranked table is written before the chart is drawn. If only the
    /// chart fails, the written table is kept and the chart error returned.
    pub fn handle(&self, cmd: RankDatasetCommand) -> Result<RankDatasetResult, RankError> {
        // 1. Parse weights and impacts
        let weights = WeightVector::parse(&cmd.weights)?;
        let impacts = ImpactVector::parse(&cmd.impacts)?;

        // 2. Load the dataset
        let table = self.reader.read(&cmd.input)?;
        let matrix = table.to_decision_matrix()?;
        debug!(
            input = %cmd.input.display(),
            format = %self.reader.format(),
            rows = table.len(),
            "Loaded dataset"
        );

        // 3. Score and rank
        let outcome = TopsisAnalyzer::analyze(&matrix, &weights, &impacts, cmd.policy)?;

        // 4. Attach scores and ranks to the records
        let mut ranked =
            ResultAssembler::assemble(&table, &outcome.scores(), &outcome.ranks(), &cmd.columns)?;
        if cmd.sort_by_rank {
            ranked = ranked.sorted_by_rank();
        }

        // 5. Persist
        self.writer.write(&cmd.output, &ranked)?;
        debug!(
            output = %cmd.output.display(),
            format = %self.writer.format(),
            "Wrote ranked table"
        );

        // 6. Draw the chart
        if let Some(chart) = &cmd.chart {
            if let Err(e) = self
                .chart_renderer
                .render(chart, &cmd.chart_title, &ranked.chart_bars())
            {
                warn!(
                    output = %cmd.output.display(),
                    "Ranked table kept; chart was not rendered"
                );
                return Err(e.into());
            }
        }

        let best_alternative = outcome.best().map(|a| a.label.clone());
        info!(
            alternatives = outcome.alternatives.len(),
            best = best_alternative.as_deref().unwrap_or("-"),
            policy = %cmd.policy,
            "Ranking complete"
        );

        Ok(RankDatasetResult {
            output_path: cmd.output,
            chart_path: cmd.chart,
            best_alternative,
            alternatives: outcome.alternatives,
        })
    }
}
