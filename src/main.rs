//! `topsis-rank` command-line entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use topsis_rank::adapters::sample::{write_textgen_csv, SAMPLE_FILE_NAME};
use topsis_rank::adapters::{reader_for, writer_for, SvgBarChartRenderer};
use topsis_rank::application::{RankDatasetCommand, RankDatasetHandler, RankError};
use topsis_rank::config::{AppConfig, ConfigError, LoggingConfig};
use topsis_rank::domain::analysis::RankingPolicy;
use topsis_rank::ports::TableFormat;

/// Rank alternatives with TOPSIS.
#[derive(Parser, Debug)]
#[command(name = "topsis-rank", version)]
#[command(about = "Rank the rows of a dataset by closeness to the ideal solution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and rank every row of a dataset
    ///
    /// The first column labels each alternative; every other column is a
    /// numeric criterion.
    Rank {
        /// Input dataset (.csv or .xlsx)
        input: PathBuf,

        /// Comma-separated weights, one per criterion (e.g. "1,1,1,1,1")
        weights: String,

        /// Comma-separated impacts, "+" for benefit and "-" for cost
        impacts: String,

        /// Output file (.csv, .json or .xlsx)
        output: PathBuf,

        /// Also draw the scores as an SVG bar chart
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Tie handling: ordinal or dense
        #[arg(long)]
        ties: Option<RankingPolicy>,

        /// Write rows in rank order
        #[arg(long)]
        sort: bool,
    },

    /// Write the text generation models sample dataset
    Sample {
        /// Destination file
        #[arg(long, default_value = SAMPLE_FILE_NAME)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(cli.command, &config) {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` wins over `logging.level`. Logs go to stderr so stdout only
/// carries the confirmation line.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter);

    if logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(command: Commands, config: &AppConfig) -> Result<String, RankError> {
    match command {
        Commands::Rank {
            input,
            weights,
            impacts,
            output,
            chart,
            ties,
            sort,
        } => {
            let reader = reader_for(TableFormat::from_path(&input)?)?;
            let writer = writer_for(TableFormat::from_path(&output)?)?;
            let handler = RankDatasetHandler::new(
                Arc::from(reader),
                Arc::from(writer),
                Arc::new(SvgBarChartRenderer::new()),
            );

            let mut cmd = RankDatasetCommand::new(input, weights, impacts, output)
                .with_policy(ties.unwrap_or(config.ranking.ties))
                .sorted_by_rank(sort || config.output.sort_by_rank)
                .with_columns(config.output.columns());
            if let Some(path) = chart {
                cmd = cmd.with_chart(path, config.output.chart_title.clone());
            }

            let result = handler.handle(cmd)?;
            if let Some(path) = &result.chart_path {
                info!(chart = %path.display(), "Chart saved");
            }
            Ok(format!(
                "Results successfully saved to {}",
                result.output_path.display()
            ))
        }
        Commands::Sample { output } => {
            write_textgen_csv(&output)?;
            Ok(format!(
                "CSV file '{}' generated successfully!",
                output.display()
            ))
        }
    }
}
