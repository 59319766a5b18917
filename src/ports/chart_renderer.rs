//! Chart Renderer Port - Draws the ranking as a horizontal bar chart.

use std::path::Path;
use thiserror::Error;

use crate::domain::analysis::ChartBar;

/// Port for rendering (label, score) bars.
///
/// Bars are drawn in the order given, first bar at the top. Callers that
/// want rank order sort the table before extracting bars.
pub trait ChartRenderer: Send + Sync {
    /// Renders the chart to `path`.
    fn render(&self, path: &Path, title: &str, bars: &[ChartBar]) -> Result<(), ChartError>;
}

/// Errors from chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Nothing to draw.
    #[error("Chart has no bars")]
    Empty,

    /// Chart file could not be written.
    #[error("Failed to write chart to {path}: {message}")]
    Io { path: String, message: String },
}

impl ChartError {
    /// Creates an IO error.
    pub fn io(path: &Path, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}
