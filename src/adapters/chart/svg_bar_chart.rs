//! SVG Bar Chart Renderer - Implementation of ChartRenderer.
//!
//! Produces a standalone SVG document: one horizontal bar per alternative,
//! first bar at the top, score axis from 0 to 1.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::domain::analysis::ChartBar;
use crate::ports::{ChartError, ChartRenderer};

const WIDTH: f64 = 1000.0;
const MARGIN_LEFT: f64 = 180.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const BAR_HEIGHT: f64 = 36.0;
const BAR_GAP: f64 = 12.0;
const BAR_COLOR: &str = "#87ceeb";
const TICKS: u32 = 5;
const X_LABEL: &str = "Topsis Score";
const Y_LABEL: &str = "Models";

/// Renders horizontal bar charts as SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgBarChartRenderer;

impl SvgBarChartRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Builds the SVG document.
    pub fn to_svg(&self, title: &str, bars: &[ChartBar]) -> Result<String, ChartError> {
        if bars.is_empty() {
            return Err(ChartError::Empty);
        }

        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = bars.len() as f64 * (BAR_HEIGHT + BAR_GAP);
        let height = MARGIN_TOP + plot_height + MARGIN_BOTTOM;
        let axis_y = MARGIN_TOP + plot_height;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = WIDTH,
            h = height
        ));
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"32\" font-size=\"20\" text-anchor=\"middle\">{}</text>\n",
            WIDTH / 2.0,
            escape(title)
        ));

        // Grid lines and tick labels
        for i in 0..=TICKS {
            let value = f64::from(i) / f64::from(TICKS);
            let x = MARGIN_LEFT + value * plot_width;
            svg.push_str(&format!(
                "<line x1=\"{x:.1}\" y1=\"{MARGIN_TOP}\" x2=\"{x:.1}\" y2=\"{axis_y}\" stroke=\"#dddddd\"/>\n"
            ));
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{}\" font-size=\"12\" text-anchor=\"middle\">{value:.1}</text>\n",
                axis_y + 18.0
            ));
        }

        // Bars, first at the top
        for (i, bar) in bars.iter().enumerate() {
            let y = MARGIN_TOP + i as f64 * (BAR_HEIGHT + BAR_GAP) + BAR_GAP / 2.0;
            let length = bar.score.clamp(0.0, 1.0) * plot_width;
            let label = escape(&bar.label);
            svg.push_str(&format!(
                "<rect x=\"{MARGIN_LEFT}\" y=\"{y:.1}\" width=\"{length:.2}\" height=\"{BAR_HEIGHT}\" fill=\"{BAR_COLOR}\"><title>{label}: {}</title></rect>\n",
                bar.score
            ));
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"end\">{label}</text>\n",
                MARGIN_LEFT - 8.0,
                y + BAR_HEIGHT / 2.0 + 5.0
            ));
        }

        // Axes
        svg.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{axis_y}\" x2=\"{}\" y2=\"{axis_y}\" stroke=\"black\"/>\n",
            MARGIN_LEFT + plot_width
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"14\" text-anchor=\"middle\">{X_LABEL}</text>\n",
            MARGIN_LEFT + plot_width / 2.0,
            height - 20.0
        ));
        svg.push_str(&format!(
            "<text x=\"20\" y=\"{y}\" font-size=\"14\" text-anchor=\"middle\" transform=\"rotate(-90 20 {y})\">{Y_LABEL}</text>\n",
            y = MARGIN_TOP + plot_height / 2.0
        ));
        svg.push_str("</svg>\n");

        Ok(svg)
    }
}

impl ChartRenderer for SvgBarChartRenderer {
    fn render(&self, path: &Path, title: &str, bars: &[ChartBar]) -> Result<(), ChartError> {
        let svg = self.to_svg(title, bars)?;
        fs::write(path, svg).map_err(|e| ChartError::io(path, e.to_string()))?;
        debug!(path = %path.display(), bars = bars.len(), "Rendered ranking chart");
        Ok(())
    }
}

/// Escapes text for XML content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
