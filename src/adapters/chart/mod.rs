//! Chart adapters - Visualisation of ranking results.
//!
//! - `SvgBarChartRenderer` - Horizontal bar chart as a standalone SVG file

mod svg_bar_chart;

pub use svg_bar_chart::SvgBarChartRenderer;
