//! Charting of daily income and expense series
//!
//! The resampler hands a [`DailySeries`] to a [`ChartSink`]; the sink decides
//! how to show it. [`TerminalChart`] draws a line chart in the terminal.

pub mod terminal;

pub use terminal::{draw_chart, TerminalChart};

use crate::error::LedgerResult;
use crate::models::Category;
use crate::services::DailySeries;

/// Consumer of aligned daily series
pub trait ChartSink {
    fn render(&mut self, series: &DailySeries) -> LedgerResult<()>;
}

/// Plot coordinates for one category: x is the day offset from the first
/// day of the series, y the amount in currency units
pub fn chart_points(series: &DailySeries, category: Category) -> Vec<(f64, f64)> {
    series
        .series(category)
        .iter()
        .enumerate()
        .map(|(day, amount)| (day as f64, amount.as_f64()))
        .collect()
}
