//! Backend aggregates reshaped into chart series.

use shared_types::{LabeledCount, TrendPoint};
use shared_ui::ChartDatum;

use crate::format_helpers::format_day_short;

pub fn trend_series(points: &[TrendPoint]) -> Vec<ChartDatum> {
    points
        .iter()
        .map(|p| ChartDatum::new(format_day_short(&p.date), p.count as f64))
        .collect()
}

pub fn count_series(counts: &[LabeledCount]) -> Vec<ChartDatum> {
    counts
        .iter()
        .map(|c| ChartDatum::new(c.label.clone(), c.count as f64))
        .collect()
}

/// A pie needs at least one positive count to draw a slice.
pub fn has_pie_data(counts: &[LabeledCount]) -> bool {
    counts.iter().any(|c| c.count > 0)
}
