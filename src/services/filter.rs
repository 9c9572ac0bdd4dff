//! Threshold filtering and pie projection
//!
//! Pure derivations over a year's records. They are cheap enough (twelve
//! records) to recompute on every state change.

use serde::Serialize;

use crate::models::{ChartState, Month, SalesRecord};

/// A named value for proportional rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub name: Month,
    pub value: u64,
}

impl PieSlice {
    /// Share of `total` as a percentage, 0 when the total is 0
    pub fn percent_of(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.value as f64 / total as f64 * 100.0
        }
    }
}

/// Keep records whose sales are at least `threshold`, preserving order
///
/// A NaN threshold compares false against everything and keeps nothing.
pub fn filtered_records(data: &[SalesRecord], threshold: f64) -> Vec<SalesRecord> {
    data.iter()
        .filter(|record| record.sales as f64 >= threshold)
        .copied()
        .collect()
}

/// Records of a year that the chart state lets through
pub fn visible_records(state: &ChartState, data: &[SalesRecord]) -> Vec<SalesRecord> {
    filtered_records(data, state.threshold())
}

/// Map records one-to-one onto `{name: month, value: sales}` pairs
pub fn pie_projection(records: &[SalesRecord]) -> Vec<PieSlice> {
    records
        .iter()
        .map(|record| PieSlice {
            name: record.month,
            value: record.sales,
        })
        .collect()
}

/// Coerce free-form threshold input to a number
///
/// Empty input reads as 0, anything unparseable becomes NaN.
pub fn parse_threshold(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }
    input.parse::<f64>().unwrap_or(f64::NAN)
}
