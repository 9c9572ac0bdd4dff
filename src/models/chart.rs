//! Chart type selection and filter state
//!
//! `ChartState` is the transient view state behind the chart area: which of
//! the three renderings is active and the minimum sales threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// The three available chart renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Grouped bars of sales and profit per month
    #[default]
    Bar,
    /// Sales and profit line series
    Line,
    /// Share of sales by month
    Pie,
}

impl ChartType {
    /// All chart types in selector order
    pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Line, ChartType::Pie];

    /// Label shown on the selector
    pub const fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Pie => "Pie",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            other => Err(DashboardError::Validation(format!(
                "Unknown chart type '{}' (expected bar, line or pie)",
                other
            ))),
        }
    }
}

/// Selected chart type and sales threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartState {
    chart_type: ChartType,
    threshold: f64,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            threshold: 0.0,
        }
    }
}

impl ChartState {
    pub fn new(chart_type: ChartType, threshold: f64) -> Self {
        Self {
            chart_type,
            threshold,
        }
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Switch to any chart type; every transition is allowed
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    /// Store the threshold as given. NaN and negatives are kept unchanged.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ChartState::default();
        assert_eq!(state.chart_type(), ChartType::Bar);
        assert_eq!(state.threshold(), 0.0);
    }

    #[test]
    fn test_any_transition_allowed() {
        let mut state = ChartState::default();
        for from in ChartType::ALL {
            for to in ChartType::ALL {
                state.set_chart_type(from);
                state.set_chart_type(to);
                assert_eq!(state.chart_type(), to);
            }
        }
    }

    #[test]
    fn test_threshold_not_clamped() {
        let mut state = ChartState::default();
        state.set_threshold(-50.0);
        assert_eq!(state.threshold(), -50.0);
        state.set_threshold(f64::NAN);
        assert!(state.threshold().is_nan());
    }

    #[test]
    fn test_parse_chart_type() {
        assert_eq!("PIE".parse::<ChartType>().unwrap(), ChartType::Pie);
        assert_eq!("line".parse::<ChartType>().unwrap(), ChartType::Line);
        assert!("donut".parse::<ChartType>().is_err());
    }
}
