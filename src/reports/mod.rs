//! Reports module for salesdash
//!
//! Composes the dashboard view from the sales collection and view state.

pub mod dashboard;

pub use dashboard::{
    ChartRendering, Dashboard, DashboardMetrics, Growth, MetricCard, MonthPoint, Series, YearPanel,
};
