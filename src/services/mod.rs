//! Business logic layer for salesdash
//!
//! Data generation and the pure derivations that feed the dashboard.

pub mod filter;
pub mod generator;

pub use filter::{filtered_records, parse_threshold, pie_projection, visible_records, PieSlice};
pub use generator::{SalesGenerator, YearPlan, MAX_BASE_AMOUNT, SEASONAL_MULTIPLIERS};
