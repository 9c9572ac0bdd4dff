//! Core data models for salesdash
//!
//! This module contains the data structures of the sales domain: monthly
//! records, yearly aggregates, the year collection and chart view state.

pub mod chart;
pub mod month;
pub mod sales;

pub use chart::{ChartState, ChartType};
pub use month::Month;
pub use sales::{SalesCollection, SalesRecord, SalesTotals, YearlySales};
