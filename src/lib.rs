//! salesdash - terminal sales analytics dashboard
//!
//! Generates a few years of seasonal monthly sales data and presents it as a
//! dashboard: metric cards with year-over-year growth, a bar, line or pie
//! chart of the selected year filtered by a sales threshold, and a year
//! comparison strip.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Months, sales records, yearly data and chart state
//! - `services`: Seeded data generation and threshold filtering
//! - `reports`: The dashboard view model (metrics, cards, chart renderings)
//! - `display`: Plain-text formatting for CLI output
//! - `export`: JSON, YAML and CSV export of the data set
//! - `tui`: Interactive ratatui dashboard
//! - `cli`: Command handlers behind the clap interface
//! - `config`: Configuration paths and user settings
//! - `logging`: env_logger setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use salesdash::reports::Dashboard;
//! use salesdash::services::SalesGenerator;
//! use salesdash::config::Settings;
//!
//! let settings = Settings::default();
//! let collection = SalesGenerator::seeded(7).generate_collection(&settings.year_plan())?;
//! let dashboard = Dashboard::new(&collection);
//! println!("{}", dashboard.metrics().growth);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{DashboardError, DashboardResult};
