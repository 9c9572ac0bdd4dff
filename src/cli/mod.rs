//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the dashboard and export layers.

pub mod export;
pub mod report;

pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_summary_command, render_summary, SummaryArgs};
