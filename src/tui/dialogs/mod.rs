//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the dashboard

pub mod help;
pub mod threshold;
