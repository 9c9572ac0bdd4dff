//! Configuration module for salesdash
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Data generation and presentation preferences

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::Settings;
