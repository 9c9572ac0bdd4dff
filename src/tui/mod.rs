//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: metric cards, a switchable
//! bar/line/pie chart with a sales threshold, and year comparison panels.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
