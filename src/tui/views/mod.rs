//! TUI Views module
//!
//! The dashboard is a single screen: header with year tabs, metric cards,
//! chart, year comparison panels and the status bar.

pub mod chart;
pub mod header;
pub mod metrics;
pub mod status_bar;
pub mod years;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area());

    header::render(frame, app, layout.header);
    metrics::render(frame, app, layout.metrics);
    chart::render(frame, app, layout.chart);
    years::render(frame, app, layout.years);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Threshold => dialogs::threshold::render(frame, app),
        ActiveDialog::None => {}
    }
}
