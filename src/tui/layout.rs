//! Layout definitions for the TUI
//!
//! Defines the dashboard structure: header, metric cards, chart area,
//! year comparison strip and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Title and year tabs
    pub header: Rect,
    /// Four metric cards
    pub metrics: Rect,
    /// Chart area with selector and threshold
    pub chart: Rect,
    /// Year comparison panels
    pub years: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Metric cards
                Constraint::Min(10),   // Chart
                Constraint::Length(6), // Year panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            metrics: chunks[1],
            chart: chunks[2],
            years: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Split an area into `count` equal columns
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = DashboardLayout::new(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.metrics.height, 5);
        assert_eq!(layout.years.height, 6);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.chart.height, 40 - 3 - 5 - 6 - 1);
    }

    #[test]
    fn test_columns() {
        let cols = columns(Rect::new(0, 0, 90, 5), 3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 90);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(20, 5, Rect::new(0, 0, 100, 50));
        assert_eq!(r, Rect::new(40, 22, 20, 5));
    }
}
