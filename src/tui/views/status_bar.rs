//! Status bar view
//!
//! Shows the seed, the active chart and threshold, status messages and key
//! hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_threshold;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(" Chart: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.dashboard.chart_type().label(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Min: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format_threshold(app.dashboard.threshold()),
        Style::default().fg(Color::Yellow),
    ));

    if let Some(seed) = app.seed {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("seed {}", seed),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " b/l/p:Chart  f:Filter  ←/→:Year  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
