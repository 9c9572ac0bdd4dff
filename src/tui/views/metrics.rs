//! Metric cards view
//!
//! Total sales, total profit, total orders and average order value for the
//! selected year.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;
use crate::tui::layout::columns;

/// Render the four metric cards side by side
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let cards = app.dashboard.metric_cards(&app.settings.currency_symbol);
    let slots = columns(area, cards.len());

    for (card, slot) in cards.iter().zip(slots) {
        let (arrow, trend_color) = if card.trend_up {
            ("▲ ", Color::Green)
        } else {
            ("▼ ", Color::Red)
        };
        let inner_width = slot.width.saturating_sub(2) as usize;

        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(arrow, Style::default().fg(trend_color)),
                Span::styled(
                    truncate(&card.trend, inner_width.saturating_sub(2)),
                    Style::default().fg(trend_color),
                ),
            ]),
        ];

        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(Color::Cyan))
            .borders(Borders::ALL);

        frame.render_widget(Paragraph::new(lines).block(block), slot);
    }
}
