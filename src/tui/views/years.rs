//! Year comparison view
//!
//! One panel per year with its totals; the selected year is highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::display::{format_currency, format_number, right_align};
use crate::tui::app::App;
use crate::tui::layout::columns;

/// Render the year comparison panels
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let panels = app.dashboard.year_panels();
    let slots = columns(area, panels.len());
    let currency = app.settings.currency_symbol.as_str();

    for (panel, slot) in panels.iter().zip(slots) {
        let value_width = (slot.width as usize).saturating_sub(2 + 8);
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<8}", label), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    right_align(&value, value_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        };

        let lines = vec![
            row("Sales", format_currency(panel.totals.total_sales as f64, currency)),
            row("Profit", format_currency(panel.totals.total_profit as f64, currency)),
            row("Orders", format_number(panel.totals.total_orders)),
        ];

        let (border_style, border_type) = if panel.selected {
            (Style::default().fg(Color::Yellow), BorderType::Thick)
        } else {
            (Style::default().fg(Color::DarkGray), BorderType::Plain)
        };

        let block = Block::default()
            .title(format!(" {} Summary ", panel.year))
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), slot);
    }
}
