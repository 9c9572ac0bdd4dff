//! Chart view
//!
//! Chart type selector, threshold line and the chart itself. Which widget is
//! drawn is decided by matching on the dashboard's [`ChartRendering`].

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::{format_bar, format_currency, format_percentage, format_threshold};
use crate::models::ChartType;
use crate::reports::{ChartRendering, MonthPoint, Series};
use crate::services::PieSlice;
use crate::tui::app::App;

const SALES_COLOR: Color = Color::Cyan;
const PROFIT_COLOR: Color = Color::Magenta;

/// Pie slice colors, cycled by slice index
const SLICE_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
];

/// Render the chart card
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.dashboard.chart_title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Caption and selector
            Constraint::Length(1), // Threshold
            Constraint::Min(3),    // Chart
        ])
        .split(inner);

    render_controls(frame, app, chunks[0], chunks[1]);

    let rendering = app.dashboard.chart();
    if rendering.month_count() == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No months meet the sales threshold",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let currency = app.settings.currency_symbol.as_str();
    match rendering {
        ChartRendering::Bar { points } => render_bar(frame, &points, chunks[2]),
        ChartRendering::Line { sales, profit } => render_line(frame, &sales, &profit, chunks[2]),
        ChartRendering::Pie { slices, total } => {
            render_pie(frame, &slices, total, currency, chunks[2])
        }
    }
}

/// Caption, chart type selector and threshold value
fn render_controls(frame: &mut Frame, app: &App, caption_area: Rect, threshold_area: Rect) {
    let mut spans = vec![Span::styled(
        app.dashboard.chart_caption(),
        Style::default().fg(Color::DarkGray),
    )];
    spans.push(Span::raw("   "));

    let active = app.dashboard.chart_type();
    for chart_type in ChartType::ALL {
        let style = if chart_type == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", chart_type.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), caption_area);

    let threshold = Line::from(vec![
        Span::styled("Sales Threshold: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_threshold(app.dashboard.threshold()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("  (f to edit, r to clear)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(threshold), threshold_area);
}

/// Grouped sales and profit bars per month
fn render_bar(frame: &mut Frame, points: &[MonthPoint], area: Rect) {
    let groups = points.len().max(1) as u16;
    // Two bars per group plus one column of gap
    let bar_width = (area.width / groups).saturating_sub(1) / 2;
    let bar_width = bar_width.max(1);

    let max = points.iter().map(|p| p.sales).max().unwrap_or(0);

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1)
        .max(max);

    for point in points {
        let bars = [
            Bar::default()
                .value(point.sales)
                .text_value(String::new())
                .style(Style::default().fg(SALES_COLOR)),
            Bar::default()
                .value(point.profit)
                .text_value(String::new())
                .style(Style::default().fg(PROFIT_COLOR)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.month.label()))
                .bars(&bars),
        );
    }

    let chunks = split_legend(area);
    frame.render_widget(legend("Sales ($)", "Profit ($)"), chunks[0]);
    frame.render_widget(chart, chunks[1]);
}

/// Sales and profit line series
fn render_line(frame: &mut Frame, sales: &Series, profit: &Series, area: Rect) {
    let to_points = |series: &Series| -> Vec<(f64, f64)> {
        series
            .points
            .iter()
            .enumerate()
            .map(|(i, (_, value))| (i as f64, *value as f64))
            .collect()
    };
    let sales_points = to_points(sales);
    let profit_points = to_points(profit);

    let max = sales
        .points
        .iter()
        .map(|(_, v)| *v)
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let last = sales.points.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name(sales.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SALES_COLOR))
            .data(&sales_points),
        Dataset::default()
            .name(profit.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(PROFIT_COLOR))
            .data(&profit_points),
    ];

    let x_labels: Vec<Span> = match (sales.points.first(), sales.points.last()) {
        (Some((first, _)), Some((last_month, _))) if sales.points.len() > 1 => {
            let middle = sales.points[sales.points.len() / 2].0;
            vec![
                Span::raw(first.label()),
                Span::raw(middle.label()),
                Span::raw(last_month.label()),
            ]
        }
        (Some((only, _)), _) => vec![Span::raw(only.label())],
        _ => Vec::new(),
    };

    let y_max = max * 1.1;
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{:.0}", y_max)),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, last])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Share of sales by month, drawn as proportional bars
fn render_pie(frame: &mut Frame, slices: &[PieSlice], total: u64, currency: &str, area: Rect) {
    let bar_width = (area.width as usize).saturating_sub(30).max(5);

    let lines: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let pct = slice.percent_of(total);
            let color = SLICE_COLORS[i % SLICE_COLORS.len()];
            Line::from(vec![
                Span::styled(format!(" {} ", slice.name), Style::default().fg(color)),
                Span::styled(format_bar(pct, 100.0, bar_width), Style::default().fg(color)),
                Span::raw(format!(" {:>6}", format_percentage(pct))),
                Span::styled(
                    format!(" {:>12}", format_currency(slice.value as f64, currency)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn split_legend(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area)
}

fn legend(sales: &'static str, profit: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("■ ", Style::default().fg(SALES_COLOR)),
        Span::raw(sales),
        Span::raw("   "),
        Span::styled("■ ", Style::default().fg(PROFIT_COLOR)),
        Span::raw(profit),
    ]))
}
