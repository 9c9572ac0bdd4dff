//! Plain-text rendering of a dashboard
//!
//! Used by the `summary` command; lays out the same cards, chart and year
//! panels as the TUI in a form suitable for stdout.

use std::fmt::Write;

use super::format::{format_bar, format_currency, format_number, format_percentage, format_threshold};
use crate::reports::{ChartRendering, Dashboard};

/// Width of the bar column in text charts
const BAR_WIDTH: usize = 30;

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Render the whole dashboard as text
pub fn format_dashboard(dashboard: &Dashboard, currency: &str, width: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", double_separator(width));
    let _ = writeln!(out, "{}", format_header("Sales Dashboard", width));
    let _ = writeln!(
        out,
        "{}",
        format_header("Track your sales performance and trends", width)
    );
    let _ = writeln!(out, "{}", double_separator(width));

    let years: Vec<String> = dashboard
        .year_panels()
        .iter()
        .map(|p| {
            if p.selected {
                format!("[{}]", p.year)
            } else {
                p.year.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Year: {}", years.join("  "));
    out.push('\n');

    for card in dashboard.metric_cards(currency) {
        let arrow = if card.trend_up { "▲" } else { "▼" };
        let _ = writeln!(
            out,
            "{:<16} {:>14}   {} {}",
            card.title, card.value, arrow, card.trend
        );
    }
    out.push('\n');

    out.push_str(&format_chart(dashboard, currency, width));
    out.push('\n');

    let _ = writeln!(out, "Year Comparison");
    let _ = writeln!(out, "{}", separator(width));
    let _ = writeln!(
        out,
        "  {:<8} {:>14} {:>14} {:>10}",
        "Year", "Sales", "Profit", "Orders"
    );
    for panel in dashboard.year_panels() {
        let marker = if panel.selected { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<8} {:>14} {:>14} {:>10}",
            marker,
            format!("{} Summary", panel.year),
            format_currency(panel.totals.total_sales as f64, currency),
            format_currency(panel.totals.total_profit as f64, currency),
            format_number(panel.totals.total_orders)
        );
    }

    out
}

/// Render the chart section for the active chart type
pub fn format_chart(dashboard: &Dashboard, currency: &str, width: usize) -> String {
    let mut out = String::new();
    let rendering = dashboard.chart();

    let _ = writeln!(
        out,
        "{} [{}]  threshold: {}",
        dashboard.chart_title(),
        rendering.chart_type(),
        format_threshold(dashboard.threshold())
    );
    let _ = writeln!(out, "{}", dashboard.chart_caption());
    let _ = writeln!(out, "{}", separator(width));

    if rendering.month_count() == 0 {
        let _ = writeln!(out, "  No months meet the sales threshold.");
        return out;
    }

    match rendering {
        ChartRendering::Bar { points } => {
            let max = points.iter().map(|p| p.sales).max().unwrap_or(0) as f64;
            for point in &points {
                let _ = writeln!(
                    out,
                    "  {}  S {} {:>12}",
                    point.month,
                    format_bar(point.sales as f64, max, BAR_WIDTH),
                    format_currency(point.sales as f64, currency)
                );
                let _ = writeln!(
                    out,
                    "       P {} {:>12}",
                    format_bar(point.profit as f64, max, BAR_WIDTH),
                    format_currency(point.profit as f64, currency)
                );
            }
        }
        ChartRendering::Line { sales, profit } => {
            let _ = writeln!(out, "  {:<5} {:>14}   {:>14}", "Month", sales.name, profit.name);
            let mut previous: Option<u64> = None;
            for ((month, s), (_, p)) in sales.points.iter().zip(profit.points.iter()) {
                let trend = match previous {
                    Some(prev) if *s > prev => "↗",
                    Some(prev) if *s < prev => "↘",
                    Some(_) => "→",
                    None => " ",
                };
                let _ = writeln!(
                    out,
                    "  {:<5} {:>14} {} {:>14}",
                    month,
                    format_currency(*s as f64, currency),
                    trend,
                    format_currency(*p as f64, currency)
                );
                previous = Some(*s);
            }
        }
        ChartRendering::Pie { slices, total } => {
            for slice in &slices {
                let pct = slice.percent_of(total);
                let _ = writeln!(
                    out,
                    "  {}  {} {:>6}  {:>12}",
                    slice.name,
                    format_bar(pct, 100.0, BAR_WIDTH),
                    format_percentage(pct),
                    format_currency(slice.value as f64, currency)
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sales::tests::flat_year;
    use crate::models::{ChartType, SalesCollection};

    fn collection() -> SalesCollection {
        SalesCollection::new(vec![flat_year(2024, 1200), flat_year(2023, 1000)]).unwrap()
    }

    #[test]
    fn test_dashboard_text_sections() {
        let collection = collection();
        let dashboard = Dashboard::new(&collection);
        let text = format_dashboard(&dashboard, "$", 60);

        assert!(text.contains("Sales Dashboard"));
        assert!(text.contains("[2024]"));
        assert!(text.contains("Total Sales"));
        assert!(text.contains("$14,400"));
        assert!(text.contains("Sales Overview - 2024"));
        assert!(text.contains("(12 months shown)"));
        assert!(text.contains("* 2024 Summary"));
        assert!(text.contains("  2023 Summary"));
    }

    #[test]
    fn test_chart_variants() {
        let collection = collection();
        let mut dashboard = Dashboard::new(&collection);

        dashboard.set_chart_type(ChartType::Line);
        let line = format_chart(&dashboard, "$", 40);
        assert!(line.contains("Sales ($)"));
        assert!(line.contains("[Line]"));

        dashboard.set_chart_type(ChartType::Pie);
        let pie = format_chart(&dashboard, "$", 40);
        assert!(pie.contains("8.3%"));
    }

    #[test]
    fn test_empty_chart_message() {
        let collection = collection();
        let mut dashboard = Dashboard::new(&collection);
        dashboard.set_threshold(f64::NAN);
        let text = format_chart(&dashboard, "$", 40);
        assert!(text.contains("No months meet the sales threshold."));
        assert!(text.contains("threshold: NaN"));
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("ab", 6), "  ab");
        assert_eq!(separator(3), "───");
    }
}
