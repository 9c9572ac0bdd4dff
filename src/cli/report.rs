//! CLI command for the text dashboard
//!
//! Prints the same view the TUI shows: metric cards, the active chart and the
//! year comparison.

use clap::Args;

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{ChartType, SalesCollection};
use crate::reports::Dashboard;
use crate::services::parse_threshold;

/// Default output width for text reports
pub const REPORT_WIDTH: usize = 72;

/// Arguments for `salesdash summary`
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    /// Year to display (defaults to the most recent year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Chart type: bar, line or pie
    #[arg(short, long)]
    pub chart: Option<ChartType>,

    /// Minimum monthly sales; empty shows all months
    #[arg(short, long, allow_hyphen_values = true)]
    pub threshold: Option<String>,

    /// Report width in columns
    #[arg(short, long, default_value_t = REPORT_WIDTH)]
    pub width: usize,
}

/// Build the dashboard described by `args` and render it as text
pub fn render_summary(
    collection: &SalesCollection,
    settings: &Settings,
    args: &SummaryArgs,
) -> DashboardResult<String> {
    let mut dashboard = Dashboard::with_chart_state(collection, settings.initial_chart_state());

    if let Some(year) = args.year {
        if collection.find(year).is_none() {
            return Err(DashboardError::year_not_found(year));
        }
        dashboard.select_year(year);
    }
    if let Some(chart_type) = args.chart {
        dashboard.set_chart_type(chart_type);
    }
    if let Some(ref input) = args.threshold {
        dashboard.set_threshold(parse_threshold(input));
    }

    log::debug!(
        "summary for {} as {} chart",
        dashboard.selected_year(),
        dashboard.chart_type()
    );

    Ok(format_dashboard(
        &dashboard,
        &settings.currency_symbol,
        args.width.max(40),
    ))
}

/// Handle `salesdash summary`
pub fn handle_summary_command(
    collection: &SalesCollection,
    settings: &Settings,
    args: SummaryArgs,
) -> DashboardResult<()> {
    print!("{}", render_summary(collection, settings, &args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sales::tests::flat_year;

    fn collection() -> SalesCollection {
        SalesCollection::new(vec![flat_year(2024, 3_000), flat_year(2023, 2_000)]).unwrap()
    }

    #[test]
    fn test_summary_defaults_to_latest_year() {
        let collection = collection();
        let out = render_summary(&collection, &Settings::default(), &SummaryArgs::default())
            .unwrap();

        assert!(out.contains("Sales Overview - 2024"));
        assert!(out.contains("+50.0%"));
    }

    #[test]
    fn test_summary_options() {
        let collection = collection();
        let args = SummaryArgs {
            year: Some(2023),
            chart: Some(ChartType::Pie),
            threshold: Some("abc".into()),
            width: REPORT_WIDTH,
        };
        let out = render_summary(&collection, &Settings::default(), &args).unwrap();

        assert!(out.contains("Sales Overview - 2023 [Pie]"));
        assert!(out.contains("(0 months shown)"));
        assert!(out.contains("N/A"));
    }

    #[test]
    fn test_summary_unknown_year() {
        let collection = collection();
        let args = SummaryArgs {
            year: Some(1999),
            ..SummaryArgs::default()
        };
        let err = render_summary(&collection, &Settings::default(), &args).unwrap_err();
        assert!(err.is_not_found());
    }
}
