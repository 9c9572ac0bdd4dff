//! Dashboard composition
//!
//! Combines the immutable sales collection with the user's year selection
//! and chart state, and derives everything the dashboard shows: metric
//! cards, year-over-year growth, year comparison panels and the chart.

use std::fmt;

use serde::Serialize;

use crate::display::format::{format_currency, format_number};
use crate::models::{ChartState, ChartType, Month, SalesCollection, SalesTotals, YearlySales};
use crate::services::filter::{pie_projection, visible_records, PieSlice};

/// Months in a year, used for per-month averages
const MONTHS_PER_YEAR: f64 = 12.0;

/// Year-over-year change in total sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Growth {
    /// Percentage change against the preceding year
    Change(f64),
    /// No preceding year (or it had no sales) to compare against
    NotApplicable,
}

impl Growth {
    /// Whether the change is zero or positive
    pub fn is_up(&self) -> bool {
        matches!(self, Growth::Change(pct) if *pct >= 0.0)
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Growth::Change(pct) if *pct > 0.0 => write!(f, "+{:.1}%", pct),
            Growth::Change(pct) => write!(f, "{:.1}%", pct),
            Growth::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Derived figures for the selected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub year: i32,
    pub totals: SalesTotals,
    /// Profit as a percentage of sales; None when there were no sales
    pub margin_pct: Option<f64>,
    /// Orders per month, rounded
    pub avg_orders_per_month: u64,
    /// Sales per order; None when there were no orders
    pub avg_order_value: Option<f64>,
    pub growth: Growth,
}

/// One summary card at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub trend: String,
    pub trend_up: bool,
}

/// Totals for one year in the comparison strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPanel {
    pub year: i32,
    pub totals: SalesTotals,
    pub selected: bool,
}

/// Sales and profit for one month of a bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPoint {
    pub month: Month,
    pub sales: u64,
    pub profit: u64,
}

/// A named line series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<(Month, u64)>,
}

/// What the chart area should draw for the current chart type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRendering {
    /// Grouped sales and profit bars per month
    Bar { points: Vec<MonthPoint> },
    /// Sales and profit line series
    Line { sales: Series, profit: Series },
    /// Slices of sales by month
    Pie { slices: Vec<PieSlice>, total: u64 },
}

impl ChartRendering {
    /// The chart type this rendering was built for
    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartRendering::Bar { .. } => ChartType::Bar,
            ChartRendering::Line { .. } => ChartType::Line,
            ChartRendering::Pie { .. } => ChartType::Pie,
        }
    }

    /// Number of months drawn
    pub fn month_count(&self) -> usize {
        match self {
            ChartRendering::Bar { points } => points.len(),
            ChartRendering::Line { sales, .. } => sales.points.len(),
            ChartRendering::Pie { slices, .. } => slices.len(),
        }
    }
}

/// Dashboard state over a borrowed sales collection
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    collection: &'a SalesCollection,
    selected_year: i32,
    chart: ChartState,
}

impl<'a> Dashboard<'a> {
    /// Start on the most recent year with the default chart state
    pub fn new(collection: &'a SalesCollection) -> Self {
        Self::with_chart_state(collection, ChartState::default())
    }

    pub fn with_chart_state(collection: &'a SalesCollection, chart: ChartState) -> Self {
        Self {
            collection,
            selected_year: collection.latest().year(),
            chart,
        }
    }

    pub fn collection(&self) -> &'a SalesCollection {
        self.collection
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// Select a year. Unknown years are stored as-is; lookups fall back.
    pub fn select_year(&mut self, year: i32) {
        log::debug!("selected year {}", year);
        self.selected_year = year;
    }

    /// Select the year `offset` positions away in collection order, wrapping
    pub fn cycle_year(&mut self, offset: isize) {
        let len = self.collection.len() as isize;
        let current = self
            .collection
            .position(self.current_year_data().year())
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        self.select_year(self.collection.years()[next].year());
    }

    pub fn chart_state(&self) -> &ChartState {
        &self.chart
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart.chart_type()
    }

    pub fn threshold(&self) -> f64 {
        self.chart.threshold()
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart.set_chart_type(chart_type);
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.chart.set_threshold(threshold);
    }

    /// Data for the selected year, or the most recent year if it is unknown
    pub fn current_year_data(&self) -> &'a YearlySales {
        self.collection.get_or_latest(self.selected_year)
    }

    /// Sales change of `year` against the year before it in the collection
    pub fn growth(&self, year: i32) -> Growth {
        // The earliest year has nothing to compare against
        if year <= self.collection.earliest().year() {
            return Growth::NotApplicable;
        }

        let (Some(current), Some(previous)) =
            (self.collection.find(year), self.collection.previous(year))
        else {
            return Growth::NotApplicable;
        };

        if previous.total_sales() == 0 {
            return Growth::NotApplicable;
        }

        let current = current.total_sales() as f64;
        let previous = previous.total_sales() as f64;
        Growth::Change((current - previous) * 100.0 / previous)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        let data = self.current_year_data();
        let totals = data.totals();

        let margin_pct = (totals.total_sales > 0)
            .then(|| totals.total_profit as f64 / totals.total_sales as f64 * 100.0);
        let avg_order_value = (totals.total_orders > 0)
            .then(|| totals.total_sales as f64 / totals.total_orders as f64);

        DashboardMetrics {
            year: data.year(),
            totals,
            margin_pct,
            avg_orders_per_month: (totals.total_orders as f64 / MONTHS_PER_YEAR).round() as u64,
            avg_order_value,
            growth: self.growth(data.year()),
        }
    }

    /// The four summary cards, formatted with `currency`
    pub fn metric_cards(&self, currency: &str) -> [MetricCard; 4] {
        let m = self.metrics();

        let margin = match m.margin_pct {
            Some(pct) => format!("{:.1}% margin", pct),
            None => "N/A margin".to_string(),
        };

        let (aov, aov_trend) = match m.avg_order_value {
            Some(value) => (format_currency(value, currency), "per order".to_string()),
            None => ("N/A".to_string(), "no orders".to_string()),
        };

        [
            MetricCard {
                title: "Total Sales",
                value: format_currency(m.totals.total_sales as f64, currency),
                trend: m.growth.to_string(),
                trend_up: m.growth.is_up(),
            },
            MetricCard {
                title: "Total Profit",
                value: format_currency(m.totals.total_profit as f64, currency),
                trend: margin,
                trend_up: m.margin_pct.is_some(),
            },
            MetricCard {
                title: "Total Orders",
                value: format_number(m.totals.total_orders),
                trend: format!("{} avg/month", format_number(m.avg_orders_per_month)),
                trend_up: true,
            },
            MetricCard {
                title: "Avg Order Value",
                value: aov,
                trend: aov_trend,
                trend_up: m.avg_order_value.is_some(),
            },
        ]
    }

    /// One panel per year in collection order
    pub fn year_panels(&self) -> Vec<YearPanel> {
        let selected = self.current_year_data().year();
        self.collection
            .years()
            .iter()
            .map(|y| YearPanel {
                year: y.year(),
                totals: y.totals(),
                selected: y.year() == selected,
            })
            .collect()
    }

    /// Chart title for the selected year
    pub fn chart_title(&self) -> String {
        format!("Sales Overview - {}", self.current_year_data().year())
    }

    /// Chart caption with the number of months passing the threshold
    pub fn chart_caption(&self) -> String {
        format!(
            "Monthly sales and profit data ({} months shown)",
            visible_records(&self.chart, self.current_year_data().data()).len()
        )
    }

    /// Build the rendering for the active chart type from the filtered records
    pub fn chart(&self) -> ChartRendering {
        let records = visible_records(&self.chart, self.current_year_data().data());

        match self.chart.chart_type() {
            ChartType::Bar => ChartRendering::Bar {
                points: records
                    .iter()
                    .map(|r| MonthPoint {
                        month: r.month,
                        sales: r.sales,
                        profit: r.profit,
                    })
                    .collect(),
            },
            ChartType::Line => ChartRendering::Line {
                sales: Series {
                    name: "Sales ($)",
                    points: records.iter().map(|r| (r.month, r.sales)).collect(),
                },
                profit: Series {
                    name: "Profit ($)",
                    points: records.iter().map(|r| (r.month, r.profit)).collect(),
                },
            },
            ChartType::Pie => {
                let slices = pie_projection(&records);
                let total = slices.iter().map(|s| s.value).sum();
                ChartRendering::Pie { slices, total }
            }
        }
    }
}
