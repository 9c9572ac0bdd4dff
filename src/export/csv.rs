//! CSV Export functionality
//!
//! Exports one row per month per year, spreadsheet-compatible.

use serde::Serialize;
use std::io::Write;

use crate::error::DashboardResult;
use crate::models::{Month, SalesCollection};

#[derive(Serialize)]
struct CsvRow {
    year: i32,
    month: Month,
    sales: u64,
    profit: u64,
    orders: u64,
}

/// Export every monthly record to CSV
pub fn export_records_csv<W: Write>(collection: &SalesCollection, writer: W) -> DashboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for year in collection.years() {
        for record in year.data() {
            csv_writer.serialize(CsvRow {
                year: year.year(),
                month: record.month,
                sales: record.sales,
                profit: record.profit,
                orders: record.orders,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
