//! JSON Export functionality
//!
//! Exports the generated data set to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{SalesCollection, YearlySales};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data set export structure
#[derive(Debug, Clone, Serialize)]
pub struct DatasetExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Seed that reproduces this data set, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Every year in collection order, with totals
    pub years: &'a [YearlySales],
}

impl<'a> DatasetExport<'a> {
    pub fn new(collection: &'a SalesCollection, seed: Option<u64>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            seed,
            years: collection.years(),
        }
    }
}

/// Export the data set to JSON
pub fn export_json<W: Write>(
    collection: &SalesCollection,
    seed: Option<u64>,
    writer: &mut W,
    pretty: bool,
) -> DashboardResult<()> {
    let export = DatasetExport::new(collection, seed);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| DashboardError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| DashboardError::Export(e.to_string()))?;
    Ok(())
}
