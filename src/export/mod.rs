//! Export module for salesdash
//!
//! Writes the generated data set in multiple formats:
//! - CSV: one row per month (spreadsheet-compatible)
//! - JSON: machine-readable with totals and schema version
//! - YAML: human-readable with a header comment

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{DashboardError, DashboardResult};
use crate::models::SalesCollection;

pub use self::csv::export_records_csv;
pub use json::{export_json, DatasetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(DashboardError::Validation(format!(
                "Unknown export format '{}' (expected json, yaml or csv)",
                other
            ))),
        }
    }
}

/// Write the collection in the given format
pub fn export_collection<W: Write>(
    format: ExportFormat,
    collection: &SalesCollection,
    seed: Option<u64>,
    writer: &mut W,
) -> DashboardResult<()> {
    log::info!("exporting {} years as {}", collection.len(), format);
    match format {
        ExportFormat::Json => export_json(collection, seed, writer, true),
        ExportFormat::Yaml => export_yaml(collection, seed, writer),
        ExportFormat::Csv => export_records_csv(collection, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
