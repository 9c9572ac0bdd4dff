//! YAML Export functionality
//!
//! Exports the generated data set to YAML for human-readable inspection.

use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::export::json::DatasetExport;
use crate::models::SalesCollection;

/// Export the data set to YAML
pub fn export_yaml<W: Write>(
    collection: &SalesCollection,
    seed: Option<u64>,
    writer: &mut W,
) -> DashboardResult<()> {
    let export = DatasetExport::new(collection, seed);

    writeln!(writer, "# salesdash data set export")
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    if let Some(seed) = seed {
        writeln!(writer, "# Regenerate with: salesdash --seed {}", seed)
            .map_err(|e| DashboardError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| DashboardError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
