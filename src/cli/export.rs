//! CLI command for data export
//!
//! Writes the generated data set as JSON, YAML or CSV, to a file or stdout.

use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::DashboardResult;
use crate::export::{export_collection, ExportFormat};
use crate::models::SalesCollection;

/// Arguments for `salesdash export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export format: json, yaml or csv
    #[arg(short, long, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `salesdash export`
pub fn handle_export_command(
    collection: &SalesCollection,
    seed: Option<u64>,
    args: ExportArgs,
) -> DashboardResult<()> {
    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = File::create(&path)?;
            let mut writer = BufWriter::new(file);
            export_collection(args.format, collection, seed, &mut writer)?;
            writer.flush()?;

            eprintln!(
                "Exported {} years as {} to {}",
                collection.len(),
                args.format,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_collection(args.format, collection, seed, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
