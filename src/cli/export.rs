//! CLI command for data export
//!
//! Writes the dashboard tables as CSV, JSON or YAML to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::data::Datasets;
use crate::error::{DashboardError, DashboardResult};
use crate::export::{export_csv, export_json, export_yaml, DatasetSelection};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (one table per export)
    Csv,
    /// JSON envelope with the selected tables
    Json,
    /// YAML envelope with the selected tables
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// Table(s) to export
    #[arg(short, long, value_enum, default_value = "all")]
    pub dataset: DatasetSelection,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(data: &Datasets, args: ExportArgs) -> DashboardResult<()> {
    let selection = args.dataset;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                DashboardError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(data, args.format, selection, &mut writer, args.pretty)?;
            writer.flush()?;

            tracing::info!(
                format = ?args.format,
                dataset = %selection,
                path = %path.display(),
                "Exported dashboard data"
            );
            eprintln!("Exported {} to: {}", selection, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_export(data, args.format, selection, &mut lock, args.pretty)?;
            lock.flush()?;

            tracing::info!(format = ?args.format, dataset = %selection, "Exported dashboard data");
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    data: &Datasets,
    format: ExportFormat,
    selection: DatasetSelection,
    writer: &mut W,
    pretty: bool,
) -> DashboardResult<()> {
    match format {
        ExportFormat::Csv => export_csv(data, selection, writer),
        ExportFormat::Json => export_json(data, selection, writer, pretty),
        ExportFormat::Yaml => export_yaml(data, selection, writer),
    }
}
