//! YAML export of the dashboard tables

use std::io::Write;

use super::json::DashboardExport;
use super::DatasetSelection;
use crate::data::Datasets;
use crate::error::DashboardResult;

/// Write the selected tables as YAML with a short comment header
pub fn export_yaml<W: Write>(
    data: &Datasets,
    selection: DatasetSelection,
    writer: &mut W,
) -> DashboardResult<()> {
    let export = DashboardExport::from_datasets(data, selection);

    writeln!(writer, "# M-Pesa Dashboard Data Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(
        writer,
        "# Source: Safaricom Annual Reports (FY21-FY24) & HY25 Investor Briefing"
    )?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
