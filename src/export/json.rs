//! JSON export of the dashboard tables

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::DatasetSelection;
use crate::data::{Datasets, FinancialMetrics, MerchantCount, MerchantMetrics};
use crate::error::DashboardResult;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export envelope around the selected tables
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<FinancialMetrics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<MerchantMetrics>,

    /// Merchant table in long form (one row per year and merchant type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_long: Option<Vec<MerchantCount>>,
}

impl DashboardExport {
    /// Build an export of the selected tables
    pub fn from_datasets(data: &Datasets, selection: DatasetSelection) -> Self {
        let wants = |s: DatasetSelection| selection == s || selection == DatasetSelection::All;

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            financial: wants(DatasetSelection::Financial).then(|| data.financial.clone()),
            merchant: wants(DatasetSelection::Merchant).then(|| data.merchant.clone()),
            merchant_long: wants(DatasetSelection::MerchantLong).then(|| data.merchant.melt()),
        }
    }
}

/// Write the selected tables as JSON
pub fn export_json<W: Write>(
    data: &Datasets,
    selection: DatasetSelection,
    writer: &mut W,
    pretty: bool,
) -> DashboardResult<()> {
    let export = DashboardExport::from_datasets(data, selection);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }

    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::io;

    /// Rejects every write
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_json_error() {
        let err = export_json(&Datasets::build(), DatasetSelection::All, &mut BrokenPipe, false)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_export_all() {
        let mut buf = Vec::new();
        export_json(&Datasets::build(), DatasetSelection::All, &mut buf, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["financial"].as_array().unwrap().len(), 5);
        assert_eq!(value["merchant"].as_array().unwrap().len(), 3);
        assert_eq!(value["merchant_long"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_export_single_dataset_skips_others() {
        let mut buf = Vec::new();
        export_json(&Datasets::build(), DatasetSelection::Merchant, &mut buf, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.get("financial").is_none());
        assert!(value.get("merchant_long").is_none());
        assert_eq!(value["merchant"][2]["Fiscal_Year"], "2025 (HY)");
    }
}
