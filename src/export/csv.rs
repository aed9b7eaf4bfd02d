//! CSV export of a single dashboard table
//!
//! Column headers use the original table column names
//! (`Fiscal_Year`, `Revenue_Bn`, ...).

use std::io::Write;

use serde::Serialize;

use super::DatasetSelection;
use crate::data::Datasets;
use crate::error::{DashboardError, DashboardResult};

/// Write one table as CSV
///
/// CSV holds a single table, so `DatasetSelection::All` is rejected.
pub fn export_csv<W: Write>(
    data: &Datasets,
    selection: DatasetSelection,
    writer: W,
) -> DashboardResult<()> {
    match selection {
        DatasetSelection::Financial => write_rows(data.financial.rows(), writer),
        DatasetSelection::Merchant => write_rows(data.merchant.rows(), writer),
        DatasetSelection::MerchantLong => write_rows(&data.merchant.melt(), writer),
        DatasetSelection::All => Err(DashboardError::Export(
            "CSV export holds one table; choose --dataset financial, merchant or merchant-long"
                .into(),
        )),
    }
}

fn write_rows<T: Serialize, W: Write>(rows: &[T], writer: W) -> DashboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(selection: DatasetSelection) -> DashboardResult<String> {
        let mut buf = Vec::new();
        export_csv(&Datasets::build(), selection, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_financial_csv() {
        let text = export(DatasetSelection::Financial).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Fiscal_Year,Revenue_Bn,Active_Users_M,Txn_Velocity_Monthly,Total_Txn_Value_Trn,Total_Txn_Volume_Bn"
        );
        assert!(lines[5].starts_with("2025 (Proj),161.12,35.82,37.9"));
    }

    #[test]
    fn test_merchant_long_csv() {
        let text = export(DatasetSelection::MerchantLong).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Fiscal_Year,Merchant_Type,Count");
        assert_eq!(lines[1], "2023,Pochi (Informal),292634");
        assert_eq!(lines[6], "2025 (HY),Lipa Na M-Pesa (Formal),658700");
    }

    #[test]
    fn test_all_rejected() {
        let err = export(DatasetSelection::All).unwrap_err();
        assert!(matches!(err, DashboardError::Export(_)));
    }
}
