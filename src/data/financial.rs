//! Financial and usage metrics by fiscal year
//!
//! Figures are taken from the Safaricom annual reports (FY21-FY24) and the
//! HY25 investor briefing. FY25 is HY25 actuals annualized plus analyst
//! projections.

use serde::Serialize;

use super::fiscal_year::FiscalYear;

/// Number of fiscal years in the financial table
pub const FINANCIAL_ROWS: usize = 5;

/// One fiscal year of M-Pesa financials and usage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialRecord {
    #[serde(rename = "Fiscal_Year")]
    pub fiscal_year: FiscalYear,
    /// Revenue in KES billions
    #[serde(rename = "Revenue_Bn")]
    pub revenue_bn: f64,
    /// One-month active customers in millions
    #[serde(rename = "Active_Users_M")]
    pub active_users_m: f64,
    /// Transactions per active user per month
    #[serde(rename = "Txn_Velocity_Monthly")]
    pub txn_velocity_monthly: f64,
    /// Total transaction value in KES trillions
    #[serde(rename = "Total_Txn_Value_Trn")]
    pub total_txn_value_trn: f64,
    /// Total transaction volume in billions
    #[serde(rename = "Total_Txn_Volume_Bn")]
    pub total_txn_volume_bn: f64,
}

impl FinancialRecord {
    const fn new(
        fiscal_year: &'static str,
        revenue_bn: f64,
        active_users_m: f64,
        txn_velocity_monthly: f64,
        total_txn_value_trn: f64,
        total_txn_volume_bn: f64,
    ) -> Self {
        Self {
            fiscal_year: FiscalYear::new(fiscal_year),
            revenue_bn,
            active_users_m,
            txn_velocity_monthly,
            total_txn_value_trn,
            total_txn_volume_bn,
        }
    }
}

/// The financial table, in authored (chronological) order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FinancialMetrics {
    rows: [FinancialRecord; FINANCIAL_ROWS],
}

impl FinancialMetrics {
    /// Build the table from its embedded literals
    pub fn build() -> Self {
        Self {
            rows: [
                FinancialRecord::new("2021", 82.65, 28.31, 16.2, 22.04, 11.68),
                FinancialRecord::new("2022", 107.69, 30.53, 20.3, 29.55, 15.75),
                FinancialRecord::new("2023", 117.19, 32.11, 23.5, 35.86, 21.03),
                FinancialRecord::new("2024", 139.91, 32.41, 31.5, 40.24, 28.33),
                FinancialRecord::new("2025 (Proj)", 161.12, 35.82, 37.9, 43.50, 37.20),
            ],
        }
    }

    pub fn rows(&self) -> &[FinancialRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The final row: the FY25 projection
    pub fn latest(&self) -> &FinancialRecord {
        &self.rows[FINANCIAL_ROWS - 1]
    }

    /// Fiscal year labels in authored order
    pub fn fiscal_years(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.fiscal_year.label().to_string())
            .collect()
    }

    /// Extract one numeric column, preserving row order
    pub fn column(&self, field: impl Fn(&FinancialRecord) -> f64) -> Vec<f64> {
        self.rows.iter().map(field).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_and_order() {
        let metrics = FinancialMetrics::build();
        assert_eq!(metrics.len(), 5);
        assert_eq!(
            metrics.fiscal_years(),
            vec!["2021", "2022", "2023", "2024", "2025 (Proj)"]
        );
    }

    #[test]
    fn test_latest_is_projection() {
        let metrics = FinancialMetrics::build();
        let latest = metrics.latest();
        assert!(latest.fiscal_year.is_projection());
        assert_eq!(latest.revenue_bn, 161.12);
        assert_eq!(latest.active_users_m, 35.82);
        assert_eq!(latest.txn_velocity_monthly, 37.9);
        assert_eq!(latest.total_txn_value_trn, 43.50);
        assert_eq!(latest.total_txn_volume_bn, 37.20);
    }

    #[test]
    fn test_column_values() {
        let metrics = FinancialMetrics::build();
        assert_eq!(
            metrics.column(|r| r.revenue_bn),
            vec![82.65, 107.69, 117.19, 139.91, 161.12]
        );
        assert_eq!(
            metrics.column(|r| r.total_txn_volume_bn),
            vec![11.68, 15.75, 21.03, 28.33, 37.20]
        );
    }

    #[test]
    fn test_serialized_column_names() {
        let metrics = FinancialMetrics::build();
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json[0]["Fiscal_Year"], "2021");
        assert_eq!(json[4]["Txn_Velocity_Monthly"], 37.9);
    }
}
