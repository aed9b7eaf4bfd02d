//! Merchant (Lipa Na M-Pesa) metrics by fiscal year

use std::fmt;

use serde::Serialize;

use super::fiscal_year::FiscalYear;

/// Number of fiscal years in the merchant table
pub const MERCHANT_ROWS: usize = 3;

/// One fiscal year of merchant counts, in wide form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MerchantRecord {
    #[serde(rename = "Fiscal_Year")]
    pub fiscal_year: FiscalYear,
    /// Active Pochi La Biashara tills (informal)
    #[serde(rename = "Pochi_Active_Tills")]
    pub pochi_active_tills: u64,
    /// Active Lipa Na M-Pesa merchants (formal)
    #[serde(rename = "LNM_Active_Merchants")]
    pub lnm_active_merchants: u64,
}

impl MerchantRecord {
    /// Read the count for one merchant type
    pub fn count(&self, merchant_type: MerchantType) -> u64 {
        match merchant_type {
            MerchantType::Pochi => self.pochi_active_tills,
            MerchantType::LipaNaMpesa => self.lnm_active_merchants,
        }
    }
}

/// The two merchant products tracked in the wide table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MerchantType {
    #[serde(rename = "Pochi (Informal)")]
    Pochi,
    #[serde(rename = "Lipa Na M-Pesa (Formal)")]
    LipaNaMpesa,
}

impl MerchantType {
    /// Types in wide-table column order
    pub const ALL: [MerchantType; 2] = [MerchantType::Pochi, MerchantType::LipaNaMpesa];

    /// Column identifier in the wide table
    pub fn column_id(&self) -> &'static str {
        match self {
            Self::Pochi => "Pochi_Active_Tills",
            Self::LipaNaMpesa => "LNM_Active_Merchants",
        }
    }

    /// Human-readable label used in charts and the long table
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Pochi => "Pochi (Informal)",
            Self::LipaNaMpesa => "Lipa Na M-Pesa (Formal)",
        }
    }
}

impl fmt::Display for MerchantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

/// One (fiscal year, merchant type) pair in long form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MerchantCount {
    #[serde(rename = "Fiscal_Year")]
    pub fiscal_year: FiscalYear,
    #[serde(rename = "Merchant_Type")]
    pub merchant_type: MerchantType,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// The merchant table, in authored (chronological) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MerchantMetrics {
    rows: [MerchantRecord; MERCHANT_ROWS],
}

impl MerchantMetrics {
    /// Build the table from its embedded literals
    pub fn build() -> Self {
        let row = |fiscal_year, pochi_active_tills, lnm_active_merchants| MerchantRecord {
            fiscal_year: FiscalYear::new(fiscal_year),
            pochi_active_tills,
            lnm_active_merchants,
        };

        Self {
            rows: [
                row("2023", 292_634, 606_660),
                row("2024", 632_681, 633_000),
                row("2025 (HY)", 869_000, 658_700),
            ],
        }
    }

    pub fn rows(&self) -> &[MerchantRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fiscal year labels in authored order
    pub fn fiscal_years(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.fiscal_year.label().to_string())
            .collect()
    }

    /// Look up a row by its fiscal year label
    pub fn find(&self, fiscal_year: &str) -> Option<&MerchantRecord> {
        self.rows
            .iter()
            .find(|r| r.fiscal_year.label() == fiscal_year)
    }

    /// Reshape from wide to long form
    ///
    /// Yields one row per (merchant type, fiscal year), grouped by type in
    /// column order and by year in authored order within each type.
    pub fn melt(&self) -> Vec<MerchantCount> {
        MerchantType::ALL
            .iter()
            .flat_map(|&merchant_type| {
                self.rows.iter().map(move |row| MerchantCount {
                    fiscal_year: row.fiscal_year,
                    merchant_type,
                    count: row.count(merchant_type),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_and_order() {
        let metrics = MerchantMetrics::build();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics.fiscal_years(), vec!["2023", "2024", "2025 (HY)"]);
    }

    #[test]
    fn test_find_by_label() {
        let metrics = MerchantMetrics::build();
        let fy24 = metrics.find("2024").unwrap();
        assert_eq!(fy24.pochi_active_tills, 632_681);
        assert_eq!(fy24.lnm_active_merchants, 633_000);
        assert!(metrics.find("2022").is_none());
    }

    #[test]
    fn test_melt_yields_six_renamed_rows() {
        let long = MerchantMetrics::build().melt();
        assert_eq!(long.len(), 6);

        let labels: Vec<_> = long.iter().map(|r| r.merchant_type.display_label()).collect();
        assert_eq!(
            labels,
            vec![
                "Pochi (Informal)",
                "Pochi (Informal)",
                "Pochi (Informal)",
                "Lipa Na M-Pesa (Formal)",
                "Lipa Na M-Pesa (Formal)",
                "Lipa Na M-Pesa (Formal)",
            ]
        );

        let years: Vec<_> = long.iter().map(|r| r.fiscal_year.label()).collect();
        assert_eq!(
            years,
            vec!["2023", "2024", "2025 (HY)", "2023", "2024", "2025 (HY)"]
        );

        assert_eq!(long[2].count, 869_000);
        assert_eq!(long[5].count, 658_700);
    }

    #[test]
    fn test_long_form_serializes_display_labels() {
        let long = MerchantMetrics::build().melt();
        let json = serde_json::to_value(&long[3]).unwrap();
        assert_eq!(json["Merchant_Type"], "Lipa Na M-Pesa (Formal)");
        assert_eq!(json["Count"], 606_660);
    }
}
