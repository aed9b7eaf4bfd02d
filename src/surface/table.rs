//! Raw tabular views

use crate::data::MerchantMetrics;

/// A titled grid of pre-formatted cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    /// The merchant table exactly as stored: wide form, raw integer counts
    pub fn merchant_raw(title: impl Into<String>, metrics: &MerchantMetrics) -> Self {
        let headers = ["Fiscal_Year", "Pochi_Active_Tills", "LNM_Active_Merchants"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        let rows = metrics
            .rows()
            .iter()
            .map(|r| {
                vec![
                    r.fiscal_year.to_string(),
                    r.pochi_active_tills.to_string(),
                    r.lnm_active_merchants.to_string(),
                ]
            })
            .collect();

        Self {
            title: title.into(),
            headers,
            rows,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
