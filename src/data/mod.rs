//! Data provider
//!
//! The dashboard renders two static tables. They are built from embedded
//! literals on first use and cached for the life of the process; every
//! later call hands back the same allocation.

pub mod financial;
pub mod fiscal_year;
pub mod merchant;

use std::sync::OnceLock;

use serde::Serialize;

pub use financial::{FinancialMetrics, FinancialRecord, FINANCIAL_ROWS};
pub use fiscal_year::FiscalYear;
pub use merchant::{MerchantCount, MerchantMetrics, MerchantRecord, MerchantType, MERCHANT_ROWS};

/// Both tables the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datasets {
    pub financial: FinancialMetrics,
    pub merchant: MerchantMetrics,
}

impl Datasets {
    /// Construct a fresh copy of both tables
    pub fn build() -> Self {
        Self {
            financial: FinancialMetrics::build(),
            merchant: MerchantMetrics::build(),
        }
    }
}

static DATASETS: OnceLock<Datasets> = OnceLock::new();

/// Return the process-wide cached datasets, building them on first call
pub fn load() -> &'static Datasets {
    DATASETS.get_or_init(|| {
        let datasets = Datasets::build();
        tracing::debug!(
            financial_rows = datasets.financial.len(),
            merchant_rows = datasets.merchant.len(),
            "Populated dataset cache"
        );
        datasets
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_returns_expected_shapes() {
        let data = load();
        assert_eq!(data.financial.len(), FINANCIAL_ROWS);
        assert_eq!(data.merchant.len(), MERCHANT_ROWS);
    }

    #[test]
    fn test_load_is_cached() {
        let first = load();
        let second = load();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fresh_build_matches_cache() {
        assert_eq!(&Datasets::build(), load());
    }
}
