//! Export module
//!
//! Writes the static dashboard tables out for use elsewhere:
//! - CSV: one table per file (spreadsheet-compatible)
//! - JSON: selected tables with an export envelope
//! - YAML: same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;

use clap::ValueEnum;

pub use self::csv::export_csv;
pub use json::{export_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Which table(s) an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DatasetSelection {
    /// Revenue, users, velocity, value and volume by fiscal year
    Financial,
    /// Pochi tills and LNM merchants by fiscal year
    Merchant,
    /// Merchant table reshaped to one row per year and merchant type
    #[value(alias = "merchant_long")]
    MerchantLong,
    /// Every table (JSON and YAML only)
    #[default]
    All,
}

impl DatasetSelection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Merchant => "merchant",
            Self::MerchantLong => "merchant-long",
            Self::All => "all",
        }
    }
}

impl fmt::Display for DatasetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_names_match_display() {
        for selection in DatasetSelection::value_variants() {
            let parsed = DatasetSelection::from_str(selection.name(), false).unwrap();
            assert_eq!(parsed, *selection);
            assert_eq!(parsed.to_string(), selection.name());
        }
        assert_eq!(
            DatasetSelection::from_str("merchant_long", false).unwrap(),
            DatasetSelection::MerchantLong
        );
        assert!(DatasetSelection::from_str("users", false).is_err());
    }
}
