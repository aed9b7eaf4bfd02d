//! Fiscal year labels
//!
//! Labels are display strings, not numbers. Their order is the order they
//! were authored in; sorting them as strings would be wrong for suffixed
//! labels like "2025 (Proj)".

use std::fmt;

use serde::Serialize;

const PROJECTION_SUFFIX: &str = "(Proj)";
const HALF_YEAR_SUFFIX: &str = "(HY)";

/// A fiscal year label such as `"2024"` or `"2025 (Proj)"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FiscalYear(&'static str);

impl FiscalYear {
    pub const fn new(label: &'static str) -> Self {
        Self(label)
    }

    pub fn label(&self) -> &'static str {
        self.0
    }

    /// True for analyst projections ("2025 (Proj)")
    pub fn is_projection(&self) -> bool {
        self.0.ends_with(PROJECTION_SUFFIX)
    }

    /// True for half-year actuals ("2025 (HY)")
    pub fn is_half_year(&self) -> bool {
        self.0.ends_with(HALF_YEAR_SUFFIX)
    }

    /// How the figures for this year were obtained, if not full-year actuals
    pub fn basis(&self) -> Option<&'static str> {
        if self.is_projection() {
            Some("analyst projection")
        } else if self.is_half_year() {
            Some("half-year actuals")
        } else {
            None
        }
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
