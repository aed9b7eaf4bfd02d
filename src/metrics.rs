//! Growth arithmetic
//!
//! The merchant view computes a single figure at render time: period over
//! period percentage growth.

/// Percentage growth from `old` to `new`: `(new - old) / old * 100`
///
/// Returns `None` for a zero base.
pub fn growth_percent(old: f64, new: f64) -> Option<f64> {
    if old == 0.0 {
        return None;
    }
    Some((new - old) / old * 100.0)
}

/// Format a percentage to one decimal place, without the `%` sign
pub fn format_one_decimal(pct: f64) -> String {
    format!("{:.1}", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pochi_growth() {
        let pct = growth_percent(632_681.0, 869_000.0).unwrap();
        assert!((pct - 37.352).abs() < 0.001);
        assert_eq!(format_one_decimal(pct), "37.4");
    }

    #[test]
    fn test_negative_growth() {
        let pct = growth_percent(200.0, 150.0).unwrap();
        assert_eq!(format_one_decimal(pct), "-25.0");
    }

    #[test]
    fn test_zero_base() {
        assert_eq!(growth_percent(0.0, 10.0), None);
    }
}
