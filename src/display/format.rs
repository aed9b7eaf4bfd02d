//! Number and text formatting helpers shared by the TUI and text output

use crate::surface::LabelFormat;

const SI_PREFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

/// Format an integer with comma thousands separators (`869,000`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a value to two significant digits with an SI suffix (`870k`)
pub fn format_si2(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    if value.abs() < 1.0 {
        return format!("{:.2}", value);
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(exponent - 1);
    let rounded = (value / scale).round() * scale;
    // Rounding can carry into the next power of ten (99_500 -> 100_000)
    exponent = rounded.abs().log10().floor() as i32;

    let group = ((exponent / 3) as usize).min(SI_PREFIXES.len() - 1);
    let mantissa = rounded / 10f64.powi(3 * group as i32);
    let decimals = (1 - (exponent - 3 * group as i32)).max(0) as usize;

    format!("{:.*}{}", decimals, mantissa, SI_PREFIXES[group])
}

/// Format a chart value label
pub fn format_label(value: f64, format: LabelFormat) -> String {
    match format {
        LabelFormat::Auto => format!("{}", value),
        LabelFormat::Si2 => format_si2(value),
    }
}

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(869_000), "869,000");
        assert_eq!(format_thousands(658_700), "658,700");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(0), "0");
    }

    #[test]
    fn test_format_si2_merchant_counts() {
        assert_eq!(format_si2(292_634.0), "290k");
        assert_eq!(format_si2(632_681.0), "630k");
        assert_eq!(format_si2(869_000.0), "870k");
        assert_eq!(format_si2(606_660.0), "610k");
        assert_eq!(format_si2(658_700.0), "660k");
    }

    #[test]
    fn test_format_si2_small_and_carry() {
        assert_eq!(format_si2(1_500.0), "1.5k");
        assert_eq!(format_si2(99_500.0), "100k");
        assert_eq!(format_si2(37.9), "38");
        assert_eq!(format_si2(2_400_000.0), "2.4M");
    }

    #[test]
    fn test_format_label_auto() {
        assert_eq!(format_label(35.82, LabelFormat::Auto), "35.82");
        assert_eq!(format_label(43.5, LabelFormat::Auto), "43.5");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Executive Summary", 9), "Executiv…");
        assert_eq!(truncate("Usage", 9), "Usage");
    }
}
