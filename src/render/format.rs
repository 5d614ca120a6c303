//! Display formatting for metric values.
//!
//! The policy is deliberately magnitude-based: values of a million or more
//! render as compact currency, values under 100 in magnitude render with a
//! `%` suffix even when they are not conceptually percentages (a 42.0
//! per-share book value shows as "42.00%"). That is the shipped display
//! behavior and is preserved as-is.

pub const NOT_AVAILABLE: &str = "N/A";

pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v.abs() >= 1_000_000.0 => compact_currency(v),
        Some(v) if v.abs() < 100.0 => format!("{:.2}%", v),
        Some(v) => group_number(v),
    }
}

/// Metric key to table label: underscores become spaces, each word is
/// capitalized ("operating_income" -> "Operating Income").
pub fn display_name(metric: &str) -> String {
    metric
        .split('_')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compact US-currency notation with zero fraction digits: "$2M", "$1B".
fn compact_currency(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else {
        (abs / 1e6, "M")
    };

    let mut rounded = scaled.round();
    let mut suffix = suffix;
    // Rounding can carry into the next unit: 999,600,000 is "$1B", not "$1000M".
    if rounded >= 1000.0 && suffix != "T" {
        rounded = (rounded / 1000.0).round();
        suffix = if suffix == "M" { "B" } else { "T" };
    }
    format!("{}${}{}", sign, rounded as i64, suffix)
}

/// US-locale grouped number: thousands separators, two decimals when the
/// value is fractional, none when it is integral.
fn group_number(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    if abs.fract() == 0.0 {
        format!("{}{}", sign, group_thousands(&format!("{:.0}", abs)))
    } else {
        let formatted = format!("{:.2}", abs);
        let (int_part, dec_part) = formatted
            .split_once('.')
            .unwrap_or((formatted.as_str(), "00"));
        format!("{}{}.{}", sign, group_thousands(int_part), dec_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_none() {
        assert_eq!(format_value(None), "N/A");
    }

    #[test]
    fn test_format_value_compact_currency() {
        assert_eq!(format_value(Some(1_500_000.0)), "$2M");
        assert_eq!(format_value(Some(1_000_000.0)), "$1M");
        assert_eq!(format_value(Some(2_340_000_000.0)), "$2B");
        assert_eq!(format_value(Some(1.2e12)), "$1T");
        assert_eq!(format_value(Some(-3_000_000.0)), "-$3M");
        // rounding carries into the next unit
        assert_eq!(format_value(Some(999_600_000.0)), "$1B");
    }

    #[test]
    fn test_format_value_percent_under_100() {
        assert_eq!(format_value(Some(42.0)), "42.00%");
        assert_eq!(format_value(Some(12.345)), "12.35%");
        assert_eq!(format_value(Some(-7.5)), "-7.50%");
        assert_eq!(format_value(Some(0.0)), "0.00%");
    }

    #[test]
    fn test_format_value_grouped_number() {
        assert_eq!(format_value(Some(250.0)), "250");
        assert_eq!(format_value(Some(1_234.0)), "1,234");
        assert_eq!(format_value(Some(999_999.0)), "999,999");
        assert_eq!(format_value(Some(250.567)), "250.57");
        assert_eq!(format_value(Some(-4_500.0)), "-4,500");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("operating_income"), "Operating Income");
        assert_eq!(display_name("book_value_per_share"), "Book Value Per Share");
        assert_eq!(display_name("ebitda"), "Ebitda");
        assert_eq!(display_name("roe"), "Roe");
    }
}
