//! FILENAME: core/engine/src/money.rs
//! PURPOSE: Cent rounding and currency display for monetary values.
//! CONTEXT: Prices and totals are plain f64 values kept at two decimal places.
//! Sums are taken in integer cents so that adding thousands of totals does not
//! accumulate binary floating point drift.

/// Rounds a value to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format a value as dollars with thousands separators, e.g. `$12,345.60`.
/// Negative values are shown in parentheses.
pub fn format_currency(value: f64) -> String {
    let formatted = add_thousands_separator(&format!("{:.2}", value.abs()));

    if value < 0.0 {
        format!("(${})", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Format a mean that may be undefined (no records), e.g. `$20.00` or `N/A`.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_currency(v),
        _ => "N/A".to_string(),
    }
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}
