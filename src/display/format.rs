//! Number formatting for terminal output
//!
//! Currency and counts are shown with thousands grouping and no decimals.

/// Group the digits of a whole number with commas ("1234567" -> "1,234,567")
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount as currency rounded to whole units
///
/// Non-finite amounts render as "N/A".
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }

    let rounded = amount.round();
    let magnitude = group_digits(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{}{}", symbol, magnitude)
    } else {
        format!("{}{}", symbol, magnitude)
    }
}

/// Format a count with thousands grouping
pub fn format_number(value: u64) -> String {
    group_digits(value)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
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

/// Format a threshold for display; NaN shows as such
pub fn format_threshold(threshold: f64) -> String {
    if threshold.is_nan() {
        "NaN".to_string()
    } else if threshold.fract() == 0.0 && threshold.is_finite() {
        format!("{:.0}", threshold)
    } else {
        threshold.to_string()
    }
}
