//! Number formatting helpers for terminal output.

/// One crore in absolute units.
const CRORE: f64 = 10_000_000.0;

/// Format an absolute amount as crore with two decimals.
pub fn format_crore(amount: f64) -> String {
    format!("{:.2} Cr", amount / CRORE)
}

/// Format a ratio with two decimals.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

/// Format an amount with thousands separators.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
