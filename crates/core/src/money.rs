//! Money and quantity math.
//!
//! Amounts are integers in the smallest currency unit. Every function here is
//! total: missing inputs are treated as zero and nothing panics or returns a
//! non-finite value, so display code can call these unconditionally.

/// Format an amount for display: currency code, sign, thousands grouping.
///
/// A missing amount renders as zero. The currency code is prepended verbatim;
/// the caller decides between a symbol and an ISO code. Takes a signed
/// amount: catalog/cart figures are unsigned, but display-only deltas
/// (refunds, "you save" lines) can go below zero and must still format.
pub fn format_currency(amount: Option<i64>, currency: &str) -> String {
    let amount = amount.unwrap_or(0);
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{currency} {sign}{grouped}")
}

/// Percentage saved against a strike-through price, rounded to the nearest
/// whole percent.
///
/// Returns 0 when there is no original price or the original does not exceed
/// the current price (no discount to show).
pub fn discount_percent(original: Option<u64>, current: u64) -> u8 {
    let Some(original) = original else {
        return 0;
    };
    if original == 0 || original <= current {
        return 0;
    }

    let saved = original - current;
    // saved < original, so the result is always in 0..=100.
    ((saved as f64 * 100.0) / original as f64).round() as u8
}
