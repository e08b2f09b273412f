//! Display formatting and form-input parsing for product fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Quantity at or below which a product is flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 3;

/// Format a price with two decimals and a comma separator (`10` → `10,00`).
/// Missing prices render as an empty string.
///
/// Rounds the exact stored value, so `2.675` (held as `2.67499...`) shows
/// `2,67`. Exactly representable halves (`0.125`, `0.375`) round away from zero.
pub fn format_price(price: Option<f64>) -> String {
    let Some(value) = price else {
        return String::new();
    };
    let value = if value == 0.0 { 0.0 } else { value };
    let formatted = if is_exact_cent_half(value) {
        let rounded = ((value.abs() * 100.0).ceil() / 100.0).copysign(value);
        format!("{rounded:.2}")
    } else {
        format!("{value:.2}")
    };
    formatted.replacen('.', ",", 1)
}

/// A value sits exactly between two cents only when it is an odd number of
/// eighths; no other binary fraction lands on a half cent.
fn is_exact_cent_half(value: f64) -> bool {
    let eighths = value.abs() * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

pub fn is_low_stock(quantity: Option<i64>) -> bool {
    quantity.is_some_and(|q| q <= LOW_STOCK_THRESHOLD)
}

/// Parse a price input. Blank or non-numeric input becomes `None`.
pub fn parse_price_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a quantity input. Fractions are truncated toward zero (`"2.5"` is
/// `2`), the same coercion the backend applies to integer fields.
pub fn parse_quantity_input(raw: &str) -> Option<i64> {
    let value = parse_price_input(raw)?.trunc();
    if value.abs() > 9_007_199_254_740_991.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let quantity = value as i64;
    Some(quantity)
}

/// Render an optional number back into a form input value.
pub fn input_value<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
