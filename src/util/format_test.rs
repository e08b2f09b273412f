use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn format_price_pads_whole_numbers() {
    assert_eq!(format_price(Some(10.0)), "10,00");
}

#[test]
fn format_price_rounds_to_two_decimals() {
    assert_eq!(format_price(Some(9.999)), "10,00");
    assert_eq!(format_price(Some(249.9)), "249,90");
    assert_eq!(format_price(Some(0.125)), "0,13");
}

#[test]
fn format_price_rounds_stored_value_not_decimal_literal() {
    assert_eq!(format_price(Some(2.675)), "2,67");
    assert_eq!(format_price(Some(0.015)), "0,01");
    assert_eq!(format_price(Some(0.045)), "0,04");
    assert_eq!(format_price(Some(0.155)), "0,15");
}

#[test]
fn format_price_exact_halves_round_away_from_zero() {
    assert_eq!(format_price(Some(0.375)), "0,38");
    assert_eq!(format_price(Some(1.625)), "1,63");
    assert_eq!(format_price(Some(-0.125)), "-0,13");
}

#[test]
fn format_price_zero_has_no_sign() {
    assert_eq!(format_price(Some(0.0)), "0,00");
    assert_eq!(format_price(Some(-0.0)), "0,00");
}

#[test]
fn format_price_missing_is_empty() {
    assert_eq!(format_price(None), "");
}

#[test]
fn format_price_uses_single_comma_separator() {
    let out = format_price(Some(1234.5));
    assert_eq!(out, "1234,50");
    assert!(!out.contains('.'));
}

// =============================================================
// is_low_stock
// =============================================================

#[test]
fn low_stock_at_threshold() {
    assert!(is_low_stock(Some(3)));
    assert!(is_low_stock(Some(0)));
}

#[test]
fn low_stock_above_threshold_is_false() {
    assert!(!is_low_stock(Some(4)));
}

#[test]
fn low_stock_missing_quantity_is_false() {
    assert!(!is_low_stock(None));
}

// =============================================================
// input parsing
// =============================================================

#[test]
fn parse_price_input_blank_is_none() {
    assert_eq!(parse_price_input(""), None);
    assert_eq!(parse_price_input("   "), None);
}

#[test]
fn parse_price_input_reads_numbers() {
    assert_eq!(parse_price_input("10"), Some(10.0));
    assert_eq!(parse_price_input(" 12.5 "), Some(12.5));
    assert_eq!(parse_price_input("0"), Some(0.0));
}

#[test]
fn parse_price_input_rejects_garbage_and_infinity() {
    assert_eq!(parse_price_input("abc"), None);
    assert_eq!(parse_price_input("inf"), None);
}

#[test]
fn parse_quantity_input_reads_integers() {
    assert_eq!(parse_quantity_input("5"), Some(5));
    assert_eq!(parse_quantity_input("5.0"), Some(5));
    assert_eq!(parse_quantity_input("0"), Some(0));
    assert_eq!(parse_quantity_input(""), None);
}

#[test]
fn parse_quantity_input_truncates_fractions() {
    assert_eq!(parse_quantity_input("2.5"), Some(2));
    assert_eq!(parse_quantity_input("3.99"), Some(3));
    assert_eq!(parse_quantity_input("-1.5"), Some(-1));
}

#[test]
fn input_value_renders_missing_as_empty() {
    assert_eq!(input_value::<f64>(None), "");
    assert_eq!(input_value(Some(10.5)), "10.5");
    assert_eq!(input_value(Some(10.0)), "10");
    assert_eq!(input_value(Some(7_i64)), "7");
}
