// ============================================================================
// Numeric Module
// Digit-level arithmetic for rolling displays
// ============================================================================
//
// This module provides:
// - DigitPosition: signed positional index into a decimal amount
// - max_digit_position / digit_at_position: exact positional reads
// - format_to_fixed / digit_in_fixed: fixed-width rendering and reads
// - sanitize_f64 / sanitize_decimal: coercion of untrusted inputs to zero
//
// All arithmetic is done on rust_decimal::Decimal, so no NaN can reach a
// display. Floating-point values are only accepted through sanitize_f64.

mod digits;

pub use digits::{
    digit_at_position, digit_in_fixed, format_to_fixed, max_digit_position, sanitize_decimal,
    sanitize_f64, DigitPosition, FIXED_DECIMALS, PLACEHOLDER_DIGIT,
};
