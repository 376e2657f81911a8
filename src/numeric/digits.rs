// ============================================================================
// Digit Positions
// Positional digit arithmetic on decimal amounts
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Signed digit position.
///
/// Positive positions count integer digits from the units digit (1 = units,
/// 2 = tens, ...). Negative positions count fractional digits (-1 = tenths,
/// -2 = hundredths, ...). Zero is reserved for separators.
pub type DigitPosition = i32;

/// Digit rendered in positions that are frozen for display
pub const PLACEHOLDER_DIGIT: u8 = 9;

/// Fractional digits shown by the rolling display
pub const FIXED_DECIMALS: u32 = 5;

/// Largest scale a `Decimal` can carry
const MAX_SCALE: u32 = 28;

// ============================================================================
// Input Sanitising
// ============================================================================

/// Convert a floating-point input into a display-safe amount.
///
/// NaN, infinities, negative values and values outside the decimal range all
/// become zero.
pub fn sanitize_f64(value: f64) -> Decimal {
    if !value.is_finite() || value <= 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Clamp negative amounts (e.g. from clock skew) to zero
#[inline]
pub fn sanitize_decimal(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

// ============================================================================
// Positions
// ============================================================================

/// Position of the most significant non-zero digit of `value`.
///
/// # Examples
/// - `2` -> 1
/// - `565.256` -> 3
/// - `0.23` -> -1
/// - `0.00235` -> -3
/// - `0` -> 0
pub fn max_digit_position(value: Decimal) -> DigitPosition {
    let mut abs = value.abs();
    if abs.is_zero() {
        return 0;
    }

    if abs >= Decimal::ONE {
        let mut digits = 0;
        while abs >= Decimal::ONE {
            abs = (abs / Decimal::TEN).trunc();
            digits += 1;
        }
        digits
    } else {
        let mut position = 0;
        while abs < Decimal::ONE {
            abs *= Decimal::TEN;
            position -= 1;
        }
        position
    }
}

/// `10^exp` as a decimal, `None` beyond the representable range
fn pow10(exp: u32) -> Option<Decimal> {
    10i128
        .checked_pow(exp)
        .and_then(|p| Decimal::try_from_i128_with_scale(p, 0).ok())
}

// ============================================================================
// Fixed Formatting
// ============================================================================

/// Render `value` with exactly `places` fractional digits, rounding half away
/// from zero. No grouping separators.
pub fn format_to_fixed(value: Decimal, places: u32) -> String {
    let places = places.min(MAX_SCALE);
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    if rounded.is_zero() {
        // Drop the sign of a negative zero
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Digit at `position` in a string produced by [`format_to_fixed`].
///
/// Separators and sign characters in the integer part are skipped. Positions
/// beyond the rendered digits read as zero.
pub fn digit_in_fixed(fixed: &str, position: DigitPosition) -> u8 {
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed, ""));

    let digit = if position > 0 {
        integer
            .bytes()
            .rev()
            .filter(u8::is_ascii_digit)
            .nth((position - 1) as usize)
    } else if position < 0 {
        fraction.bytes().nth((-position - 1) as usize)
    } else {
        None
    };

    match digit {
        Some(b) if b.is_ascii_digit() => b - b'0',
        _ => 0,
    }
}

/// True digit of `|value|` at `position`, without rounding
pub fn digit_at_position(value: Decimal, position: DigitPosition) -> u8 {
    if position == 0 {
        return 0;
    }

    let abs = value.abs();
    let shifted = if position > 0 {
        pow10((position - 1) as u32).and_then(|divisor| abs.checked_div(divisor))
    } else {
        pow10((-position) as u32).and_then(|factor| abs.checked_mul(factor))
    };

    shifted
        .and_then(|s| (s.trunc() % Decimal::TEN).to_u8())
        .unwrap_or(0)
}
