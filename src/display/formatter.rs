// ============================================================================
// Rolling Digit Formatter
// Positional digit sequence with frozen placeholders for a rolling display
// ============================================================================

use super::plain::{pad_integer, GROUP_SEPARATOR};
use super::volatile::VolatileWindow;
use crate::domain::{CurrencyDisplayConfig, CurrencyInfo, CurrencyTable};
use crate::numeric::{
    format_to_fixed, max_digit_position, sanitize_decimal, sanitize_f64, DigitPosition,
    FIXED_DECIMALS, PLACEHOLDER_DIGIT,
};
use arrayvec::ArrayVec;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Types
// ============================================================================

/// One rendered digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitCell {
    /// Value shown (0-9)
    pub digit: u8,

    /// Signed position (see [`DigitPosition`])
    pub position: DigitPosition,

    /// Inside the volatile window
    pub animate: bool,

    /// Shows the placeholder instead of the true digit
    pub placeholder: bool,
}

/// Element of the integer part: a digit or a grouping separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegerToken {
    Digit(DigitCell),
    Separator(char),
}

impl IntegerToken {
    /// Separators sit at position 0
    pub fn position(&self) -> DigitPosition {
        match self {
            IntegerToken::Digit(cell) => cell.position,
            IntegerToken::Separator(_) => 0,
        }
    }

    pub fn as_digit(&self) -> Option<&DigitCell> {
        match self {
            IntegerToken::Digit(cell) => Some(cell),
            IntegerToken::Separator(_) => None,
        }
    }

    fn as_char(&self) -> char {
        match self {
            IntegerToken::Digit(cell) => char::from(b'0' + cell.digit),
            IntegerToken::Separator(c) => *c,
        }
    }
}

/// Integer tokens, most significant first
pub type IntegerTokens = SmallVec<[IntegerToken; 24]>;

/// Fractional digits, tenths first
pub type DecimalDigits = ArrayVec<DigitCell, { FIXED_DECIMALS as usize }>;

/// A formatted amount ready for a rolling renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayNumber {
    pub integer_tokens: IntegerTokens,
    pub decimal_digits: DecimalDigits,
    pub show_decimal: bool,

    /// `None` when the accrual is zero: every digit is static and true
    pub volatile_window: Option<VolatileWindow>,

    /// Most significant position of the converted accrual (0 when zero)
    pub max_digit_position: DigitPosition,

    /// Amount in display currency
    pub converted_amount: Decimal,

    /// Accrual per second in display currency
    pub converted_accrual: Decimal,

    pub currency: CurrencyInfo,
    pub display: CurrencyDisplayConfig,
}

impl DisplayNumber {
    /// Animated positions, most significant first
    pub fn volatile_positions(&self) -> Vec<DigitPosition> {
        self.volatile_window
            .map(|window| window.positions().collect())
            .unwrap_or_default()
    }

    pub fn should_animate(&self, position: DigitPosition) -> bool {
        self.volatile_window
            .map(|window| window.contains(position))
            .unwrap_or(false)
    }

    /// All digit cells, most significant first
    pub fn digits(&self) -> impl Iterator<Item = &DigitCell> {
        self.integer_tokens
            .iter()
            .filter_map(IntegerToken::as_digit)
            .chain(self.decimal_digits.iter())
    }

    /// Cell at `position`, if rendered
    pub fn digit_at(&self, position: DigitPosition) -> Option<&DigitCell> {
        self.digits().find(|cell| cell.position == position)
    }

    pub fn digit_count(&self) -> usize {
        self.digits().count()
    }

    /// Rendered text without symbol, e.g. `0,000,625.99999`
    pub fn to_plain_string(&self) -> String {
        let mut text: String = self.integer_tokens.iter().map(IntegerToken::as_char).collect();
        if self.show_decimal {
            text.push('.');
            text.extend(self.decimal_digits.iter().map(|cell| char::from(b'0' + cell.digit)));
        }
        text
    }

    /// Rendered text prefixed with the currency symbol
    pub fn to_display_string(&self) -> String {
        format!("{}{}", self.currency.symbol, self.to_plain_string())
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// Converts base-currency amounts into rolling digit sequences
#[derive(Debug, Clone)]
pub struct DigitFormatter {
    table: Arc<CurrencyTable>,
}

impl DigitFormatter {
    /// Create a formatter over a shared currency table
    pub fn new(table: Arc<CurrencyTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CurrencyTable {
        &self.table
    }

    /// Format `amount_base` for display in `currency_code`.
    ///
    /// # Arguments
    /// * `amount_base` - Accumulated amount in base currency
    /// * `currency_code` - Display currency; unknown codes fall back to the
    ///   base currency and the default display profile
    /// * `accrual_per_second_base` - Accrual rate in base currency, decides
    ///   which positions animate
    ///
    /// Negative inputs are treated as zero.
    pub fn format_for_display(
        &self,
        amount_base: Decimal,
        currency_code: &str,
        accrual_per_second_base: Decimal,
    ) -> DisplayNumber {
        let currency = self.table.currency_or_base(currency_code);
        let display = *self.table.display_config(currency_code);

        let converted_amount = currency.convert(sanitize_decimal(amount_base));
        let converted_accrual = currency.convert(sanitize_decimal(accrual_per_second_base));

        let window = VolatileWindow::for_accrual(converted_accrual);
        let cell = |digit: u8, position: DigitPosition| -> DigitCell {
            let frozen = window.is_some_and(|w| w.is_frozen(position));
            DigitCell {
                digit: if frozen { PLACEHOLDER_DIGIT } else { digit },
                position,
                animate: window.is_some_and(|w| w.contains(position)),
                placeholder: frozen,
            }
        };

        let fixed = format_to_fixed(converted_amount, FIXED_DECIMALS);
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        // Pad before freezing so padded positions are frozen too
        let padded = pad_integer(integer, display.min_integer_digits);
        let len = padded.len();
        let group = display.show_separators && len > 3;

        let mut integer_tokens = IntegerTokens::new();
        for (i, b) in padded.bytes().enumerate() {
            let position = (len - i) as DigitPosition;
            if group && i > 0 && (len - i) % 3 == 0 {
                integer_tokens.push(IntegerToken::Separator(GROUP_SEPARATOR));
            }
            integer_tokens.push(IntegerToken::Digit(cell(b - b'0', position)));
        }

        let decimal_digits: DecimalDigits = fraction
            .bytes()
            .take(FIXED_DECIMALS as usize)
            .enumerate()
            .map(|(i, b)| cell(b - b'0', -(i as DigitPosition + 1)))
            .collect();

        DisplayNumber {
            integer_tokens,
            decimal_digits,
            show_decimal: true,
            volatile_window: window,
            max_digit_position: max_digit_position(converted_accrual),
            converted_amount,
            converted_accrual,
            currency: currency.clone(),
            display,
        }
    }

    /// Same as [`format_for_display`](Self::format_for_display) for
    /// floating-point inputs. NaN, infinities and negatives become zero.
    pub fn format_for_display_f64(
        &self,
        amount_base: f64,
        currency_code: &str,
        accrual_per_second_base: f64,
    ) -> DisplayNumber {
        self.format_for_display(
            sanitize_f64(amount_base),
            currency_code,
            sanitize_f64(accrual_per_second_base),
        )
    }
}

impl Default for DigitFormatter {
    fn default() -> Self {
        Self::new(Arc::new(CurrencyTable::builtin()))
    }
}
