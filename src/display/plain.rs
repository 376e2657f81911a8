// ============================================================================
// Plain Formatting
// Static (non-rolling) renderings: amounts, window titles, statistics
// ============================================================================

use crate::domain::{CurrencyClass, CurrencyTable, Earnings};
use crate::numeric::{format_to_fixed, sanitize_decimal};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grouping separator inserted between thousands
pub const GROUP_SEPARATOR: char = ',';

/// Application name appended to window titles
pub const APP_TITLE: &str = "Salary Ticker";

/// Insert a separator every three digits, counting from the right.
/// Strings of three digits or fewer are returned unchanged.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    if len <= 3 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Left-pad an integer digit string with zeros
pub fn pad_integer(digits: &str, min_digits: usize) -> String {
    format!("{:0>width$}", digits, width = min_digits)
}

// ============================================================================
// Plain Number
// ============================================================================

/// An amount formatted for static display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlainNumber {
    /// Zero-padded, optionally grouped integer part
    pub integer_part: String,

    /// Fractional digits (may be empty)
    pub decimal_part: String,

    pub show_decimal: bool,

    /// Amount in display currency
    pub converted_value: Decimal,
}

impl PlainNumber {
    pub fn to_plain_string(&self) -> String {
        if self.show_decimal {
            format!("{}.{}", self.integer_part, self.decimal_part)
        } else {
            self.integer_part.clone()
        }
    }
}

/// Format a base-currency amount in `code` without any digit freezing.
///
/// Standard currencies pick their decimal places from the converted
/// magnitude (4 below 1, 2 below 100, none above). Large and hyperinflated
/// currencies use their display profile.
pub fn format_currency_number(table: &CurrencyTable, amount: Decimal, code: &str) -> PlainNumber {
    let currency = table.currency_or_base(code);
    let display = table.display_config(code);
    let converted = currency.convert(sanitize_decimal(amount));

    let places = match CurrencyClass::of(code) {
        CurrencyClass::Standard if converted < Decimal::ONE => 4,
        CurrencyClass::Standard if converted < Decimal::ONE_HUNDRED => 2,
        CurrencyClass::Standard => 0,
        CurrencyClass::Mega | CurrencyClass::Large => display.decimal_places,
    };

    let fixed = format_to_fixed(converted, places);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let padded = pad_integer(integer, display.min_integer_digits);
    let integer_part = if display.show_separators {
        group_thousands(&padded)
    } else {
        padded
    };

    PlainNumber {
        integer_part,
        decimal_part: fraction.to_string(),
        show_decimal: places > 0 && !fraction.is_empty(),
        converted_value: converted,
    }
}

// ============================================================================
// Titles
// ============================================================================

/// `symbol + amount` with two decimals, e.g. `$28.28`
pub fn format_for_title(table: &CurrencyTable, amount: Decimal, code: &str) -> String {
    let currency = table.currency_or_base(code);
    let converted = currency.convert(sanitize_decimal(amount));
    format!("{}{}", currency.symbol, format_to_fixed(converted, 2))
}

/// Full window title for the current tick
pub fn title_line(table: &CurrencyTable, earnings: &Earnings, code: &str) -> String {
    let converted = table.currency_or_base(code).convert(earnings.amount);

    if converted > Decimal::ZERO {
        format!(
            "{} earned - {}",
            format_for_title(table, earnings.amount, code),
            APP_TITLE
        )
    } else if earnings.is_working {
        format!("On the clock - {}", APP_TITLE)
    } else {
        format!("Off the clock - {}", APP_TITLE)
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Daily and per-second pay in display currency
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Statistics {
    /// Pay per full shift, two decimals
    pub daily_salary: String,

    /// Pay per second of work, six decimals
    pub salary_per_second: String,
}

impl Statistics {
    pub fn new(table: &CurrencyTable, earnings: &Earnings, code: &str) -> Self {
        let currency = table.currency_or_base(code);
        Self {
            daily_salary: format!(
                "{}{}",
                currency.symbol,
                format_to_fixed(currency.convert(earnings.daily_salary), 2)
            ),
            salary_per_second: format!(
                "{}{}",
                currency.symbol,
                format_to_fixed(currency.convert(earnings.accrual_per_second), 6)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShiftPhase;
    use rust_decimal_macros::dec;

    fn working(amount: Decimal) -> Earnings {
        Earnings {
            amount,
            is_working: true,
            daily_salary: dec!(454.5454545454),
            accrual_per_second: dec!(0.0140291807),
            phase: ShiftPhase::OnShift,
            ..Earnings::neutral()
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("0009081900000"), "0,009,081,900,000");
    }

    #[test]
    fn test_pad_integer() {
        assert_eq!(pad_integer("202", 4), "0202");
        assert_eq!(pad_integer("12345", 4), "12345");
    }

    #[test]
    fn test_standard_currency_places() {
        let table = CurrencyTable::builtin();

        let small = format_currency_number(&table, dec!(0.5), "CNY");
        assert_eq!(small.to_plain_string(), "0000.5000");

        let medium = format_currency_number(&table, dec!(42.125), "CNY");
        assert_eq!(medium.to_plain_string(), "0042.13");

        let large = format_currency_number(&table, dec!(202.0202), "CNY");
        assert_eq!(large.to_plain_string(), "0202");
        assert!(!large.show_decimal);
    }

    #[test]
    fn test_mega_currency_grouping() {
        let table = CurrencyTable::builtin();
        let zwl = format_currency_number(&table, dec!(201.82), "ZWL");

        assert_eq!(zwl.converted_value, dec!(9081900000));
        assert_eq!(zwl.integer_part, "9,081,900,000");
        assert!(!zwl.show_decimal);

        let jpy = format_currency_number(&table, dec!(1), "JPY");
        assert_eq!(jpy.integer_part, "000,021");
    }

    #[test]
    fn test_title() {
        let table = CurrencyTable::builtin();
        assert_eq!(format_for_title(&table, dec!(202.0202), "USD"), "$28.28");
        assert_eq!(format_for_title(&table, dec!(-5), "CNY"), "¥0.00");

        assert_eq!(
            title_line(&table, &working(dec!(202.0202)), "CNY"),
            "¥202.02 earned - Salary Ticker"
        );
        assert_eq!(
            title_line(&table, &working(Decimal::ZERO), "CNY"),
            "On the clock - Salary Ticker"
        );
        assert_eq!(
            title_line(&table, &Earnings::neutral(), "CNY"),
            "Off the clock - Salary Ticker"
        );
    }

    #[test]
    fn test_statistics() {
        let table = CurrencyTable::builtin();
        let stats = Statistics::new(&table, &working(dec!(1)), "CNY");

        assert_eq!(stats.daily_salary, "¥454.55");
        assert_eq!(stats.salary_per_second, "¥0.014029");

        let neutral = Statistics::new(&table, &Earnings::neutral(), "USD");
        assert_eq!(neutral.daily_salary, "$0.00");
        assert_eq!(neutral.salary_per_second, "$0.000000");
    }
}
