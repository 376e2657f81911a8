// ============================================================================
// Currency Table
// Exchange rates and per-currency display tuning
// ============================================================================

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code of the base currency all salaries are expressed in
pub const BASE_CURRENCY: &str = "CNY";

// ============================================================================
// Currency Info
// ============================================================================

/// Exchange information for one currency
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyInfo {
    /// ISO-style code (e.g. "USD")
    pub code: String,

    /// Symbol shown before the amount
    pub symbol: String,

    /// Human readable name
    pub display_name: String,

    /// Units of this currency per one unit of base currency
    pub rate: Decimal,
}

impl CurrencyInfo {
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            display_name: display_name.into(),
            rate,
        }
    }

    /// Convert a base-currency amount into this currency
    #[inline]
    pub fn convert(&self, base_amount: Decimal) -> Decimal {
        base_amount.checked_mul(self.rate).unwrap_or(Decimal::ZERO)
    }
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Emphasis tier for the rendered digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlowIntensity {
    High,
    Medium,
    #[default]
    Low,
}

/// Rough magnitude class of a currency's typical amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyClass {
    /// Hyperinflated or very low-value units (ZWL, IDR, VND)
    Mega,
    /// Large-unit currencies without minor units in practice (JPY, KRW)
    Large,
    /// Everything else
    Standard,
}

impl CurrencyClass {
    pub fn of(code: &str) -> Self {
        match code {
            "ZWL" | "IDR" | "VND" => CurrencyClass::Mega,
            "JPY" | "KRW" => CurrencyClass::Large,
            _ => CurrencyClass::Standard,
        }
    }
}

/// Per-currency animation and formatting parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyDisplayConfig {
    /// Maximum number of digits the display is tuned for
    pub max_digits: u8,

    /// Milliseconds per rolling step
    pub animation_speed_ms: u32,

    /// Emphasis tier
    pub glow: GlowIntensity,

    /// Stagger between neighbouring digit positions, in milliseconds
    pub scroll_delay_ms: u32,

    /// Group the integer part in thousands
    pub show_separators: bool,

    /// Decimal places used by the plain (non-rolling) formatter
    pub decimal_places: u32,

    /// Integer part is zero-padded to at least this many digits
    pub min_integer_digits: usize,
}

impl CurrencyDisplayConfig {
    /// Fallback profile for currencies without their own entry
    pub const DEFAULT: Self = Self {
        max_digits: 8,
        animation_speed_ms: 80,
        glow: GlowIntensity::Low,
        scroll_delay_ms: 20,
        show_separators: false,
        decimal_places: 2,
        min_integer_digits: 4,
    };

    const MEGA: Self = Self {
        max_digits: 12,
        animation_speed_ms: 50,
        glow: GlowIntensity::Medium,
        scroll_delay_ms: 12,
        show_separators: true,
        decimal_places: 0,
        min_integer_digits: 8,
    };

    const LARGE: Self = Self {
        max_digits: 10,
        animation_speed_ms: 60,
        glow: GlowIntensity::Low,
        scroll_delay_ms: 15,
        show_separators: true,
        decimal_places: 0,
        min_integer_digits: 6,
    };

    const HYPERINFLATED: Self = Self {
        max_digits: 16,
        animation_speed_ms: 40,
        glow: GlowIntensity::High,
        scroll_delay_ms: 8,
        show_separators: true,
        decimal_places: 0,
        min_integer_digits: 10,
    };
}

impl Default for CurrencyDisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Currency Table
// ============================================================================

/// Read-only lookup of currencies and their display profiles.
///
/// Built once and shared (usually behind an `Arc`) by every component that
/// converts or formats amounts.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyTable {
    currencies: HashMap<String, CurrencyInfo>,
    display: HashMap<String, CurrencyDisplayConfig>,
    default_display: CurrencyDisplayConfig,
    base: CurrencyInfo,
}

impl CurrencyTable {
    /// Empty table holding only the base currency
    pub fn new() -> Self {
        let base = CurrencyInfo::new(BASE_CURRENCY, "¥", "Chinese Yuan", Decimal::ONE);
        let mut currencies = HashMap::new();
        currencies.insert(base.code.clone(), base.clone());

        Self {
            currencies,
            display: HashMap::new(),
            default_display: CurrencyDisplayConfig::DEFAULT,
            base,
        }
    }

    /// Table with the built-in currencies and display profiles
    pub fn builtin() -> Self {
        let currencies = [
            ("USD", "$", "US Dollar", dec!(0.14)),
            ("EUR", "€", "Euro", dec!(0.13)),
            ("JPY", "¥", "Japanese Yen", dec!(20.8)),
            ("KRW", "₩", "South Korean Won", dec!(188.5)),
            ("GBP", "£", "British Pound", dec!(0.11)),
            ("HKD", "HK$", "Hong Kong Dollar", dec!(1.1)),
            ("TWD", "NT$", "New Taiwan Dollar", dec!(4.5)),
            ("SGD", "S$", "Singapore Dollar", dec!(0.19)),
            ("AUD", "A$", "Australian Dollar", dec!(0.21)),
            ("CAD", "C$", "Canadian Dollar", dec!(0.19)),
            ("CHF", "CHF", "Swiss Franc", dec!(0.13)),
            ("THB", "฿", "Thai Baht", dec!(5.1)),
            ("MYR", "RM", "Malaysian Ringgit", dec!(0.66)),
            ("IDR", "Rp", "Indonesian Rupiah", dec!(2180)),
            ("VND", "₫", "Vietnamese Dong", dec!(3500)),
            ("ZWL", "Z$", "Zimbabwean Dollar", dec!(45000000)),
        ];

        currencies
            .into_iter()
            .fold(Self::new(), |table, (code, symbol, name, rate)| {
                table.with_currency(CurrencyInfo::new(code, symbol, name, rate))
            })
            .with_display("ZWL", CurrencyDisplayConfig::HYPERINFLATED)
            .with_display("IDR", CurrencyDisplayConfig::MEGA)
            .with_display("VND", CurrencyDisplayConfig::MEGA)
            .with_display("JPY", CurrencyDisplayConfig::LARGE)
            .with_display("KRW", CurrencyDisplayConfig::LARGE)
    }

    /// Builder method: Add or replace a currency
    pub fn with_currency(mut self, info: CurrencyInfo) -> Self {
        if info.code == self.base.code {
            self.base = info.clone();
        }
        self.currencies.insert(info.code.clone(), info);
        self
    }

    /// Builder method: Add or replace a display profile
    pub fn with_display(mut self, code: impl Into<String>, config: CurrencyDisplayConfig) -> Self {
        self.display.insert(code.into(), config);
        self
    }

    /// Builder method: Replace the fallback display profile
    pub fn with_default_display(mut self, config: CurrencyDisplayConfig) -> Self {
        self.default_display = config;
        self
    }

    pub fn base(&self) -> &CurrencyInfo {
        &self.base
    }

    pub fn get(&self, code: &str) -> Option<&CurrencyInfo> {
        self.currencies.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// Look up a currency, falling back to the base currency (rate 1)
    pub fn currency_or_base(&self, code: &str) -> &CurrencyInfo {
        match self.currencies.get(code) {
            Some(info) => info,
            None => {
                tracing::debug!("Unknown currency {:?}, using {}", code, self.base.code);
                &self.base
            },
        }
    }

    /// Display profile for a currency, falling back to the default profile
    pub fn display_config(&self, code: &str) -> &CurrencyDisplayConfig {
        self.display.get(code).unwrap_or(&self.default_display)
    }

    /// All known currency codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::builtin()
    }
}
