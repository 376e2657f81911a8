// ============================================================================
// Salary Configuration
// User-supplied pay and schedule settings evaluated on every tick
// ============================================================================

use super::clock_time::{ClockTime, WorkWindow};
use super::currency::CurrencyTable;
use super::errors::{ConfigError, ConfigResult};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest monthly salary accepted from the settings form
pub const MAX_MONTHLY_SALARY: Decimal = dec!(10000000);

/// Accepted range for working days in a month
pub const WORK_DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=31;

// ============================================================================
// Work Day Policy
// ============================================================================

/// Which calendar days count as working days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WorkDayPolicy {
    /// Every day of the week is a working day
    #[default]
    EveryDay,

    /// Only Monday through Friday are working days
    WeekdaysOnly,
}

impl WorkDayPolicy {
    /// Whether a shift starting on `date` earns anything
    pub fn is_work_day(&self, date: NaiveDate) -> bool {
        match self {
            WorkDayPolicy::EveryDay => true,
            WorkDayPolicy::WeekdaysOnly => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }
}

// ============================================================================
// Salary Configuration
// ============================================================================

/// Pay and schedule settings.
///
/// Times are kept as the raw strings the settings form produced. They are
/// parsed on every evaluation, so a malformed value yields a zero result
/// rather than an error in the tick loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SalaryConfig {
    /// Monthly pay in the base currency
    pub monthly_salary: Decimal,

    /// Number of paid working days per month (1-31)
    pub work_days_per_month: u32,

    /// Shift start, `HH:MM`
    pub start_time: String,

    /// Shift end, `HH:MM`. Earlier than start means an overnight shift.
    pub end_time: String,

    /// Display currency code (e.g. "CNY", "USD")
    pub currency: String,

    /// Which days count as working days
    pub work_day_policy: WorkDayPolicy,
}

impl SalaryConfig {
    /// Create a new configuration with required parameters
    pub fn new(
        monthly_salary: Decimal,
        work_days_per_month: u32,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            monthly_salary,
            work_days_per_month,
            start_time: start_time.into(),
            end_time: end_time.into(),
            currency: "CNY".to_string(),
            work_day_policy: WorkDayPolicy::EveryDay,
        }
    }

    /// Builder method: Set display currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder method: Set work day policy
    pub fn with_work_day_policy(mut self, policy: WorkDayPolicy) -> Self {
        self.work_day_policy = policy;
        self
    }

    /// Builder method: Set shift times
    pub fn with_shift(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Parse the configured shift
    pub fn work_window(&self) -> ConfigResult<WorkWindow> {
        WorkWindow::parse(&self.start_time, &self.end_time)
    }

    /// Pay for one full working day, `None` when work days is zero
    pub fn daily_salary(&self) -> Option<Decimal> {
        if self.work_days_per_month == 0 || self.monthly_salary < Decimal::ZERO {
            return None;
        }
        self.monthly_salary
            .checked_div(Decimal::from(self.work_days_per_month))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.monthly_salary < Decimal::ZERO || self.monthly_salary > MAX_MONTHLY_SALARY {
            return Err(ConfigError::SalaryOutOfRange);
        }

        if !WORK_DAYS_RANGE.contains(&self.work_days_per_month) {
            return Err(ConfigError::WorkDaysOutOfRange);
        }

        let window = self.work_window()?;
        if window.length_seconds() == 0 {
            return Err(ConfigError::ZeroLengthShift);
        }

        if self.currency.trim().is_empty() {
            return Err(ConfigError::UnknownCurrency(self.currency.clone()));
        }

        Ok(())
    }

    /// Validate the configuration and require the display currency to be
    /// present in `table`
    pub fn validate_with(&self, table: &CurrencyTable) -> ConfigResult<()> {
        self.validate()?;
        if !table.contains(&self.currency) {
            return Err(ConfigError::UnknownCurrency(self.currency.clone()));
        }
        Ok(())
    }
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self::standard_office(dec!(10000))
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl SalaryConfig {
    /// Office hours
    /// - 22 working days
    /// - 09:00 to 18:00, every day
    pub fn standard_office(monthly_salary: Decimal) -> Self {
        Self::new(monthly_salary, 22, "09:00", "18:00")
    }

    /// Night shift
    /// - 22 working days, Monday to Friday starts
    /// - 22:00 to 06:00 (crosses midnight)
    pub fn night_shift(monthly_salary: Decimal) -> Self {
        Self::new(monthly_salary, 22, "22:00", "06:00")
            .with_work_day_policy(WorkDayPolicy::WeekdaysOnly)
    }
}

// ============================================================================
// Settings Input Parsing
// ============================================================================

/// Parse a monthly salary typed into the settings form (0..=10,000,000)
pub fn parse_monthly_salary(raw: &str) -> ConfigResult<Decimal> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSalary(raw.to_string()))?;

    if value < Decimal::ZERO || value > MAX_MONTHLY_SALARY {
        return Err(ConfigError::SalaryOutOfRange);
    }
    Ok(value)
}

/// Parse a work-days count typed into the settings form (1..=31)
pub fn parse_work_days(raw: &str) -> ConfigResult<u32> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::WorkDaysOutOfRange)?;

    if !WORK_DAYS_RANGE.contains(&value) {
        return Err(ConfigError::WorkDaysOutOfRange);
    }
    Ok(value)
}

/// Parse both shift times typed into the settings form
pub fn parse_shift(start: &str, end: &str) -> ConfigResult<(ClockTime, ClockTime)> {
    Ok((ClockTime::parse(start)?, ClockTime::parse(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = SalaryConfig::new(dec!(10000), 22, "09:00", "18:00");

        assert_eq!(config.currency, "CNY");
        assert_eq!(config.work_day_policy, WorkDayPolicy::EveryDay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SalaryConfig::standard_office(dec!(8000))
            .with_currency("USD")
            .with_shift("08:00", "17:30")
            .with_work_day_policy(WorkDayPolicy::WeekdaysOnly);

        assert_eq!(config.currency, "USD");
        assert_eq!(config.start_time, "08:00");
        assert_eq!(config.work_window().unwrap().length_seconds(), 34_200);
        assert_eq!(config.work_day_policy, WorkDayPolicy::WeekdaysOnly);
    }

    #[test]
    fn test_validation() {
        let base = SalaryConfig::default();

        let mut config = base.clone();
        config.work_days_per_month = 0;
        assert_eq!(config.validate(), Err(ConfigError::WorkDaysOutOfRange));

        let mut config = base.clone();
        config.monthly_salary = dec!(-1);
        assert_eq!(config.validate(), Err(ConfigError::SalaryOutOfRange));

        let config = base.clone().with_shift("09:00", "09:00");
        assert_eq!(config.validate(), Err(ConfigError::ZeroLengthShift));

        let config = base.clone().with_shift("9am", "18:00");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTime("9am".to_string()))
        );

        let config = base.with_currency(" ");
        assert!(matches!(config.validate(), Err(ConfigError::UnknownCurrency(_))));
    }

    #[test]
    fn test_validate_against_currency_table() {
        let table = CurrencyTable::builtin();

        assert!(SalaryConfig::default().validate_with(&table).is_ok());
        assert!(SalaryConfig::default()
            .with_currency("ZWL")
            .validate_with(&table)
            .is_ok());

        let unknown = SalaryConfig::default().with_currency("XYZ");
        assert!(unknown.validate().is_ok());
        assert_eq!(
            unknown.validate_with(&table),
            Err(ConfigError::UnknownCurrency("XYZ".to_string()))
        );

        // Structural errors are reported first
        let broken = unknown.with_shift("09:00", "09:00");
        assert_eq!(broken.validate_with(&table), Err(ConfigError::ZeroLengthShift));
    }

    #[test]
    fn test_daily_salary() {
        let config = SalaryConfig::default();
        let daily = config.daily_salary().unwrap();
        assert!((daily - dec!(454.545454)).abs() < dec!(0.000001));

        let mut zero_days = config.clone();
        zero_days.work_days_per_month = 0;
        assert_eq!(zero_days.daily_salary(), None);
    }

    #[test]
    fn test_preset_configs() {
        let night = SalaryConfig::night_shift(dec!(12000));
        assert!(night.work_window().unwrap().crosses_midnight());
        assert_eq!(night.work_day_policy, WorkDayPolicy::WeekdaysOnly);
        assert!(night.validate().is_ok());
    }

    #[test]
    fn test_work_day_policy() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        assert!(WorkDayPolicy::EveryDay.is_work_day(saturday));
        assert!(!WorkDayPolicy::WeekdaysOnly.is_work_day(saturday));
        assert!(WorkDayPolicy::WeekdaysOnly.is_work_day(monday));
    }

    #[test]
    fn test_parse_settings_input() {
        assert_eq!(parse_monthly_salary(" 12000.50 "), Ok(dec!(12000.50)));
        assert_eq!(
            parse_monthly_salary("lots"),
            Err(ConfigError::InvalidSalary("lots".to_string()))
        );
        assert_eq!(
            parse_monthly_salary("10000001"),
            Err(ConfigError::SalaryOutOfRange)
        );

        assert_eq!(parse_work_days("22"), Ok(22));
        assert_eq!(parse_work_days("0"), Err(ConfigError::WorkDaysOutOfRange));
        assert_eq!(parse_work_days("32"), Err(ConfigError::WorkDaysOutOfRange));

        let (start, end) = parse_shift("22:00", "06:00").unwrap();
        assert!(end < start);
    }
}
