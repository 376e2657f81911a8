// ============================================================================
// Domain Models Module
// Salary configuration, schedule, currencies and earnings results
// ============================================================================

pub mod clock_time;
pub mod config;
pub mod currency;
pub mod earnings;
pub mod errors;

pub use clock_time::{seconds_of_day, ClockTime, WorkWindow, SECONDS_PER_DAY};
pub use config::{
    parse_monthly_salary, parse_shift, parse_work_days, SalaryConfig, WorkDayPolicy,
    MAX_MONTHLY_SALARY,
};
pub use currency::{
    CurrencyClass, CurrencyDisplayConfig, CurrencyInfo, CurrencyTable, GlowIntensity,
    BASE_CURRENCY,
};
pub use earnings::{format_duration, Earnings, ShiftPhase, TimeInfo};
pub use errors::{ConfigError, ConfigResult};
