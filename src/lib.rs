// ============================================================================
// Salary Ticker Library
// Live earnings computation and rolling-digit formatting
// ============================================================================

//! # Salary Ticker
//!
//! Computes how much of today's pay has been earned so far and turns the
//! amount into a digit sequence for an odometer-style display.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** for every money value
//! - **Day, overnight and weekday-only shifts** with half-open work windows
//! - **Volatile digit window** so only the digits that change every second
//!   animate, with placeholder nines below it
//! - **Currency table** with per-currency display profiles, including
//!   hyperinflated currencies
//! - **Optional tokio tick loop** (`async` feature) publishing snapshots
//!
//! ## Example
//!
//! ```rust
//! use salary_ticker::prelude::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let config = SalaryConfig::standard_office(dec!(10000));
//! let now = NaiveDate::from_ymd_opt(2024, 6, 10)
//!     .unwrap()
//!     .and_hms_opt(13, 0, 0)
//!     .unwrap();
//!
//! let earnings = compute_earnings(&config, now);
//! assert!(earnings.is_working);
//!
//! let formatter = DigitFormatter::default();
//! let number = formatter.format_for_display(
//!     earnings.amount,
//!     "USD",
//!     earnings.accrual_per_second,
//! );
//! println!("Earned so far: {}", number.to_display_string());
//! ```

pub mod display;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod ticker;

// Re-exports for convenience
pub mod prelude {
    pub use crate::display::{
        DigitCell, DigitFormatter, DisplayNumber, IntegerToken, RollerBank, Statistics,
        VolatileWindow,
    };
    pub use crate::domain::{
        ClockTime, ConfigError, CurrencyDisplayConfig, CurrencyInfo, CurrencyTable, Earnings,
        SalaryConfig, ShiftPhase, TimeInfo, WorkDayPolicy, WorkWindow,
    };
    pub use crate::engine::{compute_earnings, EarningsEngine};
    pub use crate::interfaces::{
        Clock, FixedClock, LoggingTickObserver, NoOpTickObserver, SystemClock, TickObserver,
    };
    pub use crate::numeric::{DigitPosition, PLACEHOLDER_DIGIT};
    pub use crate::ticker::{evaluate_tick, TickSnapshot, TickerConfig};

    #[cfg(feature = "async")]
    pub use crate::ticker::{spawn_ticker, TickerHandle};
}
