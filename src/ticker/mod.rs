// ============================================================================
// Ticker Module
// One evaluation of the earnings pipeline per tick
// ============================================================================
//
// Data flows one way: SalaryConfig -> compute_earnings -> DigitFormatter ->
// TickSnapshot -> observers/renderers. Nothing flows back, so a snapshot is
// a pure function of (config, currency table, now).

use crate::display::{title_line, DigitFormatter, DisplayNumber, Statistics};
use crate::domain::{Earnings, SalaryConfig, TimeInfo};
use crate::engine::compute_earnings;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "async")]
mod runtime;

#[cfg(feature = "async")]
pub use runtime::{spawn_ticker, TickerHandle};

/// Everything a presentation layer needs for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickSnapshot {
    /// Wall-clock time the snapshot was computed for
    pub at: NaiveDateTime,
    pub earnings: Earnings,
    pub display: DisplayNumber,
    pub statistics: Statistics,
    pub time_info: TimeInfo,
    /// Window/document title text
    pub title: String,
}

/// Run the pipeline once.
///
/// The accrual only reaches the formatter while on shift, so the display is
/// static (true digits, nothing animating) outside working hours.
pub fn evaluate_tick(
    config: &SalaryConfig,
    formatter: &DigitFormatter,
    now: NaiveDateTime,
) -> TickSnapshot {
    let earnings = compute_earnings(config, now);
    let accrual = if earnings.is_working {
        earnings.accrual_per_second
    } else {
        Decimal::ZERO
    };

    let display = formatter.format_for_display(earnings.amount, &config.currency, accrual);
    let statistics = Statistics::new(formatter.table(), &earnings, &config.currency);
    let title = title_line(formatter.table(), &earnings, &config.currency);
    let time_info = TimeInfo::new(&earnings, now);

    TickSnapshot {
        at: now,
        earnings,
        display,
        statistics,
        time_info,
        title,
    }
}

// ============================================================================
// Ticker Configuration
// ============================================================================

/// Settings for the periodic tick loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerConfig {
    /// Time between evaluations
    pub interval: Duration,
}

impl TickerConfig {
    /// Shortest accepted interval
    pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

    /// Builder method: Set tick interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.interval < Self::MIN_INTERVAL {
            return Err(format!(
                "Tick interval must be at least {:?}",
                Self::MIN_INTERVAL
            ));
        }
        Ok(())
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}
