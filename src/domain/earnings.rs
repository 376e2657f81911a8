// ============================================================================
// Earnings Domain Model
// ============================================================================

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the current instant falls relative to the configured shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftPhase {
    /// Configuration is unusable (bad time, zero work days, zero-length shift)
    Misconfigured,
    /// Today's shift does not fall on a working day
    OffDay,
    /// Shift has not started yet
    BeforeShift,
    /// Inside `[start, end)`
    OnShift,
    /// Shift is over, the full day's pay is shown
    AfterShift,
}

/// Earnings for the current workday, recomputed from scratch on every tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Earnings {
    /// Accumulated pay today, in base currency
    pub amount: Decimal,

    /// Inside the work window on a working day
    pub is_working: bool,

    /// Share of the shift already worked (0-100)
    pub progress_percent: Decimal,

    /// Pay per second of work, in base currency
    pub accrual_per_second: Decimal,

    /// Pay for one full shift, in base currency
    pub daily_salary: Decimal,

    /// Seconds worked in the current shift
    pub worked_seconds: u32,

    /// Seconds left in the current shift
    pub remaining_seconds: u32,

    pub phase: ShiftPhase,
}

impl Earnings {
    /// Zero result returned for unusable configurations
    pub fn neutral() -> Self {
        Self {
            amount: Decimal::ZERO,
            is_working: false,
            progress_percent: Decimal::ZERO,
            accrual_per_second: Decimal::ZERO,
            daily_salary: Decimal::ZERO,
            worked_seconds: 0,
            remaining_seconds: 0,
            phase: ShiftPhase::Misconfigured,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.phase == ShiftPhase::Misconfigured
    }
}

impl Default for Earnings {
    fn default() -> Self {
        Self::neutral()
    }
}

// ============================================================================
// Time Info
// ============================================================================

/// Human readable shift timers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeInfo {
    /// Worked time, `HH:MM:SS`
    pub worked_time: String,

    /// Remaining time, `HH:MM:SS`
    pub remaining_time: String,

    /// Progress through the current clock hour (0-100, one decimal)
    pub hour_progress: Decimal,
}

impl TimeInfo {
    pub fn new(earnings: &Earnings, now: NaiveDateTime) -> Self {
        let hour_progress =
            (Decimal::from(now.minute()) * Decimal::ONE_HUNDRED / Decimal::from(60)).round_dp(1);

        Self {
            worked_time: format_duration(earnings.worked_seconds),
            remaining_time: format_duration(earnings.remaining_seconds),
            hour_progress,
        }
    }
}

/// Format seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_neutral() {
        let earnings = Earnings::neutral();
        assert!(earnings.is_neutral());
        assert!(!earnings.is_working);
        assert_eq!(earnings.amount, Decimal::ZERO);
        assert_eq!(Earnings::default(), earnings);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(14_400), "04:00:00");
        assert_eq!(format_duration(3_725), "01:02:05");
        assert_eq!(format_duration(90_061), "25:01:01");
    }

    #[test]
    fn test_time_info() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(13, 20, 0)
            .unwrap();
        let earnings = Earnings {
            worked_seconds: 15_600,
            remaining_seconds: 16_800,
            phase: ShiftPhase::OnShift,
            ..Earnings::neutral()
        };

        let info = TimeInfo::new(&earnings, now);
        assert_eq!(info.worked_time, "04:20:00");
        assert_eq!(info.remaining_time, "04:40:00");
        assert_eq!(info.hour_progress, dec!(33.3));
    }
}
