// ============================================================================
// Wall-Clock Time and Work Window
// ============================================================================

use super::errors::{ConfigError, ConfigResult};
use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds in one calendar day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A validated `HH:MM` wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create from hour (0-23) and minute (0-59)
    pub fn new(hour: u8, minute: u8) -> ConfigResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(ConfigError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `HH:MM` string. A single-digit hour (`9:30`) is accepted.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let invalid = || ConfigError::InvalidTime(raw.to_string());

        let (hour_str, minute_str) = raw.trim().split_once(':').ok_or_else(invalid)?;
        if hour_str.is_empty()
            || hour_str.len() > 2
            || minute_str.len() != 2
            || !hour_str.bytes().all(|b| b.is_ascii_digit())
            || !minute_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u8 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_str.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Seconds elapsed since midnight
    #[inline]
    pub fn seconds_from_midnight(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60
    }
}

impl FromStr for ClockTime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        NaiveTime::from_num_seconds_from_midnight_opt(time.seconds_from_midnight(), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

/// Seconds since midnight for a wall-clock instant, sub-second part dropped.
///
/// A leap second (`23:59:60`) is folded back into the last regular second.
#[inline]
pub fn seconds_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight().min(SECONDS_PER_DAY - 1)
}

// ============================================================================
// Work Window
// ============================================================================

/// The configured shift. `end < start` means the shift crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl WorkWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Parse both ends from `HH:MM` strings
    pub fn parse(start: &str, end: &str) -> ConfigResult<Self> {
        Ok(Self::new(ClockTime::parse(start)?, ClockTime::parse(end)?))
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Length of one shift in seconds. Zero when start equals end.
    pub fn length_seconds(&self) -> u32 {
        let start = self.start.seconds_from_midnight();
        let end = self.end.seconds_from_midnight();
        if end >= start {
            end - start
        } else {
            (SECONDS_PER_DAY - start) + end
        }
    }

    /// Length of one shift in hours
    pub fn work_hours(&self) -> Decimal {
        Decimal::from(self.length_seconds()) / Decimal::from(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid() {
        let t = ClockTime::parse("09:30").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.seconds_from_midnight(), 34_200);

        let short = ClockTime::parse("7:05").unwrap();
        assert_eq!(short.to_string(), "07:05");

        let padded: ClockTime = " 23:59 ".parse().unwrap();
        assert_eq!(padded.seconds_from_midnight(), 86_340);
    }

    #[test]
    fn test_parse_invalid() {
        for raw in ["", "9", "24:00", "12:60", "ab:cd", "12:5", "123:00", "-1:00", "12:00:00"] {
            assert_eq!(
                ClockTime::parse(raw),
                Err(ConfigError::InvalidTime(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_day_window_length() {
        let window = WorkWindow::parse("09:00", "18:00").unwrap();
        assert!(!window.crosses_midnight());
        assert_eq!(window.length_seconds(), 32_400);
        assert_eq!(window.work_hours(), dec!(9));
    }

    #[test]
    fn test_overnight_window_length() {
        let window = WorkWindow::parse("22:00", "06:30").unwrap();
        assert!(window.crosses_midnight());
        assert_eq!(window.length_seconds(), 8 * 3600 + 1800);
        assert_eq!(window.work_hours(), dec!(8.5));
    }

    #[test]
    fn test_zero_length_window() {
        let window = WorkWindow::parse("08:00", "08:00").unwrap();
        assert!(!window.crosses_midnight());
        assert_eq!(window.length_seconds(), 0);
    }

    #[test]
    fn test_seconds_of_day() {
        let t = NaiveTime::from_hms_milli_opt(13, 0, 5, 900).unwrap();
        assert_eq!(seconds_of_day(t), 46_805);
        assert_eq!(NaiveTime::from(ClockTime::new(13, 0).unwrap()), NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    }
}
