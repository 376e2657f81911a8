// ============================================================================
// Shift Locator
// Places a wall-clock instant relative to the configured work window
// ============================================================================

use crate::domain::{seconds_of_day, ShiftPhase, WorkDayPolicy, WorkWindow, SECONDS_PER_DAY};
use chrono::NaiveDateTime;

/// Phase of the shift plus seconds worked so far in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPosition {
    pub phase: ShiftPhase,
    pub worked_seconds: u32,
}

impl ShiftPosition {
    fn new(phase: ShiftPhase, worked_seconds: u32) -> Self {
        Self {
            phase,
            worked_seconds,
        }
    }
}

/// Locate `now` within the shift.
///
/// The working interval is half-open, `[start, end)`. For an overnight
/// window the qualifying day is the day the shift started, so the hours after
/// midnight belong to yesterday's shift.
///
/// `window` must have a non-zero length.
pub fn locate(window: &WorkWindow, policy: WorkDayPolicy, now: NaiveDateTime) -> ShiftPosition {
    let current = seconds_of_day(now.time());
    let start = window.start.seconds_from_midnight();
    let end = window.end.seconds_from_midnight();

    let today = now.date();
    let yesterday = today.pred_opt().unwrap_or(today);

    if !window.crosses_midnight() {
        if !policy.is_work_day(today) {
            return ShiftPosition::new(ShiftPhase::OffDay, 0);
        }
        return if current < start {
            ShiftPosition::new(ShiftPhase::BeforeShift, 0)
        } else if current < end {
            ShiftPosition::new(ShiftPhase::OnShift, current - start)
        } else {
            ShiftPosition::new(ShiftPhase::AfterShift, end - start)
        };
    }

    if current >= start {
        // Tonight's shift, started today
        if policy.is_work_day(today) {
            ShiftPosition::new(ShiftPhase::OnShift, current - start)
        } else {
            ShiftPosition::new(ShiftPhase::OffDay, 0)
        }
    } else if current < end {
        // Past midnight, shift started yesterday
        if policy.is_work_day(yesterday) {
            ShiftPosition::new(ShiftPhase::OnShift, (SECONDS_PER_DAY - start) + current)
        } else {
            ShiftPosition::new(ShiftPhase::OffDay, 0)
        }
    } else if policy.is_work_day(yesterday) {
        ShiftPosition::new(ShiftPhase::AfterShift, window.length_seconds())
    } else if policy.is_work_day(today) {
        ShiftPosition::new(ShiftPhase::BeforeShift, 0)
    } else {
        ShiftPosition::new(ShiftPhase::OffDay, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2024-06-10 is a Monday
    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_day_shift_phases() {
        let window = WorkWindow::parse("09:00", "18:00").unwrap();
        let policy = WorkDayPolicy::EveryDay;

        assert_eq!(locate(&window, policy, at(10, 8, 59, 59)).phase, ShiftPhase::BeforeShift);

        let start = locate(&window, policy, at(10, 9, 0, 0));
        assert_eq!(start, ShiftPosition::new(ShiftPhase::OnShift, 0));

        let midday = locate(&window, policy, at(10, 13, 0, 0));
        assert_eq!(midday, ShiftPosition::new(ShiftPhase::OnShift, 14_400));

        assert_eq!(locate(&window, policy, at(10, 17, 59, 59)).worked_seconds, 32_399);

        let end = locate(&window, policy, at(10, 18, 0, 0));
        assert_eq!(end, ShiftPosition::new(ShiftPhase::AfterShift, 32_400));
    }

    #[test]
    fn test_weekday_gating() {
        let window = WorkWindow::parse("09:00", "18:00").unwrap();

        // Saturday
        let sat = at(8, 12, 0, 0);
        assert_eq!(locate(&window, WorkDayPolicy::WeekdaysOnly, sat).phase, ShiftPhase::OffDay);
        assert_eq!(locate(&window, WorkDayPolicy::EveryDay, sat).phase, ShiftPhase::OnShift);
    }

    #[test]
    fn test_overnight_shift_phases() {
        let window = WorkWindow::parse("22:00", "06:00").unwrap();
        let policy = WorkDayPolicy::EveryDay;

        let evening = locate(&window, policy, at(10, 23, 0, 0));
        assert_eq!(evening, ShiftPosition::new(ShiftPhase::OnShift, 3_600));

        let early = locate(&window, policy, at(11, 2, 0, 0));
        assert_eq!(early, ShiftPosition::new(ShiftPhase::OnShift, 4 * 3_600));

        let morning = locate(&window, policy, at(11, 6, 0, 0));
        assert_eq!(morning, ShiftPosition::new(ShiftPhase::AfterShift, 8 * 3_600));

        let afternoon = locate(&window, policy, at(11, 21, 59, 59));
        assert_eq!(afternoon.phase, ShiftPhase::AfterShift);
    }

    #[test]
    fn test_overnight_weekday_gating() {
        let window = WorkWindow::parse("22:00", "06:00").unwrap();
        let policy = WorkDayPolicy::WeekdaysOnly;

        // Friday night shift runs into Saturday morning
        assert_eq!(locate(&window, policy, at(8, 3, 0, 0)).phase, ShiftPhase::OnShift);
        assert_eq!(locate(&window, policy, at(8, 12, 0, 0)).phase, ShiftPhase::AfterShift);

        // Saturday night is not a shift
        assert_eq!(locate(&window, policy, at(8, 23, 0, 0)).phase, ShiftPhase::OffDay);
        assert_eq!(locate(&window, policy, at(9, 3, 0, 0)).phase, ShiftPhase::OffDay);
        assert_eq!(locate(&window, policy, at(9, 12, 0, 0)).phase, ShiftPhase::OffDay);

        // Monday daytime waits for Monday night's shift
        assert_eq!(locate(&window, policy, at(10, 12, 0, 0)).phase, ShiftPhase::BeforeShift);
    }
}
