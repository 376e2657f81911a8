// ============================================================================
// Earnings Engine
// Accumulated pay for the current workday as a pure function of time
// ============================================================================

use super::shift::{locate, ShiftPosition};
use crate::domain::{Earnings, SalaryConfig, ShiftPhase, TimeInfo};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Compute today's earnings for `config` at wall-clock time `now`.
///
/// Nothing is accumulated between calls: every tick recomputes from the
/// shift start, so a skipped tick cannot cause drift. Unusable
/// configurations (bad time strings, zero work days, negative salary,
/// zero-length shift) produce [`Earnings::neutral`].
pub fn compute_earnings(config: &SalaryConfig, now: NaiveDateTime) -> Earnings {
    let window = match config.work_window() {
        Ok(window) => window,
        Err(err) => {
            tracing::warn!("Salary config has no usable shift: {}", err);
            return Earnings::neutral();
        },
    };

    let shift_seconds = window.length_seconds();
    if shift_seconds == 0 {
        tracing::warn!("Salary config has a zero-length shift at {}", window.start);
        return Earnings::neutral();
    }

    let daily_salary = match config.daily_salary() {
        Some(daily) => daily,
        None => {
            tracing::warn!(
                "Salary config has no usable daily salary (salary {}, work days {})",
                config.monthly_salary,
                config.work_days_per_month
            );
            return Earnings::neutral();
        },
    };

    let shift_len = Decimal::from(shift_seconds);
    let accrual_per_second = daily_salary.checked_div(shift_len).unwrap_or(Decimal::ZERO);

    let ShiftPosition {
        phase,
        worked_seconds,
    } = locate(&window, config.work_day_policy, now);

    let (amount, progress_percent) = match phase {
        ShiftPhase::OnShift => {
            let amount = Decimal::from(worked_seconds)
                .checked_mul(accrual_per_second)
                .unwrap_or(Decimal::ZERO)
                .clamp(Decimal::ZERO, daily_salary);
            let progress = (Decimal::from(worked_seconds) * Decimal::ONE_HUNDRED / shift_len)
                .min(Decimal::ONE_HUNDRED);
            (amount, progress)
        },
        ShiftPhase::AfterShift => (daily_salary, Decimal::ONE_HUNDRED),
        ShiftPhase::BeforeShift | ShiftPhase::OffDay | ShiftPhase::Misconfigured => {
            (Decimal::ZERO, Decimal::ZERO)
        },
    };

    let remaining_seconds = match phase {
        ShiftPhase::OnShift | ShiftPhase::BeforeShift => shift_seconds - worked_seconds,
        _ => 0,
    };

    tracing::trace!(
        "Earnings at {}: {:?} amount={} progress={}",
        now,
        phase,
        amount,
        progress_percent
    );

    Earnings {
        amount,
        is_working: phase == ShiftPhase::OnShift,
        progress_percent,
        accrual_per_second,
        daily_salary,
        worked_seconds,
        remaining_seconds,
        phase,
    }
}

/// Earnings engine bound to one salary configuration
#[derive(Debug, Clone, Default)]
pub struct EarningsEngine {
    config: SalaryConfig,
}

impl EarningsEngine {
    /// Create a new earnings engine
    pub fn new(config: SalaryConfig) -> Self {
        Self { config }
    }

    /// Earnings at wall-clock time `now`
    pub fn compute(&self, now: NaiveDateTime) -> Earnings {
        compute_earnings(&self.config, now)
    }

    /// Earnings plus shift timers at `now`
    pub fn compute_with_time_info(&self, now: NaiveDateTime) -> (Earnings, TimeInfo) {
        let earnings = self.compute(now);
        let info = TimeInfo::new(&earnings, now);
        (earnings, info)
    }

    /// Swap in a new configuration (settings change)
    pub fn set_config(&mut self, config: SalaryConfig) {
        tracing::debug!("Earnings engine reconfigured: {:?}", config);
        self.config = config;
    }

    pub fn config(&self) -> &SalaryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkDayPolicy;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    // 2024-06-10 is a Monday
    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn office() -> SalaryConfig {
        SalaryConfig::new(dec!(10000), 22, "09:00", "18:00")
    }

    fn approx(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_midday_earnings() {
        let earnings = compute_earnings(&office(), at(13, 0, 0));

        assert!(earnings.is_working);
        assert_eq!(earnings.phase, ShiftPhase::OnShift);
        assert_eq!(earnings.worked_seconds, 14_400);
        assert_eq!(earnings.remaining_seconds, 18_000);
        assert!(approx(earnings.daily_salary, dec!(454.545454), dec!(0.000001)));
        assert!(approx(earnings.accrual_per_second, dec!(0.014029), dec!(0.000001)));
        // 454.5454.. * 14400 / 32400
        assert!(approx(earnings.amount, dec!(202.0202), dec!(0.0001)));
        assert!(approx(earnings.progress_percent, dec!(44.444), dec!(0.001)));
    }

    #[test]
    fn test_after_shift_shows_full_day() {
        let earnings = compute_earnings(&office(), at(19, 0, 0));

        assert!(!earnings.is_working);
        assert_eq!(earnings.phase, ShiftPhase::AfterShift);
        assert_eq!(earnings.amount, earnings.daily_salary);
        assert_eq!(earnings.progress_percent, Decimal::ONE_HUNDRED);
        assert_eq!(earnings.remaining_seconds, 0);
    }

    #[test]
    fn test_before_shift_is_zero() {
        let earnings = compute_earnings(&office(), at(7, 30, 0));

        assert!(!earnings.is_working);
        assert_eq!(earnings.phase, ShiftPhase::BeforeShift);
        assert_eq!(earnings.amount, Decimal::ZERO);
        assert_eq!(earnings.progress_percent, Decimal::ZERO);
        assert_eq!(earnings.remaining_seconds, 32_400);
        assert!(earnings.accrual_per_second > Decimal::ZERO);
    }

    #[test]
    fn test_degenerate_configs_are_neutral() {
        let mut zero_days = office();
        zero_days.work_days_per_month = 0;

        let bad_time = office().with_shift("9:0", "18:00");
        let zero_shift = office().with_shift("10:00", "10:00");

        let mut negative = office();
        negative.monthly_salary = dec!(-5000);

        for config in [zero_days, bad_time, zero_shift, negative] {
            let earnings = compute_earnings(&config, at(13, 0, 0));
            assert!(earnings.is_neutral(), "{config:?} should be neutral");
            assert_eq!(earnings.amount, Decimal::ZERO);
            assert_eq!(earnings.accrual_per_second, Decimal::ZERO);
        }
    }

    #[test]
    fn test_overnight_accrual() {
        let config = SalaryConfig::new(dec!(8800), 22, "22:00", "06:00");
        // 400 per shift of 28800 seconds
        let earnings = compute_earnings(&config, at(2, 0, 0));

        assert!(earnings.is_working);
        assert_eq!(earnings.worked_seconds, 4 * 3_600);
        assert!(approx(earnings.amount, dec!(200), dec!(0.000001)));
        assert!(approx(earnings.progress_percent, dec!(50), dec!(0.000001)));
    }

    #[test]
    fn test_weekend_off_day() {
        let config = office().with_work_day_policy(WorkDayPolicy::WeekdaysOnly);
        let saturday = at(13, 0, 0) - Duration::days(2);

        let earnings = compute_earnings(&config, saturday);
        assert_eq!(earnings.phase, ShiftPhase::OffDay);
        assert_eq!(earnings.amount, Decimal::ZERO);
    }

    #[test]
    fn test_engine_reconfigure() {
        let mut engine = EarningsEngine::new(office());
        let before = engine.compute(at(13, 0, 0));

        engine.set_config(office().with_shift("13:00", "18:00"));
        let after = engine.compute(at(13, 0, 0));

        assert!(before.amount > Decimal::ZERO);
        assert_eq!(after.amount, Decimal::ZERO);
        assert_eq!(engine.config().start_time, "13:00");

        let (_, info) = engine.compute_with_time_info(at(15, 30, 0));
        assert_eq!(info.worked_time, "02:30:00");
        assert_eq!(info.remaining_time, "02:30:00");
    }

    fn arb_config() -> impl Strategy<Value = SalaryConfig> {
        (1u32..=10_000_000, 1u32..=31, 0u8..24, 0u8..60, 0u8..24, 0u8..60).prop_map(
            |(salary, days, sh, sm, eh, em)| {
                SalaryConfig::new(
                    Decimal::from(salary),
                    days,
                    format!("{:02}:{:02}", sh, sm),
                    format!("{:02}:{:02}", eh, em),
                )
            },
        )
    }

    proptest! {
        #[test]
        fn prop_amount_within_daily_salary(config in arb_config(), secs in 0u32..86_400) {
            let now = at(0, 0, 0) + Duration::seconds(secs as i64);
            let earnings = compute_earnings(&config, now);

            prop_assert!(earnings.amount >= Decimal::ZERO);
            prop_assert!(earnings.amount <= earnings.daily_salary);
            prop_assert!(earnings.progress_percent >= Decimal::ZERO);
            prop_assert!(earnings.progress_percent <= Decimal::ONE_HUNDRED);
        }

        #[test]
        fn prop_idempotent(config in arb_config(), secs in 0u32..86_400) {
            let now = at(0, 0, 0) + Duration::seconds(secs as i64);
            prop_assert_eq!(compute_earnings(&config, now), compute_earnings(&config, now));
        }

        #[test]
        fn prop_monotonic_within_shift(config in arb_config(), a in 0u32..86_400, b in 0u32..86_400) {
            let window = config.work_window().unwrap();
            prop_assume!(window.length_seconds() > 0);

            // A day shift resets at midnight, an overnight shift at its next start
            let start_secs = window.start.seconds_from_midnight();
            let horizon = if window.crosses_midnight() { 86_400 } else { 86_400 - start_secs };

            let (a, b) = (a % horizon, b % horizon);
            let (first, second) = if a <= b { (a, b) } else { (b, a) };
            let start = at(0, 0, 0) + Duration::seconds(start_secs as i64);
            let earlier = compute_earnings(&config, start + Duration::seconds(first as i64));
            let later = compute_earnings(&config, start + Duration::seconds(second as i64));

            prop_assert!(earlier.amount <= later.amount);
        }
    }
}
