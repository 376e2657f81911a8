// ============================================================================
// Digit Roller
// Timer-free per-position rolling state owned by a renderer
// ============================================================================
//
// The formatter is recomputed once per tick. Between ticks a renderer keeps
// one DigitRoller per animated position, advances it with the elapsed time
// and plays the returned RollPlan. The roller never schedules anything
// itself; delays and step intervals are handed back as durations.

use super::formatter::{DigitCell, DisplayNumber};
use crate::domain::CurrencyDisplayConfig;
use crate::numeric::{digit_in_fixed, format_to_fixed, DigitPosition, FIXED_DECIMALS};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::time::Duration;

/// Upper bound for the stagger before a position starts rolling
pub const MAX_START_DELAY: Duration = Duration::from_millis(200);

/// Rotation direction of a digit wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollDirection {
    /// 0 -> 1 -> ... -> 9 -> 0
    Up,
    /// 9 -> 8 -> ... -> 0 -> 9
    Down,
}

/// One animated transition of a single digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollPlan {
    pub from: u8,
    pub to: u8,
    pub direction: RollDirection,
    pub steps: u8,

    /// Wait before the first step
    pub start_delay: Duration,

    /// Time between steps
    pub step_interval: Duration,
}

impl RollPlan {
    /// Shortest rotation from `from` to `to`, `None` when already there.
    ///
    /// Ties (five steps either way) move numerically toward the target.
    pub fn shortest(from: u8, to: u8) -> Option<(RollDirection, u8)> {
        let (from, to) = (from % 10, to % 10);
        if from == to {
            return None;
        }

        let up = (to + 10 - from) % 10;
        let down = (from + 10 - to) % 10;

        let direction = match up.cmp(&down) {
            std::cmp::Ordering::Less => RollDirection::Up,
            std::cmp::Ordering::Greater => RollDirection::Down,
            std::cmp::Ordering::Equal if to > from => RollDirection::Up,
            std::cmp::Ordering::Equal => RollDirection::Down,
        };

        let steps = match direction {
            RollDirection::Up => up,
            RollDirection::Down => down,
        };
        Some((direction, steps))
    }

    /// Digits shown after each step, ending with `to`
    pub fn frames(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=self.steps).map(move |step| match self.direction {
            RollDirection::Up => (self.from + step) % 10,
            RollDirection::Down => (self.from + 10 - step % 10) % 10,
        })
    }

    /// Total time from plan start to the final frame
    pub fn duration(&self) -> Duration {
        self.start_delay + self.step_interval * self.steps as u32
    }
}

// ============================================================================
// Digit Roller
// ============================================================================

/// Rolling state for one digit position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitRoller {
    position: DigitPosition,
    current: u8,
    animate: bool,

    /// Display-currency amount projected forward since the last sync
    accumulated: Decimal,

    /// Display-currency accrual per second
    accrual: Decimal,

    start_delay: Duration,
    step_interval: Duration,
}

impl DigitRoller {
    /// Create a roller showing `cell` as-is
    pub fn new(cell: &DigitCell, display: &CurrencyDisplayConfig) -> Self {
        Self {
            position: cell.position,
            current: cell.digit,
            animate: cell.animate,
            accumulated: Decimal::ZERO,
            accrual: Decimal::ZERO,
            start_delay: start_delay(cell.position, display),
            step_interval: Duration::from_micros(display.animation_speed_ms as u64 * 800),
        }
    }

    pub fn position(&self) -> DigitPosition {
        self.position
    }

    /// Digit currently settled on
    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn is_animated(&self) -> bool {
        self.animate
    }

    /// Resynchronise with a freshly formatted tick.
    ///
    /// Static positions snap to the new digit. Animated positions return the
    /// plan that rolls them there.
    pub fn sync(&mut self, cell: &DigitCell, amount: Decimal, accrual: Decimal) -> Option<RollPlan> {
        self.animate = cell.animate;
        self.accumulated = amount;
        self.accrual = accrual;

        if !self.animate {
            self.current = cell.digit;
            return None;
        }
        self.roll_to(cell.digit)
    }

    /// Project the amount forward by `elapsed` and roll if this position's
    /// digit changed.
    ///
    /// Digits are read from the same rounded fixed-point rendering the
    /// formatter produces, so a growing amount never rolls a digit back.
    pub fn advance(&mut self, elapsed: Duration) -> Option<RollPlan> {
        if !self.animate || self.accrual <= Decimal::ZERO {
            return None;
        }

        let seconds = Decimal::from_i128_with_scale(elapsed.as_micros() as i128, 6);
        let delta = self.accrual.checked_mul(seconds)?;
        self.accumulated = self.accumulated.checked_add(delta)?;

        let fixed = format_to_fixed(self.accumulated, FIXED_DECIMALS);
        self.roll_to(digit_in_fixed(&fixed, self.position))
    }

    fn roll_to(&mut self, target: u8) -> Option<RollPlan> {
        let (direction, steps) = RollPlan::shortest(self.current, target)?;
        let plan = RollPlan {
            from: self.current,
            to: target,
            direction,
            steps,
            start_delay: self.start_delay,
            step_interval: self.step_interval,
        };
        self.current = target;
        Some(plan)
    }
}

/// Stagger grows with distance from the decimal point, capped at 200 ms
fn start_delay(position: DigitPosition, display: &CurrencyDisplayConfig) -> Duration {
    // 0.3 x scroll delay per fractional position, 0.5 x per integer position
    let per_position_us = if position < 0 {
        display.scroll_delay_ms as u64 * 300
    } else {
        display.scroll_delay_ms as u64 * 500
    };
    Duration::from_micros(per_position_us * position.unsigned_abs() as u64).min(MAX_START_DELAY)
}

// ============================================================================
// Roller Bank
// ============================================================================

/// All rollers of one display, keyed by position
#[derive(Debug, Clone, Default)]
pub struct RollerBank {
    rollers: BTreeMap<DigitPosition, DigitRoller>,
}

impl RollerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a freshly formatted tick. Positions that disappeared are
    /// dropped; new positions start on their digit without rolling.
    pub fn sync(&mut self, number: &DisplayNumber) -> Vec<(DigitPosition, RollPlan)> {
        let mut plans = Vec::new();
        let mut seen = Vec::with_capacity(number.digit_count());

        for cell in number.digits() {
            seen.push(cell.position);
            match self.rollers.get_mut(&cell.position) {
                Some(roller) => {
                    if let Some(plan) =
                        roller.sync(cell, number.converted_amount, number.converted_accrual)
                    {
                        plans.push((cell.position, plan));
                    }
                },
                None => {
                    let mut roller = DigitRoller::new(cell, &number.display);
                    roller.sync(cell, number.converted_amount, number.converted_accrual);
                    self.rollers.insert(cell.position, roller);
                },
            }
        }

        self.rollers.retain(|position, _| seen.contains(position));
        plans
    }

    /// Advance every animated roller by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(DigitPosition, RollPlan)> {
        self.rollers
            .iter_mut()
            .rev()
            .filter_map(|(position, roller)| roller.advance(elapsed).map(|plan| (*position, plan)))
            .collect()
    }

    pub fn get(&self, position: DigitPosition) -> Option<&DigitRoller> {
        self.rollers.get(&position)
    }

    pub fn len(&self) -> usize {
        self.rollers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rollers.is_empty()
    }

    /// Release every roller (renderer teardown)
    pub fn clear(&mut self) {
        self.rollers.clear();
    }
}
