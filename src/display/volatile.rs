// ============================================================================
// Volatile Digit Window
// ============================================================================

use crate::numeric::{max_digit_position, DigitPosition};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of contiguous positions that animate
pub const WINDOW_WIDTH: DigitPosition = 3;

/// The digit positions that change fast enough to be worth animating.
///
/// The window starts at the most significant digit of the per-second accrual
/// and covers the two positions below it. Positions less significant than
/// the window are frozen and shown as the placeholder digit; positions above
/// it show their true value. Position 0 (separators) is never part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolatileWindow {
    top: DigitPosition,
}

impl VolatileWindow {
    /// Window for a per-second accrual in display currency. `None` when the
    /// accrual is zero or negative: nothing moves, nothing is frozen.
    pub fn for_accrual(accrual: Decimal) -> Option<Self> {
        if accrual <= Decimal::ZERO {
            return None;
        }
        Some(Self {
            top: max_digit_position(accrual),
        })
    }

    /// Most significant animated position
    pub fn top(&self) -> DigitPosition {
        self.top
    }

    /// Least significant animated position
    pub fn bottom(&self) -> DigitPosition {
        self.top - (WINDOW_WIDTH - 1)
    }

    pub fn contains(&self, position: DigitPosition) -> bool {
        position != 0 && position <= self.top && position >= self.bottom()
    }

    /// Below the window: rendered as the placeholder digit
    pub fn is_frozen(&self, position: DigitPosition) -> bool {
        position != 0 && position < self.bottom()
    }

    /// Animated positions, most significant first
    pub fn positions(&self) -> impl Iterator<Item = DigitPosition> {
        (self.bottom()..=self.top).rev().filter(|&p| p != 0)
    }
}
