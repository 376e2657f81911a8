// ============================================================================
// Engine Module
// Earnings computation for the current workday
// ============================================================================

mod earnings_engine;
mod shift;

pub use earnings_engine::{compute_earnings, EarningsEngine};
pub use shift::{locate, ShiftPosition};
