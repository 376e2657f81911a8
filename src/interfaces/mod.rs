// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod clock;
mod tick_observer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tick_observer::{LoggingTickObserver, NoOpTickObserver, TickObserver};
