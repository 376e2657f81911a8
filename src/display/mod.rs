// ============================================================================
// Display Module
// Turns amounts into digit sequences, titles and rolling state
// ============================================================================

mod formatter;
mod plain;
pub mod roller;
mod volatile;

pub use formatter::{
    DecimalDigits, DigitCell, DigitFormatter, DisplayNumber, IntegerToken, IntegerTokens,
};
pub use plain::{
    format_currency_number, format_for_title, group_thousands, pad_integer, title_line,
    PlainNumber, Statistics, APP_TITLE, GROUP_SEPARATOR,
};
pub use roller::{DigitRoller, RollDirection, RollPlan, RollerBank};
pub use volatile::{VolatileWindow, WINDOW_WIDTH};
