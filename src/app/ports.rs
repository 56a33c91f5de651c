//! Port traits: the hexagonal boundary between the boot sequencer and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BootSequencer (domain)
//! ```
//!
//! The [`BootSequencer`](super::service::BootSequencer) consumes these via
//! generics, so the sequencing logic never touches hardware directly.
//! Blocking delays go through [`DelayNs`] from `embedded-hal`.

use serde::Serialize;

pub use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::error::{ConsoleError, IndicatorError};

// ───────────────────────────────────────────────────────────────
// Pin level
// ───────────────────────────────────────────────────────────────

/// Logical level of a digital output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    Low,
    High,
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

// ───────────────────────────────────────────────────────────────
// Console port (domain → serial text)
// ───────────────────────────────────────────────────────────────

/// Human-readable diagnostic text channel. Write-only.
pub trait ConsolePort {
    /// Open the channel at `baud_rate`. Must precede any `write_line`.
    fn open(&mut self, baud_rate: u32) -> Result<(), ConsoleError>;

    /// Write `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (domain → status LED)
// ───────────────────────────────────────────────────────────────

/// A single digital output used as a visual status indicator.
pub trait IndicatorPort {
    /// Claim the pin as a push-pull output.
    fn configure_output(&mut self) -> Result<(), IndicatorError>;

    /// Drive the pin to `level`.
    fn set_level(&mut self, level: Level) -> Result<(), IndicatorError>;

    /// Last level driven. `Low` before the first write.
    fn level(&self) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
