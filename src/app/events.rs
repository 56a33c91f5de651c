//! Outbound application events.
//!
//! The [`BootSequencer`](super::service::BootSequencer) emits these through
//! the [`EventSink`](super::ports::EventSink) port.

use serde::Serialize;

use crate::config::MAX_BLINKS;
use crate::fsm::StateId;

use super::ports::Level;

/// Room for the initial LOW plus one HIGH/LOW pair per flash.
pub const LEVEL_TRACE_CAPACITY: usize = 1 + 2 * MAX_BLINKS as usize;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The sequencer has started (carries initial state).
    Started(StateId),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// One startup flash completed (zero-based).
    Pulse { index: u8 },

    /// The boot sequence finished.
    BootComplete(BootReport),
}

/// Summary of a completed boot sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BootReport {
    /// HIGH pulses driven on the status LED.
    pub pulses: u8,
    /// Every level written to the LED pin, in order.
    pub level_trace: heapless::Vec<Level, LEVEL_TRACE_CAPACITY>,
    /// Lines written to the console (the blank line included).
    pub lines_written: u8,
    /// Sum of all delays the sequencer requested (ms).
    pub scheduled_ms: u32,
}
