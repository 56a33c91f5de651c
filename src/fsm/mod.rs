//! Boot lifecycle state machine.
//!
//! ```text
//!   ┌─────────┐  boot sequence done  ┌──────┐
//!   │ Booting │ ───────────────────▶ │ Idle │ ◀─┐ sleep
//!   └─────────┘                      └──────┘ ──┘
//! ```
//!
//! Two states, one forward edge. `Idle` is terminal: the only way out is a
//! hardware reset, which starts a fresh `Fsm` in `Booting`.

use log::info;
use serde::Serialize;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum StateId {
    Booting = 0,
    Idle = 1,
}

impl StateId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Booting => "BOOTING",
            Self::Idle => "IDLE",
        }
    }

    /// Whether `self -> next` is an edge of the lifecycle graph.
    pub const fn can_transition_to(self, next: StateId) -> bool {
        matches!((self, next), (Self::Booting, Self::Idle))
    }
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// Tracks the current lifecycle state and the number of idle iterations.
pub struct Fsm {
    current: StateId,
    idle_ticks: u64,
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new()
    }
}

impl Fsm {
    /// Fresh machine, as after reset.
    pub fn new() -> Self {
        Self {
            current: StateId::Booting,
            idle_ticks: 0,
        }
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Move to `next`, rejecting anything off the lifecycle graph.
    pub fn transition(&mut self, next: StateId) -> Result<StateId> {
        let from = self.current;
        if !from.can_transition_to(next) {
            return Err(Error::InvalidState("transition not allowed"));
        }
        info!("FSM transition: {} -> {}", from.name(), next.name());
        self.current = next;
        Ok(from)
    }

    /// Count one pass of the idle loop.
    pub fn tick_idle(&mut self) -> Result<()> {
        if self.current != StateId::Idle {
            return Err(Error::InvalidState("idle tick before boot completed"));
        }
        self.idle_ticks = self.idle_ticks.wrapping_add(1);
        Ok(())
    }

    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }
}
