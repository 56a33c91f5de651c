//! Hardware adapter: bridges the port traits to the board.
//!
//! Owns the serial console and the status LED, and provides blocking
//! delays, so a single `&mut` satisfies every bound the
//! [`BootSequencer`](crate::app::service::BootSequencer) needs.

use std::io::{Stdout, Write};

use crate::adapters::console::SerialConsole;
use crate::adapters::time;
use crate::app::ports::{ConsolePort, DelayNs, IndicatorPort, Level};
use crate::drivers::status_led::StatusLed;
use crate::error::{ConsoleError, IndicatorError};

/// Concrete adapter implementing all board-facing ports.
pub struct HardwareAdapter<W: Write = Stdout> {
    console: SerialConsole<W>,
    led: StatusLed,
}

impl<W: Write> HardwareAdapter<W> {
    pub fn new(console: SerialConsole<W>, led: StatusLed) -> Self {
        Self { console, led }
    }

    pub fn into_parts(self) -> (SerialConsole<W>, StatusLed) {
        (self.console, self.led)
    }
}

// ── ConsolePort ───────────────────────────────────────────────

impl<W: Write> ConsolePort for HardwareAdapter<W> {
    fn open(&mut self, baud_rate: u32) -> Result<(), ConsoleError> {
        self.console.open(baud_rate)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.console.write_line(line)
    }
}

// ── IndicatorPort ─────────────────────────────────────────────

impl<W: Write> IndicatorPort for HardwareAdapter<W> {
    fn configure_output(&mut self) -> Result<(), IndicatorError> {
        self.led.configure()
    }

    fn set_level(&mut self, level: Level) -> Result<(), IndicatorError> {
        self.led.set(level)
    }

    fn level(&self) -> Level {
        self.led.current_level()
    }
}

// ── DelayNs ───────────────────────────────────────────────────

impl<W: Write> DelayNs for HardwareAdapter<W> {
    fn delay_ns(&mut self, ns: u32) {
        time::sleep_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        time::sleep_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        time::sleep_ms(ms);
    }
}
