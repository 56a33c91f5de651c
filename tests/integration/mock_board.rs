//! Mock board for integration tests.
//!
//! Implements every board-facing port on one struct with a virtual clock.
//! Each call is recorded with the virtual time it happened at, so tests can
//! assert on ordering and timing without real GPIO, UART, or sleeping.

use dinoskull::app::events::AppEvent;
use dinoskull::app::ports::{ConsolePort, DelayNs, EventSink, IndicatorPort, Level};
use dinoskull::error::{ConsoleError, IndicatorError};

// ── Board call record ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum BoardCall {
    Open { baud: u32 },
    Delay { ms: u32 },
    ConfigureOutput,
    SetLevel(Level),
    Line(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stamped {
    pub at_ms: u64,
    pub call: BoardCall,
}

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub calls: Vec<Stamped>,
    now_ns: u64,
    level: Level,
    opened: bool,
    configured: bool,
    level_writes: usize,
    /// Make `open` fail with this error.
    pub fail_open: Option<ConsoleError>,
    /// Make `configure_output` fail with this error.
    pub fail_configure: Option<IndicatorError>,
    /// Make the n-th (zero-based) `set_level` call fail.
    pub fail_level_write_at: Option<usize>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            now_ns: 0,
            level: Level::Low,
            opened: false,
            configured: false,
            level_writes: 0,
            fail_open: None,
            fail_configure: None,
            fail_level_write_at: None,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|s| match &s.call {
                BoardCall::Line(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.calls
            .iter()
            .filter_map(|s| match s.call {
                BoardCall::SetLevel(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    /// Virtual times at which `level` was driven.
    pub fn level_times(&self, level: Level) -> Vec<u64> {
        self.calls
            .iter()
            .filter(|s| s.call == BoardCall::SetLevel(level))
            .map(|s| s.at_ms)
            .collect()
    }

    /// Virtual time of the first line equal to `text`.
    pub fn line_time(&self, text: &str) -> Option<u64> {
        self.calls
            .iter()
            .find(|s| matches!(&s.call, BoardCall::Line(l) if l == text))
            .map(|s| s.at_ms)
    }

    /// Index of the first call matching `call`.
    pub fn position(&self, call: &BoardCall) -> Option<usize> {
        self.calls.iter().position(|s| &s.call == call)
    }

    fn record(&mut self, call: BoardCall) {
        let at_ms = self.now_ms();
        self.calls.push(Stamped { at_ms, call });
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for MockBoard {
    fn open(&mut self, baud_rate: u32) -> Result<(), ConsoleError> {
        if let Some(e) = self.fail_open {
            return Err(e);
        }
        self.opened = true;
        self.record(BoardCall::Open { baud: baud_rate });
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        if !self.opened {
            return Err(ConsoleError::NotOpen);
        }
        self.record(BoardCall::Line(line.to_string()));
        Ok(())
    }
}

impl IndicatorPort for MockBoard {
    fn configure_output(&mut self) -> Result<(), IndicatorError> {
        if let Some(e) = self.fail_configure {
            return Err(e);
        }
        self.configured = true;
        self.record(BoardCall::ConfigureOutput);
        Ok(())
    }

    fn set_level(&mut self, level: Level) -> Result<(), IndicatorError> {
        if !self.configured {
            return Err(IndicatorError::NotConfigured);
        }
        let n = self.level_writes;
        self.level_writes += 1;
        if self.fail_level_write_at == Some(n) {
            return Err(IndicatorError::WriteFailed(-1));
        }
        self.level = level;
        self.record(BoardCall::SetLevel(level));
        Ok(())
    }

    fn level(&self) -> Level {
        self.level
    }
}

impl DelayNs for MockBoard {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(BoardCall::Delay { ms });
        self.now_ns += u64::from(ms) * 1_000_000;
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
