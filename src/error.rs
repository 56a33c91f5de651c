//! Unified error types for the Dino Skull firmware.
//!
//! A single `Error` enum that every port error converts into, keeping the
//! boot path's `?` propagation uniform. All variants are `Copy` so they can
//! be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The diagnostic console could not be opened or written.
    Console(ConsoleError),
    /// The status LED pin could not be configured or driven.
    Indicator(IndicatorError),
    /// Boot configuration failed validation.
    Config(&'static str),
    /// An operation was requested in a state that does not allow it.
    InvalidState(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console(e) => write!(f, "console: {e}"),
            Self::Indicator(e) => write!(f, "indicator: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Console errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// The UART driver rejected the baud rate (ESP-IDF return code).
    OpenFailed(i32),
    /// Writing a line to the console failed.
    WriteFailed,
    /// A line was written before the console was opened.
    NotOpen,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailed(rc) => write!(f, "open failed (rc={rc})"),
            Self::WriteFailed => write!(f, "write failed"),
            Self::NotOpen => write!(f, "console not open"),
        }
    }
}

impl From<ConsoleError> for Error {
    fn from(e: ConsoleError) -> Self {
        Self::Console(e)
    }
}

// ---------------------------------------------------------------------------
// Indicator (status LED) errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    /// `gpio_config` failed (ESP-IDF return code).
    ConfigFailed(i32),
    /// `gpio_set_level` failed (ESP-IDF return code).
    WriteFailed(i32),
    /// A level was driven before the pin was configured as an output.
    NotConfigured,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "GPIO config failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "GPIO write failed (rc={rc})"),
            Self::NotConfigured => write!(f, "pin not configured as output"),
        }
    }
}

impl From<IndicatorError> for Error {
    fn from(e: IndicatorError) -> Self {
        Self::Indicator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
