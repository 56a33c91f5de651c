//! Serial console adapter.
//!
//! Implements [`ConsolePort`] over any [`std::io::Write`]. In production the
//! writer is `stdout`, which ESP-IDF routes to the console UART (UART0 on
//! the ESP32-C3) with CRLF line endings. Tests substitute a `Vec<u8>`.

use std::io::{Stdout, Write};

use crate::app::ports::ConsolePort;
use crate::drivers::hw_init;
use crate::error::ConsoleError;

pub struct SerialConsole<W: Write = Stdout> {
    port: i32,
    baud_rate: Option<u32>,
    out: W,
}

impl SerialConsole<Stdout> {
    pub fn new(port: i32) -> Self {
        Self::with_writer(port, std::io::stdout())
    }
}

impl<W: Write> SerialConsole<W> {
    pub fn with_writer(port: i32, out: W) -> Self {
        Self {
            port,
            baud_rate: None,
            out,
        }
    }

    /// Rate the console was opened at, `None` until `open` succeeds.
    pub fn baud_rate(&self) -> Option<u32> {
        self.baud_rate
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ConsolePort for SerialConsole<W> {
    fn open(&mut self, baud_rate: u32) -> Result<(), ConsoleError> {
        hw_init::set_console_baud(self.port, baud_rate)?;
        self.baud_rate = Some(baud_rate);
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        if self.baud_rate.is_none() {
            return Err(ConsoleError::NotOpen);
        }
        writeln!(self.out, "{}", line).map_err(|_| ConsoleError::WriteFailed)?;
        self.out.flush().map_err(|_| ConsoleError::WriteFailed)
    }
}
