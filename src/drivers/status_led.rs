//! Single-colour status LED driver.
//!
//! One GPIO, active HIGH (GPIO8 on the DevKitM-1).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the pin via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::ports::Level;
use crate::drivers::hw_init;
use crate::error::IndicatorError;

pub struct StatusLed {
    gpio: i32,
    configured: bool,
    current: Level,
}

impl StatusLed {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            configured: false,
            current: Level::Low,
        }
    }

    pub fn configure(&mut self) -> Result<(), IndicatorError> {
        hw_init::configure_output(self.gpio)?;
        self.configured = true;
        Ok(())
    }

    pub fn set(&mut self, level: Level) -> Result<(), IndicatorError> {
        if !self.configured {
            return Err(IndicatorError::NotConfigured);
        }
        hw_init::gpio_write(self.gpio, level.into())?;
        self.current = level;
        Ok(())
    }

    pub fn current_level(&self) -> Level {
        self.current
    }
}
