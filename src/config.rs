//! Boot configuration parameters
//!
//! Every timing and pin constant used by the boot sequence, gathered into
//! one value. The firmware has no persistent storage; `BootConfig::default()`
//! is what ships.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Upper bound on `blink_count`. Sizes the level trace in the boot report.
pub const MAX_BLINKS: u8 = 8;

/// Boot-time configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootConfig {
    // --- Console ---
    /// Console symbol rate (baud)
    pub baud_rate: u32,
    /// Pause after opening the console so a host terminal can attach (ms)
    pub console_settle_ms: u32,

    // --- Status LED ---
    /// GPIO driving the status LED
    pub led_gpio: i32,
    /// Number of startup flashes
    pub blink_count: u8,
    /// LED on-time per flash (ms)
    pub blink_on_ms: u32,
    /// LED off-time per flash (ms)
    pub blink_off_ms: u32,

    // --- Idle ---
    /// Sleep per idle-loop iteration (ms)
    pub idle_period_ms: u32,

    // --- Logging ---
    /// Max `log` level. Anything above `Warn` interleaves with the banner.
    pub log_level: LevelFilter,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            // Console
            baud_rate: pins::CONSOLE_BAUD_RATE,
            console_settle_ms: 300,

            // Status LED
            led_gpio: pins::STATUS_LED_GPIO,
            blink_count: 4,
            blink_on_ms: 200,
            blink_off_ms: 200,

            // Idle
            idle_period_ms: 1000,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl BootConfig {
    /// Reject values the boot sequence cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::Config("baud_rate must be non-zero"));
        }
        if self.blink_count == 0 || self.blink_count > MAX_BLINKS {
            return Err(Error::Config("blink_count out of range"));
        }
        if !(0..=pins::MAX_GPIO).contains(&self.led_gpio) {
            return Err(Error::Config("led_gpio must be a valid pin"));
        }
        if self.idle_period_ms == 0 {
            return Err(Error::Config("idle_period_ms must be non-zero"));
        }
        Ok(())
    }

    /// Length of one on/off flash (ms).
    pub fn blink_period_ms(&self) -> u32 {
        self.blink_on_ms.saturating_add(self.blink_off_ms)
    }

    /// Total delay requested by a full boot sequence (ms).
    pub fn boot_duration_ms(&self) -> u32 {
        u32::from(self.blink_count)
            .saturating_mul(self.blink_period_ms())
            .saturating_add(self.console_settle_ms)
    }
}
