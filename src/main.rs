//! Dino Skull Firmware: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  HardwareAdapter (SerialConsole · StatusLed · delay) │
//! │  LogEventSink                                        │
//! │  ─────────────── Port Trait Boundary ─────────────   │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  BootSequencer   BOOTING ──▶ IDLE (forever)    │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Capacitive touch sensing, the jaw servo, and the elastic-band safety
//! release are not implemented yet; the idle loop is where they will run.
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use dinoskull::adapters::console::SerialConsole;
use dinoskull::adapters::hardware::HardwareAdapter;
use dinoskull::adapters::log_sink::LogEventSink;
use dinoskull::adapters::time::UptimeClock;
use dinoskull::app::service::BootSequencer;
use dinoskull::config::BootConfig;
use dinoskull::drivers::status_led::StatusLed;
use dinoskull::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    // Validated inside `run`; a rejected config is logged below like any
    // other boot failure.
    let config = BootConfig::default();
    log::set_max_level(config.log_level);
    info!("Dino Skull v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Construct adapters ─────────────────────────────────
    let clock = UptimeClock::new();
    let mut hw = HardwareAdapter::new(
        SerialConsole::new(pins::CONSOLE_UART_PORT),
        StatusLed::new(config.led_gpio),
    );
    let mut sink = LogEventSink::new();

    // ── 3. Boot sequence ──────────────────────────────────────
    let mut sequencer = BootSequencer::new(config);
    match sequencer.run(&mut hw, &mut sink) {
        Ok(report) => info!(
            "Boot sequence done at {} ms uptime ({} ms scheduled)",
            clock.uptime_ms(),
            report.scheduled_ms
        ),
        // Nothing to fall back to: log and park.
        Err(e) => error!("Boot sequence aborted: {}", e),
    }

    // ── 4. Idle ───────────────────────────────────────────────
    sequencer.idle_forever(&mut hw)
}
