//! Fixed console text.

use core::fmt::Write;

pub const BANNER_TITLE: &str = "=== Dino Skull Capacitive Sensor ===";
pub const INITIALIZING: &str = "Initializing...";
pub const INIT_SUCCESS: &str = "Project initialized successfully.";
pub const READY_FOR_SENSOR: &str = "Ready for capacitive sensor implementation.";

/// `Ready! LED flashed N times.`
pub fn ready_line(flashes: u8) -> heapless::String<32> {
    let mut line = heapless::String::new();
    // "Ready! LED flashed 255 times." is 29 bytes, always fits.
    let _ = write!(line, "Ready! LED flashed {} times.", flashes);
    line
}
