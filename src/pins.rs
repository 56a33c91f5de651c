//! GPIO / peripheral pin assignments for the ESP32-C3 DevKitM-1.
//!
//! Single source of truth; every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// On-board LED. Active HIGH on the DevKitM-1.
pub const STATUS_LED_GPIO: i32 = 8;

/// Highest GPIO number on the ESP32-C3 (GPIO0..=GPIO21).
pub const MAX_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// UART console
// ---------------------------------------------------------------------------

/// UART peripheral routed to the USB-serial bridge (ESP-IDF primary console).
pub const CONSOLE_UART_PORT: i32 = 0;
/// Console symbol rate.
pub const CONSOLE_BAUD_RATE: u32 = 115_200;

