//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements                | Connects to            |
//! |------------|---------------------------|------------------------|
//! | `console`  | ConsolePort               | UART0 via stdout       |
//! | `hardware` | ConsolePort               | console adapter        |
//! |            | IndicatorPort             | GPIO8 status LED       |
//! |            | DelayNs                   | FreeRTOS / ROM delays  |
//! | `log_sink` | EventSink                 | `log` facade           |
//! | `time`     | -                         | ESP32 system timer     |

pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod time;
