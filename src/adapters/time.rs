//! ESP32 time adapter.
//!
//! Blocking delays and monotonic uptime for the Dino Skull firmware.
//!
//! - **`target_os = "espidf"`**: `FreeRtos::delay_ms` (yields to the
//!   scheduler, keeps the idle-task watchdog fed), `Ets::delay_us` for
//!   sub-millisecond waits, and `esp_timer_get_time()` for uptime.
//! - **`not(target_os = "espidf")`**: `std::thread::sleep` and
//!   `std::time::Instant` for host-side simulation.

/// Block the calling task for `ms` milliseconds.
#[cfg(target_os = "espidf")]
pub fn sleep_ms(ms: u32) {
    esp_idf_hal::delay::FreeRtos::delay_ms(ms);
}

/// Block the calling task for `ms` milliseconds.
#[cfg(not(target_os = "espidf"))]
pub fn sleep_ms(ms: u32) {
    std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
}

/// Busy-wait `us` microseconds.
#[cfg(target_os = "espidf")]
pub fn sleep_us(us: u32) {
    esp_idf_hal::delay::Ets::delay_us(us);
}

/// Busy-wait `us` microseconds.
#[cfg(not(target_os = "espidf"))]
pub fn sleep_us(us: u32) {
    std::thread::sleep(std::time::Duration::from_micros(u64::from(us)));
}

/// Monotonic uptime clock.
pub struct UptimeClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot.
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u64 {
        // SAFETY: esp_timer_get_time reads the RTC-backed system timer.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000
    }

    /// Milliseconds since this clock was created.
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
