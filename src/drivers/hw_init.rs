//! Raw peripheral access for the boot path.
//!
//! Configures the status LED GPIO and the console UART using ESP-IDF sys
//! calls. On non-espidf targets every call is a logged no-op so the
//! drivers above this layer run unchanged on the host.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::{ConsoleError, IndicatorError};

// ── GPIO Outputs ──────────────────────────────────────────────

/// Configure `pin` as a push-pull output, no pulls, no interrupt.
#[cfg(target_os = "espidf")]
pub fn configure_output(pin: i32) -> Result<(), IndicatorError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        ..Default::default()
    };
    // SAFETY: gpio_config only reads `cfg`; called from the main task during boot.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(IndicatorError::ConfigFailed(ret));
    }
    log::info!("hw_init: GPIO{} configured as output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_output(pin: i32) -> Result<(), IndicatorError> {
    log::info!("hw_init(sim): GPIO{} output config skipped", pin);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), IndicatorError> {
    // SAFETY: gpio_set_level writes to a pin configured by configure_output();
    // main task only.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(IndicatorError::WriteFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) -> Result<(), IndicatorError> {
    Ok(())
}

// ── Console UART ──────────────────────────────────────────────

/// Set the console UART's symbol rate. The ROM bootloader has already
/// brought the port up; only the divider is reprogrammed.
#[cfg(target_os = "espidf")]
pub fn set_console_baud(port: i32, baud_rate: u32) -> Result<(), ConsoleError> {
    // SAFETY: uart_set_baudrate takes the port's own spinlock; the console
    // UART clock is enabled by the bootloader.
    let ret = unsafe { uart_set_baudrate(port as uart_port_t, baud_rate) };
    if ret != ESP_OK as i32 {
        return Err(ConsoleError::OpenFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn set_console_baud(port: i32, baud_rate: u32) -> Result<(), ConsoleError> {
    log::info!("hw_init(sim): UART{} baud {} skipped", port, baud_rate);
    Ok(())
}
