//! Application core: pure domain logic, zero I/O.
//!
//! The boot sequence and idle loop live here. All interaction with the
//! board happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod events;
pub mod messages;
pub mod ports;
pub mod service;
