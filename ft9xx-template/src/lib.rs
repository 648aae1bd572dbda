//! FT9xx template firmware
//!
//! Board-independent application layer: the boot sequence, the interrupt
//! handler bodies, the statics they share with the main loop, and the
//! serial console echo. Board support code supplies the peripheral
//! implementations from [`ft9xx_hal`] and wires the handlers to the vectors.

#![no_std]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod boot;
pub mod channels;
pub mod console;
pub mod handlers;

#[cfg(test)]
mod mock;

pub use boot::{boot, shutdown, BootError};
pub use console::service_console;
pub use handlers::Handlers;
