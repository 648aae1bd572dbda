//! Board-agnostic core logic for the FT9xx template firmware
//!
//! This crate contains everything between the peripheral traits in
//! `ft9xx-hal` and the application wiring:
//!
//! - Critical-section guard with restore-state nesting
//! - Fixed-capacity UART receive ring buffer and its interrupt-safe channel
//! - Millisecond tick counter
//! - Power-management event handling and USB bus callbacks
//! - Interrupt handler table
//! - Board configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod critical;
pub mod interrupt;
pub mod power;
pub mod ring;
pub mod rx;
pub mod tick;
pub mod traits;
pub mod usb;

pub use ring::{RingBuffer, RingState, RX_BUFFER_SIZE};
pub use rx::RxChannel;
pub use tick::MillisCounter;
