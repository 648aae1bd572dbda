//! Collaborator traits
//!
//! These traits define the interface between the interrupt logic and the
//! device stacks it forwards events to.

pub mod usb;

pub use usb::{DeviceState, UsbDevice};
