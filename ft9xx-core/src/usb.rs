//! USB bus callbacks
//!
//! Invoked by the device stack when the bus changes state. Suspend and
//! resume need no action in the template; a bus reset returns the device to
//! the `Default` state and lets the DFU runtime advance (APPIDLE to DFUIDLE,
//! or a chip reset when a manifest is waiting for one).

use crate::traits::{DeviceState, UsbDevice};

/// Bus entered suspend
pub fn on_suspend(_status: u8) {}

/// Bus resumed, before restarting after suspend
pub fn on_resume(_status: u8) {}

/// Bus reset
pub fn on_reset<D: UsbDevice>(usb: &mut D, _status: u8) {
    usb.set_state(DeviceState::Default);
    usb.dfu_reset();
}
