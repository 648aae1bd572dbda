//! Power-management interrupt handling
//!
//! The power-management interrupt latches four USB bus events. Each one is
//! acknowledged by writing its bit back and then forwarded to the device
//! stack. The events are independent: any combination can be pending in a
//! single invocation, and the status register is re-read before each check
//! so an event latched mid-handler is still serviced.
//!
//! | Event              | Forwarded to                                  |
//! |--------------------|-----------------------------------------------|
//! | device connect     | [`UsbDevice::attach`]                         |
//! | device disconnect  | [`UsbDevice::detach`]                         |
//! | host reset         | [`UsbDevice::resume`]                         |
//! | host resume        | [`UsbDevice::resume`], unless remote wakeup is being driven |

use ft9xx_hal::power::{PowerEvents, PowerStatus};

use crate::traits::UsbDevice;

/// Service every latched power-management event
///
/// Returns the set of events that were acknowledged.
pub fn handle_power_events<S, D>(status: &mut S, usb: &mut D) -> PowerEvents
where
    S: PowerStatus,
    D: UsbDevice,
{
    let mut handled = PowerEvents::empty();

    if status.pending().contains(PowerEvents::DEVICE_CONNECT) {
        status.clear(PowerEvents::DEVICE_CONNECT);
        usb.attach();
        handled.insert(PowerEvents::DEVICE_CONNECT);
    }

    if status.pending().contains(PowerEvents::DEVICE_DISCONNECT) {
        status.clear(PowerEvents::DEVICE_DISCONNECT);
        usb.detach();
        handled.insert(PowerEvents::DEVICE_DISCONNECT);
    }

    if status.pending().contains(PowerEvents::HOST_RESET) {
        status.clear(PowerEvents::HOST_RESET);
        usb.resume();
        handled.insert(PowerEvents::HOST_RESET);
    }

    if status.pending().contains(PowerEvents::HOST_RESUME) {
        status.clear(PowerEvents::HOST_RESUME);
        // While driving K-state the 1 ms remote-wakeup window must finish
        // before the PHY is resumed
        if !status.remote_wakeup_active() {
            usb.resume();
        }
        handled.insert(PowerEvents::HOST_RESUME);
    }

    handled
}
