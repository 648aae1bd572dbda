//! Power-management interrupt

use ft9xx_core::power::handle_power_events;
use ft9xx_core::traits::UsbDevice;
use ft9xx_hal::power::{PowerEvents, PowerStatus};

/// Acknowledge latched USB bus events and forward them to the device stack
pub fn power_isr<S, D>(status: &mut S, usb: &mut D) -> PowerEvents
where
    S: PowerStatus,
    D: UsbDevice,
{
    let handled = handle_power_events(status, usb);
    if !handled.is_empty() {
        trace!("Power events: {}", handled.bits());
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPower, MockUsb, UsbCall};
    use ft9xx_core::traits::DeviceState;

    #[test]
    fn test_connect_and_reset_in_one_interrupt() {
        let mut status = MockPower::latched(PowerEvents::DEVICE_CONNECT | PowerEvents::HOST_RESET);
        let mut usb = MockUsb::default();

        let handled = power_isr(&mut status, &mut usb);

        assert_eq!(handled, PowerEvents::DEVICE_CONNECT | PowerEvents::HOST_RESET);
        assert_eq!(usb.calls, [UsbCall::Attach, UsbCall::Resume]);
        assert!(status.pending().is_empty());
    }

    #[test]
    fn test_resume_skipped_during_remote_wakeup() {
        let mut status = MockPower::latched(PowerEvents::HOST_RESUME);
        status.remote_wakeup = true;
        let mut usb = MockUsb::default();

        let handled = power_isr(&mut status, &mut usb);

        assert_eq!(handled, PowerEvents::HOST_RESUME);
        assert!(usb.calls.is_empty());
        assert!(status.pending().is_empty());
    }

    #[test]
    fn test_bus_reset_callback_after_host_reset() {
        let mut status = MockPower::latched(PowerEvents::HOST_RESET);
        let mut usb = MockUsb::default();

        power_isr(&mut status, &mut usb);
        ft9xx_core::usb::on_reset(&mut usb, 0);

        assert_eq!(
            usb.calls,
            [
                UsbCall::Resume,
                UsbCall::SetState(DeviceState::Default),
                UsbCall::DfuReset
            ]
        );
    }
}
