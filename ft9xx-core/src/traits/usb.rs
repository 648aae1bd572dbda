//! USB device stack trait

/// USB device states (USB 2.0 chapter 9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Cable connected, not yet powered
    Attached,
    /// VBUS present
    Powered,
    /// Bus reset seen, responding on address 0
    Default,
    /// Address assigned
    Address,
    /// Configuration selected
    Configured,
    /// Bus idle for more than 3 ms
    Suspended,
}

/// USB device stack
///
/// The power-management interrupt and the bus callbacks forward into this.
/// Calls arrive from interrupt context and must not block.
pub trait UsbDevice {
    /// The device port was connected to a host
    fn attach(&mut self);

    /// The device port was disconnected
    fn detach(&mut self);

    /// Bring the PHY out of suspend
    fn resume(&mut self);

    /// Force the stack into `state`
    fn set_state(&mut self, state: DeviceState);

    /// Advance the DFU runtime state machine after a bus reset
    fn dfu_reset(&mut self);
}
