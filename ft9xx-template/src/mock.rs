//! Mock peripherals for host tests

use std::vec::Vec;

use ft9xx_core::traits::{DeviceState, UsbDevice};
use ft9xx_hal::gpio::{PadFunction, PadMux};
use ft9xx_hal::power::{PowerEvents, PowerStatus};
use ft9xx_hal::timer::{TickTimer, TimerConfig};
use ft9xx_hal::uart::{UartConfig, UartControl, UartInterrupt, UartRx, UartTx};

#[derive(Default)]
pub struct MockUart {
    pub opened: Option<UartConfig>,
    pub fail_open: bool,
    /// Index of the `write_blocking` call that fails, if any
    pub fail_write_at: Option<usize>,
    pub tx: Vec<u8>,
    pub writes: Vec<Vec<u8>>,
    pub rx_enabled: bool,
    pub tx_enabled: bool,
    pub global_enabled: bool,
    pending: Vec<UartInterrupt>,
    rx_byte: Option<u8>,
}

impl MockUart {
    pub const fn new() -> Self {
        Self {
            opened: None,
            fail_open: false,
            fail_write_at: None,
            tx: Vec::new(),
            writes: Vec::new(),
            rx_enabled: false,
            tx_enabled: false,
            global_enabled: false,
            pending: Vec::new(),
            rx_byte: None,
        }
    }

    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::new()
        }
    }

    pub fn failing_write(index: usize) -> Self {
        Self {
            fail_write_at: Some(index),
            ..Self::new()
        }
    }

    /// Latch a received byte and raise the RX interrupt
    pub fn receive(&mut self, byte: u8) {
        self.rx_byte = Some(byte);
        self.raise(UartInterrupt::Rx);
    }

    pub fn raise(&mut self, source: UartInterrupt) {
        self.pending.push(source);
    }
}

impl UartTx for MockUart {
    type Error = ();

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail_write_at == Some(self.writes.len()) {
            self.fail_write_at = None;
            return Err(());
        }
        self.tx.extend_from_slice(data);
        self.writes.push(Vec::from(data));
        Ok(())
    }
}

impl UartRx for MockUart {
    fn read_received(&mut self) -> Option<u8> {
        self.rx_byte.take()
    }
}

impl UartControl for MockUart {
    type Error = ();

    fn open(&mut self, config: &UartConfig) -> Result<(), ()> {
        if self.fail_open {
            return Err(());
        }
        self.opened = Some(*config);
        Ok(())
    }

    fn is_interrupted(&mut self, source: UartInterrupt) -> bool {
        match self.pending.iter().position(|&s| s == source) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    fn enable_interrupt(&mut self, source: UartInterrupt) {
        match source {
            UartInterrupt::Rx => self.rx_enabled = true,
            UartInterrupt::Tx => self.tx_enabled = true,
        }
    }

    fn disable_interrupt(&mut self, source: UartInterrupt) {
        match source {
            UartInterrupt::Rx => self.rx_enabled = false,
            UartInterrupt::Tx => self.tx_enabled = false,
        }
    }

    fn enable_interrupts_globally(&mut self) {
        self.global_enabled = true;
    }
}

#[derive(Default)]
pub struct MockTimer {
    pub configured: Option<TimerConfig>,
    pub interrupt_enabled: bool,
    pub running: bool,
    expired: bool,
}

impl MockTimer {
    pub const fn new() -> Self {
        Self {
            configured: None,
            interrupt_enabled: false,
            running: false,
            expired: false,
        }
    }

    pub fn expire(&mut self) {
        self.expired = true;
    }
}

impl TickTimer for MockTimer {
    type Error = ();

    fn configure(&mut self, config: &TimerConfig) -> Result<(), ()> {
        self.configured = Some(*config);
        Ok(())
    }

    fn enable_interrupt(&mut self) {
        self.interrupt_enabled = true;
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_interrupted(&mut self) -> bool {
        core::mem::take(&mut self.expired)
    }
}

#[derive(Default)]
pub struct MockPads {
    pub assignments: Vec<(u8, PadFunction)>,
}

impl PadMux for MockPads {
    fn set_function(&mut self, pad: u8, function: PadFunction) {
        self.assignments.push((pad, function));
    }
}

#[derive(Default)]
pub struct MockPower {
    latched: PowerEvents,
    pub remote_wakeup: bool,
}

impl MockPower {
    pub fn latched(events: PowerEvents) -> Self {
        Self {
            latched: events,
            remote_wakeup: false,
        }
    }
}

impl PowerStatus for MockPower {
    fn pending(&self) -> PowerEvents {
        self.latched
    }

    fn clear(&mut self, events: PowerEvents) {
        self.latched.remove(events);
    }

    fn remote_wakeup_active(&self) -> bool {
        self.remote_wakeup
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsbCall {
    Attach,
    Detach,
    Resume,
    SetState(DeviceState),
    DfuReset,
}

#[derive(Default)]
pub struct MockUsb {
    pub calls: Vec<UsbCall>,
}

impl UsbDevice for MockUsb {
    fn attach(&mut self) {
        self.calls.push(UsbCall::Attach);
    }

    fn detach(&mut self) {
        self.calls.push(UsbCall::Detach);
    }

    fn resume(&mut self) {
        self.calls.push(UsbCall::Resume);
    }

    fn set_state(&mut self, state: DeviceState) {
        self.calls.push(UsbCall::SetState(state));
    }

    fn dfu_reset(&mut self) {
        self.calls.push(UsbCall::DfuReset);
    }
}
