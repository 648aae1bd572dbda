//! UART0 receive interrupt
//!
//! Moves the received byte into the receive channel. When the channel is
//! full the byte is dropped; older unread bytes are kept.

use ft9xx_core::RxChannel;
use ft9xx_hal::uart::{UartControl, UartInterrupt, UartRx};

/// Service a UART0 interrupt
pub fn uart0_isr<U, const N: usize>(uart: &mut U, rx: &RxChannel<N>)
where
    U: UartRx + UartControl,
{
    if uart.is_interrupted(UartInterrupt::Rx) {
        if let Some(byte) = uart.read_received() {
            rx.push(byte);
        }
    }
}
