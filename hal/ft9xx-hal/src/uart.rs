//! UART serial communication abstractions
//!
//! Provides the traits an interrupt-driven UART exposes to the template:
//! blocking transmit, single-byte receive from the interrupt handler, and
//! interrupt source control.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::UART_REFERENCE_HZ;

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// UART receiver
///
/// Called from the receive interrupt, so implementations must not block.
pub trait UartRx {
    /// Read the byte held in the receive register, if any
    fn read_received(&mut self) -> Option<u8>;
}

/// Interrupt sources on a UART
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartInterrupt {
    /// Receive data available
    Rx,
    /// Transmit holding register empty
    Tx,
}

/// UART setup and interrupt control
pub trait UartControl {
    /// Error type for configuration
    type Error;

    /// Configure line settings and enable the peripheral
    fn open(&mut self, config: &UartConfig) -> Result<(), Self::Error>;

    /// Check whether `source` raised the pending interrupt
    ///
    /// On FT9xx reading the interrupt status acknowledges it.
    fn is_interrupted(&mut self, source: UartInterrupt) -> bool;

    /// Enable a single interrupt source
    fn enable_interrupt(&mut self, source: UartInterrupt);

    /// Disable a single interrupt source
    fn disable_interrupt(&mut self, source: UartInterrupt);

    /// Allow the UART to forward enabled sources to the interrupt controller
    fn enable_interrupts_globally(&mut self);
}

/// UART configuration
///
/// Baud rate is derived as `UART_REFERENCE_HZ / (prescaler * divider)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UartConfig {
    /// Clock prescaler
    pub prescaler: u8,
    /// Baud divider
    pub divider: u16,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

/// Divider giving 19200 baud with a prescaler of 1
pub const DIVIDER_19200_BAUD: u16 = 1302;

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            prescaler: 1,
            divider: DIVIDER_19200_BAUD,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// Build an 8N1 configuration for `baudrate` with a prescaler of 1
    ///
    /// Returns `None` if the divider would not fit the register.
    pub fn for_baudrate(baudrate: u32) -> Option<Self> {
        if baudrate == 0 {
            return None;
        }
        let divider = UART_REFERENCE_HZ / baudrate;
        if divider == 0 || divider > u16::MAX as u32 {
            return None;
        }
        Some(Self {
            divider: divider as u16,
            ..Self::default()
        })
    }

    /// Effective baud rate in bits per second
    pub fn baudrate(&self) -> u32 {
        let div = self.prescaler as u32 * self.divider as u32;
        if div == 0 {
            0
        } else {
            UART_REFERENCE_HZ / div
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopBits {
    One,
    Two,
}
