//! Pad function routing
//!
//! FT9xx pads are multiplexed between GPIO and peripheral signals. The
//! template only needs to hand two pads to UART0.

/// Function a pad can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadFunction {
    /// UART0 transmit data
    Uart0Txd,
    /// UART0 receive data
    Uart0Rxd,
}

/// Pad multiplexer
///
/// Implementations write the chip's pad control registers.
pub trait PadMux {
    /// Route `pad` to `function`
    fn set_function(&mut self, pad: u8, function: PadFunction);
}
