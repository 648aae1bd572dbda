//! Interrupt handler bodies
//!
//! Each handler takes the peripheral it services and the shared state it
//! updates. The board support code wraps them in zero-argument `fn()`s that
//! pass its peripheral singletons and the statics from
//! [`channels`](crate::channels), and attaches those to the interrupt table.
//!
//! Handlers run in interrupt context: no blocking, no allocation.

pub mod power;
pub mod timer;
pub mod uart0;

pub use power::power_isr;
pub use timer::timer_isr;
pub use uart0::uart0_isr;

use ft9xx_core::interrupt::Handler;

/// Handlers the boot sequence attaches
#[derive(Clone, Copy)]
pub struct Handlers {
    /// UART0 vector
    pub uart0: Handler,
    /// Timers vector
    pub timer: Handler,
    /// Power-management vector
    pub power: Handler,
}
