//! State shared between interrupt handlers and the main loop
//!
//! Each item has a `const` constructor so it can live in a `static` with no
//! runtime initialization. Handlers attached to the interrupt table reach
//! their state through these.

use ft9xx_core::interrupt::InterruptTable;
use ft9xx_core::{MillisCounter, RxChannel, RX_BUFFER_SIZE};

/// UART0 receive ring buffer (filled by the UART0 interrupt)
pub static UART0_RX: RxChannel<RX_BUFFER_SIZE> = RxChannel::new();

/// Milliseconds since the tick timer started (advanced by the timer interrupt)
pub static MS_COUNTER: MillisCounter = MillisCounter::new();

/// Interrupt vector bindings
pub static INTERRUPTS: InterruptTable = InterruptTable::new();
