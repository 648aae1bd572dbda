//! Interrupt handler table
//!
//! Interrupt vectors are bound to plain `fn()` handlers at runtime and
//! invoked by [`InterruptTable::dispatch`] from the vector entry. Handlers
//! reach their state through `static`s (for example an
//! [`RxChannel`](crate::rx::RxChannel)).
//!
//! Handlers run in interrupt context: they must not block, must not
//! allocate, and should return quickly.

use core::cell::Cell;

use critical_section::Mutex;
use portable_atomic::{AtomicBool, Ordering};

use crate::critical;

/// Interrupt handler
pub type Handler = fn();

/// Number of vectors on the FT9xx interrupt controller
pub const VECTOR_COUNT: usize = 32;

/// Interrupt sources used by the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Vector {
    /// Power management (interrupt 0)
    Power = 0,
    /// UART0
    Uart0 = 13,
    /// Timers A-D and watchdog
    Timers = 17,
}

impl Vector {
    /// Index into the vector table
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Table of attached handlers plus the global enable
pub struct InterruptTable {
    handlers: Mutex<Cell<[Option<Handler>; VECTOR_COUNT]>>,
    enabled: AtomicBool,
}

impl Default for InterruptTable {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptTable {
    /// Create a table with nothing attached and interrupts disabled
    pub const fn new() -> Self {
        Self {
            handlers: Mutex::new(Cell::new([None; VECTOR_COUNT])),
            enabled: AtomicBool::new(false),
        }
    }

    /// Bind `handler` to `vector`, replacing any previous handler
    pub fn attach(&self, vector: Vector, handler: Handler) {
        critical::with(|cs| {
            let cell = self.handlers.borrow(cs);
            let mut table = cell.get();
            table[vector.index()] = Some(handler);
            cell.set(table);
        });
    }

    /// Unbind whatever is attached to `vector`
    pub fn detach(&self, vector: Vector) {
        critical::with(|cs| {
            let cell = self.handlers.borrow(cs);
            let mut table = cell.get();
            table[vector.index()] = None;
            cell.set(table);
        });
    }

    /// Whether `vector` has a handler
    pub fn is_attached(&self, vector: Vector) -> bool {
        self.handler(vector).is_some()
    }

    /// Start delivering interrupts
    pub fn enable_globally(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    /// Stop delivering interrupts
    pub fn disable_globally(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Run the handler for `vector`
    ///
    /// Returns `false` if interrupts are globally disabled or nothing is
    /// attached. The handler runs outside the table's critical section.
    pub fn dispatch(&self, vector: Vector) -> bool {
        if !self.is_enabled() {
            return false;
        }

        match self.handler(vector) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    fn handler(&self, vector: Vector) -> Option<Handler> {
        critical::with(|cs| self.handlers.borrow(cs).get()[vector.index()])
    }
}
