//! Interrupt-safe UART receive channel
//!
//! Wraps a [`RingBuffer`] so a single instance can live in a `static` and be
//! shared between the receive interrupt (producer) and the main loop
//! (consumer). Every access to the indices and free-slot count happens with
//! interrupts masked, so the consumer never sees a half-updated buffer.
//!
//! The producer path runs inside the interrupt handler and still enters the
//! critical section. Sections restore the mask they found, so this never
//! re-enables interrupts early.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;

use crate::critical::{self, CriticalSection};
use crate::ring::{RingBuffer, RingState, RX_BUFFER_SIZE};

/// Receive ring buffer shared between an interrupt and the main loop
pub struct RxChannel<const N: usize = RX_BUFFER_SIZE> {
    ring: Mutex<RefCell<RingBuffer<N>>>,
}

impl<const N: usize> Default for RxChannel<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RxChannel<N> {
    /// Create an empty channel
    pub const fn new() -> Self {
        Self {
            ring: Mutex::new(RefCell::new(RingBuffer::new())),
        }
    }

    /// Store a received byte (interrupt context)
    ///
    /// Silently drops the byte when the buffer is full.
    #[inline]
    pub fn push(&self, byte: u8) {
        critical::with(|cs| {
            let _ = self.ring.borrow_ref_mut(cs).push(byte);
        });
    }

    /// Take the oldest received byte (main-loop context)
    ///
    /// Returns `None` when nothing is buffered. Poll again later.
    #[inline]
    pub fn pop(&self) -> Option<u8> {
        let section = CriticalSection::begin();
        let byte = self.ring.borrow_ref_mut(section.token()).pop();
        section.end();
        byte
    }

    /// Pop bytes into `buf` until it is full or the channel is empty
    ///
    /// Each byte is taken in its own short critical section so the receive
    /// interrupt is never held off for the whole copy.
    pub fn read_into(&self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.pop() {
                Some(byte) => {
                    *slot = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    /// Pop up to `M` bytes into a vector
    pub fn drain<const M: usize>(&self) -> Vec<u8, M> {
        let mut out = Vec::new();
        while !out.is_full() {
            match self.pop() {
                // Cannot fail, capacity checked above
                Some(byte) => {
                    let _ = out.push(byte);
                }
                None => break,
            }
        }
        out
    }

    /// Discard everything buffered
    pub fn reset(&self) {
        critical::with(|cs| self.ring.borrow_ref_mut(cs).reset());
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        critical::with(|cs| self.ring.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        critical::with(|cs| self.ring.borrow_ref(cs).is_empty())
    }

    /// Consistent snapshot of the buffer bookkeeping
    pub fn state(&self) -> RingState {
        critical::with(|cs| self.ring.borrow_ref(cs).state())
    }
}
