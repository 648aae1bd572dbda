//! Fixed-capacity byte ring buffer
//!
//! Single producer, single consumer. Instead of comparing the read and
//! write indices (which is ambiguous when they are equal) the buffer keeps
//! a count of free slots:
//!
//! ```text
//!   read_index          write_index
//!       │                    │
//!       ▼                    ▼
//! ┌───┬───┬───┬───┬───┬───┬───┬───┐
//! │   │ a │ b │ c │ d │ e │   │   │   available = 3
//! └───┴───┴───┴───┴───┴───┴───┴───┘
//! ```
//!
//! When full, new bytes are dropped and the unread ones are kept.
//!
//! This type has no interior synchronization. Share it between an
//! interrupt and the main loop through [`RxChannel`](crate::rx::RxChannel).

/// UART0 receive buffer capacity
pub const RX_BUFFER_SIZE: usize = 128;

/// Snapshot of the buffer bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingState {
    /// Next slot the producer writes
    pub write_index: usize,
    /// Next slot the consumer reads
    pub read_index: usize,
    /// Free slots
    pub available: usize,
}

/// Circular byte buffer with `N` slots of inline storage
#[derive(Debug, Clone)]
pub struct RingBuffer<const N: usize = RX_BUFFER_SIZE> {
    storage: [u8; N],
    write_index: usize,
    read_index: usize,
    available: usize,
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            storage: [0; N],
            write_index: 0,
            read_index: 0,
            available: N,
        }
    }

    #[inline]
    const fn advance(index: usize) -> usize {
        let next = index + 1;
        if next == N {
            0
        } else {
            next
        }
    }

    /// Store one byte
    ///
    /// Returns `false` and leaves the buffer untouched when it is full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        if self.available == 0 {
            return false;
        }

        self.storage[self.write_index] = byte;
        self.write_index = Self::advance(self.write_index);
        self.available -= 1;
        true
    }

    /// Remove the oldest byte, or `None` if the buffer is empty
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        if self.available >= N {
            return None;
        }

        let byte = self.storage[self.read_index];
        self.read_index = Self::advance(self.read_index);
        self.available += 1;
        Some(byte)
    }

    /// Discard all unread bytes and rewind both indices
    pub fn reset(&mut self) {
        self.write_index = 0;
        self.read_index = 0;
        self.available = N;
    }

    /// Total number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free slots
    pub fn available(&self) -> usize {
        self.available
    }

    /// Unread bytes
    pub fn len(&self) -> usize {
        N - self.available
    }

    pub fn is_empty(&self) -> bool {
        self.available == N
    }

    pub fn is_full(&self) -> bool {
        self.available == 0
    }

    /// Current indices and free-slot count
    pub fn state(&self) -> RingState {
        RingState {
            write_index: self.write_index,
            read_index: self.read_index,
            available: self.available,
        }
    }
}
