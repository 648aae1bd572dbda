//! Millisecond tick counter
//!
//! Incremented by the timer interrupt, read by the main loop. The counter
//! is 32 bits wide and wraps silently after roughly 49.7 days at 1 kHz, so
//! intervals must be computed with wrapping subtraction
//! ([`MillisCounter::elapsed_since`]).
//!
//! The counter publishes no other data, so all accesses use `Relaxed`
//! ordering.

use portable_atomic::{AtomicU32, Ordering};

/// Free-running millisecond counter
#[derive(Debug)]
pub struct MillisCounter {
    count: AtomicU32,
}

impl Default for MillisCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisCounter {
    /// Create a counter at zero
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter at an arbitrary value
    pub const fn starting_at(value: u32) -> Self {
        Self {
            count: AtomicU32::new(value),
        }
    }

    /// Advance by one millisecond (timer interrupt context)
    #[inline]
    pub fn tick(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count
    #[inline]
    pub fn now(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Milliseconds since `start`, correct across one wrap
    pub fn elapsed_since(&self, start: u32) -> u32 {
        self.now().wrapping_sub(start)
    }

    /// Whether at least `duration_ms` have passed since `start`
    pub fn has_elapsed(&self, start: u32, duration_ms: u32) -> bool {
        self.elapsed_since(start) >= duration_ms
    }

    /// Set the count back to zero
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}
