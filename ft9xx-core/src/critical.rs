//! Critical section guard
//!
//! Wraps the `critical-section` acquire/release pair in a guard that
//! restores the interrupt mask it found on entry. Nested sections therefore
//! leave interrupts exactly as the outermost caller had them instead of
//! unconditionally re-enabling them.
//!
//! The restore behaviour comes from `critical_section::RestoreState`: an
//! inner release hands back the state its acquire saw, which inside an outer
//! section is "still masked".
//!
//! Guards must be ended in the reverse order they were begun. Letting them
//! fall out of scope gives that order automatically.

#![allow(unsafe_code)]

use core::marker::PhantomData;

use critical_section::RestoreState;

/// Token proving interrupts are masked, accepted by `critical_section::Mutex`
pub use critical_section::CriticalSection as Token;

/// Active critical section
///
/// Interrupt delivery stays suppressed until the guard is ended or dropped.
#[must_use = "the critical section ends as soon as the guard is dropped"]
pub struct CriticalSection {
    restore: RestoreState,
    // Releasing from another context than the one that acquired is unsound
    _not_send: PhantomData<*mut ()>,
}

impl CriticalSection {
    /// Mask interrupts and remember the previous state
    #[inline]
    pub fn begin() -> Self {
        // SAFETY: the matching release runs in `Drop`, and the guard cannot
        // leave this execution context.
        let restore = unsafe { critical_section::acquire() };
        Self {
            restore,
            _not_send: PhantomData,
        }
    }

    /// Restore the interrupt state captured by [`begin`](Self::begin)
    #[inline]
    pub fn end(self) {
        drop(self);
    }

    /// Borrow a token for use with `critical_section::Mutex`
    #[inline]
    pub fn token(&self) -> Token<'_> {
        // SAFETY: the token cannot outlive the borrow of the guard, and the
        // section stays active for as long as the guard exists.
        unsafe { Token::new() }
    }
}

impl Drop for CriticalSection {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: `restore` came from the acquire in `begin`, and scope order
        // releases nested guards innermost first.
        unsafe { critical_section::release(self.restore) }
    }
}

/// Run `f` inside a critical section
#[inline]
pub fn with<R>(f: impl FnOnce(Token<'_>) -> R) -> R {
    let section = CriticalSection::begin();
    f(section.token())
}
