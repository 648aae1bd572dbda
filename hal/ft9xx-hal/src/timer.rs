//! Hardware timer abstraction
//!
//! The template runs one timer as a periodic tick source.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SYSTEM_CLOCK_HZ;

/// Timer configuration
///
/// The tick timer always counts down and reloads continuously. Period is
/// `prescaler * initial / SYSTEM_CLOCK_HZ` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Clock prescaler
    pub prescaler: u16,
    /// Initial (reload) count
    pub initial: u16,
}

impl Default for TimerConfig {
    /// 1 ms continuous down-counter
    fn default() -> Self {
        Self {
            prescaler: 1000,
            initial: 100,
        }
    }
}

impl TimerConfig {
    /// Expiry period in microseconds
    pub fn period_us(&self) -> u32 {
        let ticks = self.prescaler as u64 * self.initial as u64;
        (ticks * 1_000_000 / SYSTEM_CLOCK_HZ as u64) as u32
    }
}

/// Periodic hardware timer
pub trait TickTimer {
    /// Error type for configuration
    type Error;

    /// Apply prescaler and reload value as a continuous down-counter
    fn configure(&mut self, config: &TimerConfig) -> Result<(), Self::Error>;

    /// Enable the expiry interrupt
    fn enable_interrupt(&mut self);

    /// Start counting
    fn start(&mut self);

    /// Stop counting
    fn stop(&mut self);

    /// Check (and acknowledge) whether this timer raised the pending interrupt
    fn is_interrupted(&mut self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_is_one_millisecond() {
        assert_eq!(TimerConfig::default().period_us(), 1000);
    }

    #[test]
    fn test_period_scales_with_initial() {
        let config = TimerConfig {
            initial: 1000,
            ..TimerConfig::default()
        };
        assert_eq!(config.period_us(), 10_000);
    }
}
