//! Power-management status register
//!
//! The upper half of the power-management config register latches USB
//! bus events. Each latched bit is cleared by writing it back as 1.

/// Set of latched power-management events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerEvents(u8);

impl PowerEvents {
    /// Device port connected to a host
    pub const DEVICE_CONNECT: Self = Self(1 << 0);
    /// Device port disconnected
    pub const DEVICE_DISCONNECT: Self = Self(1 << 1);
    /// Host drove a bus reset
    pub const HOST_RESET: Self = Self(1 << 2);
    /// Host drove resume signalling
    pub const HOST_RESUME: Self = Self(1 << 3);

    /// No events
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All four events
    pub const fn all() -> Self {
        Self(0x0F)
    }

    /// Build from raw bits, discarding unknown ones
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// Raw bit representation
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit is set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Set every bit of `other`
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear every bit of `other`
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl core::ops::BitOr for PowerEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Power-management status register
pub trait PowerStatus {
    /// Read the currently latched events
    fn pending(&self) -> PowerEvents;

    /// Acknowledge `events` (write-one-to-clear)
    fn clear(&mut self, events: PowerEvents);

    /// Whether the device is driving remote-wakeup K-state on the bus
    fn remote_wakeup_active(&self) -> bool;
}
