//! Board configuration
//!
//! Everything the boot sequence needs to know about the board: which chip
//! variant (this decides the UART0 pads), the UART line settings, and the
//! tick timer settings. `Default` gives the template values: 19200 baud
//! 8N1 and a 1 ms tick.

use ft9xx_hal::timer::TimerConfig;
use ft9xx_hal::uart::UartConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serialized configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Tick period the millisecond counter assumes
pub const TICK_PERIOD_US: u32 = 1000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// UART prescaler or divider is zero
    InvalidUart,
    /// Timer prescaler or initial count is zero
    InvalidTimer,
    /// Timer does not expire every millisecond
    TickPeriod,
    /// Output buffer too small
    BufferTooSmall,
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Stored data was written by a different format version
    VersionMismatch,
}

/// Chip variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Chip {
    #[default]
    Ft900,
    Ft930,
}

/// UART0 pad assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartPads {
    /// Pad carrying TXD
    pub txd: u8,
    /// Pad carrying RXD
    pub rxd: u8,
}

impl Chip {
    /// Pads UART0 is routed to on this chip
    pub const fn uart0_pads(self) -> UartPads {
        match self {
            Chip::Ft900 => UartPads { txd: 48, rxd: 49 },
            Chip::Ft930 => UartPads { txd: 23, rxd: 22 },
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Chip variant
    pub chip: Chip,
    /// UART0 line settings
    pub uart: UartConfig,
    /// Millisecond tick timer
    pub tick: TimerConfig,
}

impl BoardConfig {
    /// Check the settings can be programmed and give a 1 ms tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uart.prescaler == 0 || self.uart.divider == 0 {
            return Err(ConfigError::InvalidUart);
        }
        if self.tick.prescaler == 0 || self.tick.initial == 0 {
            return Err(ConfigError::InvalidTimer);
        }
        if self.tick.period_us() != TICK_PERIOD_US {
            return Err(ConfigError::TickPeriod);
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl BoardConfig {
    /// Write the version byte and postcard payload into `buffer`
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        let (version, payload) = buffer
            .split_first_mut()
            .ok_or(ConfigError::BufferTooSmall)?;
        *version = CONFIG_VERSION;

        let used = postcard::to_slice(self, payload)
            .map_err(|_| ConfigError::Serialize)?
            .len();
        Ok(used + 1)
    }

    /// Decode and validate a configuration written by [`encode`](Self::encode)
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let (&version, payload) = bytes.split_first().ok_or(ConfigError::Deserialize)?;
        if version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        let config: Self = postcard::from_bytes(payload).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}
