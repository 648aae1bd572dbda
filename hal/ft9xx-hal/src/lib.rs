//! FT9xx Hardware Abstraction Layer
//!
//! This crate defines the peripheral traits the template firmware needs
//! from an FT900/FT930 register layer. Keeping them as traits lets the
//! interrupt-facing logic in `ft9xx-core` run against mock peripherals on
//! the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ft9xx-template)           │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  ft9xx-core   │──────▶│  ft9xx-hal    │
//! │  (logic)      │       │  (traits)     │
//! └───────────────┘       └───────────────┘
//!                                 │
//!                                 ▼
//!                       ┌───────────────────┐
//!                       │ register drivers  │
//!                       └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`], [`uart::UartControl`] - Serial communication
//! - [`timer::TickTimer`] - Periodic hardware timer
//! - [`gpio::PadMux`] - Pad function routing
//! - [`power::PowerStatus`] - Power-management status register

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod power;
pub mod timer;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{PadFunction, PadMux};
pub use power::{PowerEvents, PowerStatus};
pub use timer::{TickTimer, TimerConfig};
pub use uart::{UartConfig, UartControl, UartInterrupt, UartRx, UartTx};

/// System clock feeding the timers (100 MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 100_000_000;

/// Reference clock feeding the UART baud generator (25 MHz)
pub const UART_REFERENCE_HZ: u32 = 25_000_000;
