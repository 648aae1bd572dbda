//! Boot and shutdown sequences
//!
//! Brings the board from reset to a running state: UART0 routed and
//! opened, the console cleared, the 1 ms tick running, and the timer,
//! power-management and UART0 handlers attached with interrupts enabled.

use ft9xx_core::config::{BoardConfig, ConfigError};
use ft9xx_core::interrupt::{InterruptTable, Vector};
use ft9xx_hal::gpio::{PadFunction, PadMux};
use ft9xx_hal::timer::TickTimer;
use ft9xx_hal::uart::{UartControl, UartInterrupt, UartTx};

use crate::handlers::Handlers;

/// ANSI/VT100 clear screen and cursor home
pub const CLEAR_SCREEN: &[u8] = b"\x1B[2J\x1B[H";

/// Welcome banner written once the tick is running
pub const BANNER: &[u8] = b"---------------------------------------------------------------------\r\n\
Welcome to the FT9xx template firmware\r\n\
---------------------------------------------------------------------\r\n";

/// Boot failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// Configuration rejected before touching hardware
    Config(ConfigError),
    /// UART0 could not be opened or written
    Uart,
    /// Tick timer could not be configured
    Timer,
}

impl From<ConfigError> for BootError {
    fn from(e: ConfigError) -> Self {
        BootError::Config(e)
    }
}

/// Run the boot sequence
///
/// If the banner cannot be written the tick is stopped and the timer and
/// power handlers are detached again before returning. Earlier failures
/// happen before anything is started.
pub fn boot<U, T, P>(
    config: &BoardConfig,
    uart: &mut U,
    timer: &mut T,
    pads: &mut P,
    interrupts: &InterruptTable,
    handlers: &Handlers,
) -> Result<(), BootError>
where
    U: UartTx + UartControl,
    T: TickTimer,
    P: PadMux,
{
    config.validate()?;
    info!("FT9xx template starting...");

    // Route UART0 to the pads for this chip variant
    let route = config.chip.uart0_pads();
    pads.set_function(route.txd, PadFunction::Uart0Txd);
    pads.set_function(route.rxd, PadFunction::Uart0Rxd);

    uart.open(&config.uart).map_err(|_| BootError::Uart)?;
    uart.write_blocking(CLEAR_SCREEN).map_err(|_| BootError::Uart)?;
    info!("UART0 open at {} baud", config.uart.baudrate());

    timer.configure(&config.tick).map_err(|_| BootError::Timer)?;
    timer.enable_interrupt();
    timer.start();
    interrupts.attach(Vector::Timers, handlers.timer);
    interrupts.attach(Vector::Power, handlers.power);
    debug!("Tick timer running, period {} us", config.tick.period_us());

    if uart.write_blocking(BANNER).is_err() {
        interrupts.detach(Vector::Power);
        interrupts.detach(Vector::Timers);
        timer.stop();
        warn!("Banner write failed, tick stopped");
        return Err(BootError::Uart);
    }

    interrupts.attach(Vector::Uart0, handlers.uart0);
    uart.disable_interrupt(UartInterrupt::Tx);
    uart.enable_interrupt(UartInterrupt::Rx);
    uart.enable_interrupts_globally();
    debug!("UART0 receive interrupt attached");

    interrupts.enable_globally();
    info!("Interrupts enabled, boot complete");

    Ok(())
}

/// Stop the tick and stop delivering interrupts
pub fn shutdown<T: TickTimer>(timer: &mut T, interrupts: &InterruptTable) {
    interrupts.detach(Vector::Timers);
    interrupts.disable_globally();
    timer.stop();
    info!("Tick stopped, interrupts disabled");
}
