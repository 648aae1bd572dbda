//! Serial console echo
//!
//! The main loop drains the UART0 receive channel and writes every byte
//! back out, so a terminal attached to the board sees what it typed.

use ft9xx_core::RxChannel;
use ft9xx_hal::uart::UartTx;

const CHUNK: usize = 16;

/// Echo pending received bytes back to the transmitter
///
/// Handles at most `N` bytes per call, which covers everything buffered when
/// the call starts. Bytes arriving during the call may wait for the next one.
/// Returns the number of bytes echoed.
///
/// If a write fails the error is returned at once. The chunk being written
/// has already been taken from `rx` and is lost.
pub fn service_console<U, const N: usize>(rx: &RxChannel<N>, tx: &mut U) -> Result<usize, U::Error>
where
    U: UartTx,
{
    let mut buf = [0u8; CHUNK];
    let mut echoed = 0;

    while echoed < N {
        let want = CHUNK.min(N - echoed);
        let n = rx.read_into(&mut buf[..want]);
        if n == 0 {
            break;
        }
        tx.write_blocking(&buf[..n])?;
        echoed += n;
    }

    if echoed > 0 {
        trace!("Echoed {} bytes", echoed);
    }
    Ok(echoed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockUart;

    #[test]
    fn test_echo_in_order() {
        let rx: RxChannel<8> = RxChannel::new();
        let mut uart = MockUart::default();
        for b in b"hello" {
            rx.push(*b);
        }

        let n = service_console(&rx, &mut uart).unwrap();

        assert_eq!(n, 5);
        assert_eq!(uart.tx, b"hello");
        assert!(rx.is_empty());
    }

    #[test]
    fn test_nothing_pending() {
        let rx: RxChannel<8> = RxChannel::new();
        let mut uart = MockUart::default();

        assert_eq!(service_console(&rx, &mut uart).unwrap(), 0);
        assert!(uart.writes.is_empty());
    }

    #[test]
    fn test_large_buffer_written_in_chunks() {
        let rx: RxChannel<40> = RxChannel::new();
        let mut uart = MockUart::default();
        for i in 0..40u8 {
            rx.push(i);
        }

        let n = service_console(&rx, &mut uart).unwrap();

        assert_eq!(n, 40);
        assert_eq!(uart.writes.len(), 3);
        let expected: std::vec::Vec<u8> = (0..40).collect();
        assert_eq!(uart.tx, expected);
    }

    #[test]
    fn test_bounded_per_call() {
        let rx: RxChannel<4> = RxChannel::new();
        let mut uart = MockUart::default();
        for b in b"abcd" {
            rx.push(*b);
        }

        assert_eq!(service_console(&rx, &mut uart).unwrap(), 4);
        // Bytes arriving after the call started wait for the next pass
        rx.push(b'e');
        assert_eq!(service_console(&rx, &mut uart).unwrap(), 1);
        assert_eq!(uart.tx, b"abcde");
    }

    #[test]
    fn test_write_failure_drops_current_chunk() {
        let rx: RxChannel<40> = RxChannel::new();
        let mut uart = MockUart::failing_write(1);
        for i in 0..40u8 {
            rx.push(i);
        }

        assert_eq!(service_console(&rx, &mut uart), Err(()));

        // First chunk echoed, second chunk taken and lost, rest still queued
        assert_eq!(uart.tx.len(), CHUNK);
        assert_eq!(rx.len(), 40 - 2 * CHUNK);
        assert_eq!(rx.pop(), Some((2 * CHUNK) as u8));
    }
}
