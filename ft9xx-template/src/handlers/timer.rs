//! Millisecond timer interrupt

use ft9xx_core::MillisCounter;
use ft9xx_hal::timer::TickTimer;

/// Advance the millisecond counter if the tick timer fired
pub fn timer_isr<T: TickTimer>(timer: &mut T, counter: &MillisCounter) {
    if timer.is_interrupted() {
        counter.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTimer;

    #[test]
    fn test_counts_only_own_interrupts() {
        let counter = MillisCounter::new();
        let mut timer = MockTimer::default();

        timer.expire();
        timer_isr(&mut timer, &counter);
        // Shared vector fired for another timer
        timer_isr(&mut timer, &counter);
        timer.expire();
        timer_isr(&mut timer, &counter);

        assert_eq!(counter.now(), 2);
    }
}
