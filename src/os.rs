//! Loop pacing and system tick count

use embedded_hal::blocking::delay::DelayMs;

use crate::config::TICK_MS;

/// Blocks until the next control loop tick is due.
pub trait Ticker {
    fn wait(&mut self);
}

/// Fixed-period ticker on top of a blocking delay.
///
/// The delay runs between iterations, so the effective period is the tick
/// plus the time spent in the loop body. The body is a few microseconds, well
/// inside what the keys care about.
pub struct Scheduler<D> {
    delay: D,
    period_ms: u16,
    tick_count: u32,
}

impl<D: DelayMs<u16>> Scheduler<D> {
    pub fn new(delay: D) -> Self {
        Self::with_period(delay, TICK_MS)
    }

    pub fn with_period(delay: D, period_ms: u16) -> Self {
        Self {
            delay,
            period_ms,
            tick_count: 0,
        }
    }

    /// Get current system tick count
    #[inline]
    pub fn get_ticks(&self) -> u32 {
        self.tick_count
    }
}

impl<D: DelayMs<u16>> Ticker for Scheduler<D> {
    fn wait(&mut self) {
        self.delay.delay_ms(self.period_ms);
        self.tick_count = self.tick_count.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::vec::Vec;

    #[derive(Default)]
    struct RecordingDelay(Vec<u16>);

    impl DelayMs<u16> for RecordingDelay {
        fn delay_ms(&mut self, ms: u16) {
            self.0.push(ms);
        }
    }

    #[test]
    fn waits_one_period_per_tick() {
        let mut scheduler = Scheduler::new(RecordingDelay::default());
        for _ in 0..3 {
            scheduler.wait();
        }

        assert_eq!(scheduler.get_ticks(), 3);
        assert_eq!(scheduler.delay.0, [TICK_MS; 3]);
    }

    #[test]
    fn tick_count_wraps() {
        let mut scheduler = Scheduler::with_period(RecordingDelay::default(), 1);
        scheduler.tick_count = u32::MAX;
        scheduler.wait();
        assert_eq!(scheduler.get_ticks(), 0);
    }
}
