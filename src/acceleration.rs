//! Hold-time tracking for key repeat acceleration

use crate::config::{ACCEL_THRESHOLD_MS, HOLD_MAX_MS, HOLD_STEP_MS};

/// Milliseconds a navigation key has been held, saturating at [`HOLD_MAX_MS`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoldTimer {
    held_ms: u8,
}

impl HoldTimer {
    pub const fn new() -> Self {
        Self { held_ms: 0 }
    }

    /// Advance by one tick. Releasing the key clears the count at once.
    pub fn update(&mut self, held: bool) {
        if !held {
            self.held_ms = 0;
        } else if self.held_ms < HOLD_MAX_MS {
            self.held_ms = self.held_ms.saturating_add(HOLD_STEP_MS).min(HOLD_MAX_MS);
        }
    }

    #[inline]
    pub fn accelerating(&self) -> bool {
        self.held_ms >= ACCEL_THRESHOLD_MS
    }

    #[inline]
    pub fn held_ms(&self) -> u8 {
        self.held_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_after_ten_ticks() {
        let mut timer = HoldTimer::new();
        for _ in 0..9 {
            timer.update(true);
        }
        assert_eq!(timer.held_ms(), 90);
        assert!(!timer.accelerating());

        timer.update(true);
        assert!(timer.accelerating());
    }

    #[test]
    fn saturates_at_max() {
        let mut timer = HoldTimer::new();
        for _ in 0..100 {
            timer.update(true);
        }
        assert_eq!(timer.held_ms(), HOLD_MAX_MS);
        assert!(timer.accelerating());
    }

    #[test]
    fn release_resets_immediately() {
        let mut timer = HoldTimer::new();
        for _ in 0..25 {
            timer.update(true);
        }
        timer.update(false);
        assert_eq!(timer.held_ms(), 0);
        assert!(!timer.accelerating());
    }
}
