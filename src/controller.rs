//! Phase increment state machine.
//!
//! Pure logic: one [`PhaseController::tick`] per 10ms sample of the keys. The
//! returned [`TickOutcome`] tells the caller which hardware and display
//! updates the tick requires; the controller never touches I/O itself.

use crate::acceleration::HoldTimer;
use crate::config::ACCEL_STEP;
use crate::drivers::button_handler::{ButtonState, KeySample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Keys tune the phase increment.
    Normal,
    /// Both keys held. Tuning is suspended.
    KeyTest,
}

/// What the display has to show after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Frequency(u16),
    KeyTest,
}

/// Actions requested by one tick. Both `None` means nothing changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// New phase increment to latch into the DDS.
    pub retune: Option<u16>,
    pub screen: Option<Screen>,
}

impl TickOutcome {
    pub fn is_idle(&self) -> bool {
        self.retune.is_none() && self.screen.is_none()
    }
}

pub struct PhaseController {
    increase: ButtonState,
    decrease: ButtonState,
    hold: HoldTimer,
    phase_increment: u16,
    mode: Mode,
}

impl PhaseController {
    /// Controller at phase increment 0, key history seeded from the first
    /// sample taken after reset.
    pub fn new(initial: KeySample) -> Self {
        Self {
            increase: ButtonState::new(initial.increase),
            decrease: ButtonState::new(initial.decrease),
            hold: HoldTimer::new(),
            phase_increment: 0,
            mode: Mode::Normal,
        }
    }

    pub fn phase_increment(&self) -> u16 {
        self.phase_increment
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hold_ms(&self) -> u8 {
        self.hold.held_ms()
    }

    pub fn tick(&mut self, sample: KeySample) -> TickOutcome {
        self.increase.sample(sample.increase);
        self.decrease.sample(sample.decrease);

        let outcome = if sample.both() {
            self.key_test()
        } else {
            let leaving_key_test = self.mode == Mode::KeyTest;
            self.mode = Mode::Normal;

            let mut outcome = self.tune(sample);
            if leaving_key_test && outcome.screen.is_none() {
                outcome.screen = Some(Screen::Frequency(self.phase_increment));
            }
            outcome
        };

        self.increase.commit();
        self.decrease.commit();

        outcome
    }

    fn key_test(&mut self) -> TickOutcome {
        if self.mode == Mode::KeyTest {
            return TickOutcome::default();
        }

        self.mode = Mode::KeyTest;
        TickOutcome {
            retune: None,
            screen: Some(Screen::KeyTest),
        }
    }

    fn tune(&mut self, sample: KeySample) -> TickOutcome {
        let mut candidate = self.phase_increment;

        if self.increase.rising_edge() {
            candidate = candidate.wrapping_add(1);
        }
        if self.decrease.rising_edge() {
            candidate = candidate.wrapping_sub(1);
        }

        self.hold.update(sample.exactly_one());
        if self.hold.accelerating() {
            if sample.increase {
                candidate = candidate.wrapping_add(ACCEL_STEP);
            } else if sample.decrease {
                candidate = candidate.wrapping_sub(ACCEL_STEP);
            }
        }

        if candidate == self.phase_increment {
            return TickOutcome::default();
        }

        self.phase_increment = candidate;
        TickOutcome {
            retune: Some(candidate),
            screen: Some(Screen::Frequency(candidate)),
        }
    }
}
