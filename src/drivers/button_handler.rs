use embedded_hal::digital::v2::InputPin;

/// The two front panel keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Increase,
    Decrease,
}

/// Last and current logical level of one key.
///
/// One call to [`ButtonState::sample`] per tick; there is no debounce timer,
/// the 10ms tick period is slow enough to ride over contact bounce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    previous: bool,
    current: bool,
}

impl ButtonState {
    /// State seeded from the first hardware sample, so a key already held at
    /// power-up does not count as a press.
    pub const fn new(pressed: bool) -> Self {
        Self {
            previous: pressed,
            current: pressed,
        }
    }

    /// Record this tick's sample.
    #[inline]
    pub fn sample(&mut self, pressed: bool) {
        self.current = pressed;
    }

    /// Not pressed last tick, pressed now. Must be read before [`commit`](Self::commit).
    #[inline]
    pub fn rising_edge(&self) -> bool {
        !self.previous && self.current
    }

    /// Current sample becomes the previous one.
    #[inline]
    pub fn commit(&mut self) {
        self.previous = self.current;
    }
}

/// Pressed state of both keys for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySample {
    pub increase: bool,
    pub decrease: bool,
}

impl KeySample {
    pub const fn new(increase: bool, decrease: bool) -> Self {
        Self { increase, decrease }
    }

    pub const fn released() -> Self {
        Self::new(false, false)
    }

    #[inline]
    pub fn both(&self) -> bool {
        self.increase && self.decrease
    }

    #[inline]
    pub fn exactly_one(&self) -> bool {
        self.increase != self.decrease
    }
}

/// Reads the two key inputs. Keys pull the line to ground, so a low level
/// means pressed.
pub struct ButtonHandler<INC, DEC> {
    increase: INC,
    decrease: DEC,
}

impl<INC, DEC, E> ButtonHandler<INC, DEC>
where
    INC: InputPin<Error = E>,
    DEC: InputPin<Error = E>,
{
    pub fn new(increase: INC, decrease: DEC) -> Self {
        Self { increase, decrease }
    }

    pub fn is_pressed(&self, button: Button) -> Result<bool, E> {
        match button {
            Button::Increase => self.increase.is_low(), // Keys are active low
            Button::Decrease => self.decrease.is_low(),
        }
    }

    pub fn release(self) -> (INC, DEC) {
        (self.increase, self.decrease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_fires_once_per_press() {
        let mut key = ButtonState::new(false);
        let mut edges = 0;

        for pressed in [true, true, true, true, true] {
            key.sample(pressed);
            if key.rising_edge() {
                edges += 1;
            }
            key.commit();
        }

        assert_eq!(edges, 1);
    }

    #[test]
    fn release_is_not_an_edge() {
        let mut key = ButtonState::new(true);
        key.sample(false);
        assert!(!key.rising_edge());
        key.commit();

        key.sample(true);
        assert!(key.rising_edge());
    }

    #[test]
    fn edge_must_be_read_before_commit() {
        let mut key = ButtonState::default();
        key.sample(true);
        key.commit();
        assert!(!key.rising_edge());
    }

    #[test]
    fn key_held_at_power_up_is_not_a_press() {
        let mut key = ButtonState::new(true);
        key.sample(true);
        assert!(!key.rising_edge());
    }

    #[test]
    fn sample_classification() {
        assert!(KeySample::new(true, true).both());
        assert!(!KeySample::new(true, true).exactly_one());
        assert!(KeySample::new(false, true).exactly_one());
        assert!(!KeySample::released().exactly_one());
    }
}
