//! Digital I/O seen by the control loop.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::drivers::button_handler::{Button, ButtonHandler, KeySample};
use crate::drivers::dds::{DdsInterface, ParallelPort};

/// Key inputs and DDS outputs of the board.
///
/// The board never reports failures, but every operation carries an error
/// channel so faults can be injected in tests.
pub trait DigitalIo {
    type Error;

    /// `true` while the key is physically pressed.
    fn read_button(&mut self, button: Button) -> Result<bool, Self::Error>;

    /// Present the value to the CPLD and latch it, as one sequence.
    fn write_phase_increment(&mut self, value: u16) -> Result<(), Self::Error>;

    /// Pulse the CPLD reset line once.
    fn reset_downstream_hardware(&mut self) -> Result<(), Self::Error>;

    fn read_keys(&mut self) -> Result<KeySample, Self::Error> {
        Ok(KeySample {
            increase: self.read_button(Button::Increase)?,
            decrease: self.read_button(Button::Decrease)?,
        })
    }
}

/// [`DigitalIo`] built from embedded-hal pins and two 8-bit ports.
pub struct BoardIo<INC, DEC, LO, HI, LATCH, RST> {
    keys: ButtonHandler<INC, DEC>,
    dds: DdsInterface<LO, HI, LATCH, RST>,
}

impl<INC, DEC, LO, HI, LATCH, RST, E> BoardIo<INC, DEC, LO, HI, LATCH, RST>
where
    INC: InputPin<Error = E>,
    DEC: InputPin<Error = E>,
    LO: ParallelPort<Error = E>,
    HI: ParallelPort<Error = E>,
    LATCH: OutputPin<Error = E>,
    RST: OutputPin<Error = E>,
{
    pub fn new(keys: ButtonHandler<INC, DEC>, dds: DdsInterface<LO, HI, LATCH, RST>) -> Self {
        Self { keys, dds }
    }

    pub fn release(self) -> (ButtonHandler<INC, DEC>, DdsInterface<LO, HI, LATCH, RST>) {
        (self.keys, self.dds)
    }
}

impl<INC, DEC, LO, HI, LATCH, RST, E> DigitalIo for BoardIo<INC, DEC, LO, HI, LATCH, RST>
where
    INC: InputPin<Error = E>,
    DEC: InputPin<Error = E>,
    LO: ParallelPort<Error = E>,
    HI: ParallelPort<Error = E>,
    LATCH: OutputPin<Error = E>,
    RST: OutputPin<Error = E>,
{
    type Error = E;

    fn read_button(&mut self, button: Button) -> Result<bool, E> {
        self.keys.is_pressed(button)
    }

    fn write_phase_increment(&mut self, value: u16) -> Result<(), E> {
        self.dds.load(value)
    }

    fn reset_downstream_hardware(&mut self) -> Result<(), E> {
        self.dds.reset()
    }
}
