//! Parallel interface to the CPLD that feeds the DDS phase accumulator.
//!
//! The phase increment is presented on two 8-bit ports and taken over by the
//! CPLD on the rising edge of the latch clock. Both bytes have to be stable
//! before the edge, so the whole handshake is a single call ([`DdsInterface::load`]);
//! callers never touch the ports or the latch line on their own.

use embedded_hal::digital::v2::OutputPin;

/// An 8-bit wide output port.
pub trait ParallelPort {
    type Error;

    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;
}

pub struct DdsInterface<LO, HI, LATCH, RST> {
    low: LO,
    high: HI,
    latch: LATCH,
    reset: RST,
}

impl<LO, HI, LATCH, RST, E> DdsInterface<LO, HI, LATCH, RST>
where
    LO: ParallelPort<Error = E>,
    HI: ParallelPort<Error = E>,
    LATCH: OutputPin<Error = E>,
    RST: OutputPin<Error = E>,
{
    /// Takes ownership of the lines. Nothing is driven until [`reset`](Self::reset)
    /// or [`load`](Self::load) is called.
    pub fn new(low: LO, high: HI, latch: LATCH, reset: RST) -> Self {
        Self {
            low,
            high,
            latch,
            reset,
        }
    }

    /// Pulse the CPLD reset line low then high.
    pub fn reset(&mut self) -> Result<(), E> {
        self.reset.set_low()?;
        self.reset.set_high()
    }

    /// Low byte, high byte, then a low-high-low pulse on the latch clock.
    pub fn load(&mut self, phase_increment: u16) -> Result<(), E> {
        let [low, high] = phase_increment.to_le_bytes();
        self.low.write(low)?;
        self.high.write(high)?;

        self.latch.set_low()?;
        self.latch.set_high()?;
        self.latch.set_low()
    }

    pub fn release(self) -> (LO, HI, LATCH, RST) {
        (self.low, self.high, self.latch, self.reset)
    }
}
