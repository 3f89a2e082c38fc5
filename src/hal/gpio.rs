use avr_device::atmega128a::{PORTA, PORTB, PORTC, PORTE};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::drivers::dds::ParallelPort;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// A single line of an I/O port, typed by its direction.
#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE: PinMode> Pin<PORT, P, MODE> {
    const MASK: u8 = 1 << P;

    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

/// All eight lines of a port used as one output byte.
#[derive(Debug)]
pub struct Port<PORT> {
    _port: PhantomData<PORT>,
}

macro_rules! impl_port {
    ($PORT:ident, $pin:ident, $ddr:ident, $port:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Drive low before the line becomes an output
                unsafe {
                    let p = &*$PORT::ptr();
                    p.$port().modify(|r, w| w.bits(r.bits() & !Self::MASK));
                    p.$ddr().modify(|r, w| w.bits(r.bits() | Self::MASK));
                }
                Pin::new()
            }

            pub fn into_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDRx bit, keys have external pull-ups
                unsafe {
                    let p = &*$PORT::ptr();
                    p.$ddr().modify(|r, w| w.bits(r.bits() & !Self::MASK));
                    p.$port().modify(|r, w| w.bits(r.bits() & !Self::MASK));
                }
                Pin::new()
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            #[inline]
            fn set_low(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port().modify(|r, w| w.bits(r.bits() & !Self::MASK));
                }
                Ok(())
            }

            #[inline]
            fn set_high(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port().modify(|r, w| w.bits(r.bits() | Self::MASK));
                }
                Ok(())
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, Input> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Infallible> {
                Ok(unsafe { (*$PORT::ptr()).$pin().read().bits() } & Self::MASK != 0)
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Infallible> {
                self.is_high().map(|high| !high)
            }
        }

        impl Port<$PORT> {
            pub fn into_output() -> Self {
                unsafe {
                    let p = &*$PORT::ptr();
                    p.$port().write(|w| w.bits(0));
                    p.$ddr().write(|w| w.bits(0xFF));
                }
                Port { _port: PhantomData }
            }
        }

        impl ParallelPort for Port<$PORT> {
            type Error = Infallible;

            #[inline]
            fn write(&mut self, byte: u8) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port().write(|w| w.bits(byte));
                }
                Ok(())
            }
        }
    };
}

impl_port!(PORTA, pina, ddra, porta);
impl_port!(PORTB, pinb, ddrb, portb);
impl_port!(PORTC, pinc, ddrc, portc);
impl_port!(PORTE, pine, ddre, porte);

// DDS generator board pin definitions
pub mod board {
    use super::*;

    /// Low byte of the phase increment
    pub type PhaseLow = Port<PORTA>;
    /// High byte of the phase increment
    pub type PhaseHigh = Port<PORTC>;

    pub type LatchClock = Pin<PORTE, 0, Output>;
    pub type KeyIncrease = Pin<PORTE, 1, Input>;
    pub type KeyDecrease = Pin<PORTE, 2, Input>;
    pub type CpldReset = Pin<PORTB, 4, Output>;

    pub struct Board {
        pub phase_low: PhaseLow,
        pub phase_high: PhaseHigh,
        pub latch: LatchClock,
        pub key_increase: KeyIncrease,
        pub key_decrease: KeyDecrease,
        pub cpld_reset: CpldReset,
    }

    impl Board {
        /// Configures every line the firmware uses. Taking the port
        /// peripherals by value makes this the only owner of them.
        pub fn new(_porta: PORTA, _portb: PORTB, _portc: PORTC, _porte: PORTE) -> Self {
            Self {
                phase_low: PhaseLow::into_output(),
                phase_high: PhaseHigh::into_output(),
                latch: Pin::<PORTE, 0, Input>::new().into_output(),
                key_increase: Pin::<PORTE, 1, Input>::new().into_input(),
                key_decrease: Pin::<PORTE, 2, Input>::new().into_input(),
                cpld_reset: Pin::<PORTB, 4, Input>::new().into_output(),
            }
        }
    }
}
