use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::CPU_FREQ_HZ;

/// Timer0 clock select values (ATmega128 Timer0 has the extra /32 and /128 taps)
#[derive(Clone, Copy)]
#[repr(u8)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div32 = 3,
    Div64 = 4,
    Div128 = 5,
    Div256 = 6,
    Div1024 = 7,
}

const PRESCALER_MASK: u8 = 0x07;

// 16MHz/64 = 250kHz, 250 counts = 1ms
const COUNTS_PER_MS: u8 = (CPU_FREQ_HZ / 64 / 1000) as u8;

/// Busy-wait millisecond delay on Timer0 in normal mode.
pub struct Delay {
    _timer: TC0,
}

impl Delay {
    pub fn new(timer: TC0) -> Self {
        // Normal mode, stopped
        timer.tccr0().write(|w| unsafe { w.bits(0) });
        timer.tcnt0().write(|w| unsafe { w.bits(0) });
        Self { _timer: timer }
    }

    fn regs(&self) -> &avr_device::atmega128a::tc0::RegisterBlock {
        unsafe { &*TC0::ptr() }
    }

    fn start(&mut self, prescaler: Prescaler) {
        self.regs().tccr0().modify(|r, w| unsafe {
            w.bits((r.bits() & !PRESCALER_MASK) | (prescaler as u8 & PRESCALER_MASK))
        });
    }

    fn stop(&mut self) {
        self.regs()
            .tccr0()
            .modify(|r, w| unsafe { w.bits(r.bits() & !PRESCALER_MASK) });
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.regs().tcnt0().write(|w| unsafe { w.bits(0) });
        self.start(Prescaler::Div64);

        for _ in 0..ms {
            while self.regs().tcnt0().read().bits() < COUNTS_PER_MS {}
            self.regs().tcnt0().write(|w| unsafe { w.bits(0) });
        }

        self.stop();
    }
}
