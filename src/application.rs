//! Application layer: the control loop tying keys, DDS and display together

use embedded_hal::serial;

use crate::config::{DISPLAY_FALLBACK, DISPLAY_TEXT_CAPACITY, KEY_TEST_TEXT};
use crate::controller::{PhaseController, Screen, TickOutcome};
use crate::diagnostics::{Diagnostics, Error, FaultKind};
use crate::drivers::{DisplaySink, SerialConsole};
use crate::frequency::format_frequency_in;
use crate::io::DigitalIo;
use crate::os::Ticker;

/// Owns all state of the running device.
///
/// `N` is the capacity of the frequency text handed to the display.
pub struct Application<IO, DSP, TX, const N: usize = DISPLAY_TEXT_CAPACITY> {
    io: IO,
    display: DSP,
    console: SerialConsole<TX>,
    controller: PhaseController,
    diagnostics: Diagnostics,
}

impl<IO, DSP, TX, const N: usize> Application<IO, DSP, TX, N>
where
    IO: DigitalIo,
    DSP: DisplaySink,
    TX: serial::Write<u8>,
{
    /// Power-up sequence: reset the CPLD, latch phase increment 0, show it,
    /// then take the first key sample as the "previous" state.
    pub fn start(mut io: IO, display: DSP, console: SerialConsole<TX>) -> Result<Self, Error<IO::Error>> {
        io.reset_downstream_hardware().map_err(Error::HardwareReset)?;

        let mut app = Self {
            controller: PhaseController::new(Default::default()),
            io,
            display,
            console,
            diagnostics: Diagnostics::new(),
        };

        let phase_increment = app.controller.phase_increment();
        app.io
            .write_phase_increment(phase_increment)
            .map_err(Error::PhaseWrite)?;
        app.show(Screen::Frequency(phase_increment));

        let initial = app.io.read_keys().map_err(Error::ButtonRead)?;
        app.controller = PhaseController::new(initial);

        app.console.info("DDS generator ready");
        Ok(app)
    }

    /// One control loop iteration. Faults are recorded in [`Diagnostics`]
    /// and logged before being handed back.
    pub fn step(&mut self) -> Result<TickOutcome, Error<IO::Error>> {
        let result = self.tick();
        if let Err(err) = &result {
            self.diagnostics.report_error(err);
            self.log_fault(err.kind());
        }
        result
    }

    // A failed key read skips the tick with the controller untouched. A failed
    // write leaves the new value committed; it is not retried.
    fn tick(&mut self) -> Result<TickOutcome, Error<IO::Error>> {
        let sample = self.io.read_keys().map_err(Error::ButtonRead)?;
        let outcome = self.controller.tick(sample);

        if let Some(phase_increment) = outcome.retune {
            self.console.debug("Phase", phase_increment);
            self.io
                .write_phase_increment(phase_increment)
                .map_err(Error::PhaseWrite)?;
        }

        if let Some(screen) = outcome.screen {
            if screen == Screen::KeyTest {
                self.console.info("Key test");
            }
            self.show(screen);
        }

        Ok(outcome)
    }

    /// Run forever, one step per tick.
    pub fn run<T: Ticker>(mut self, ticker: &mut T) -> ! {
        loop {
            ticker.wait();
            self.step().ok();
        }
    }

    fn show(&mut self, screen: Screen) {
        match screen {
            Screen::KeyTest => self.display.show(KEY_TEST_TEXT),
            Screen::Frequency(phase_increment) => match format_frequency_in::<N>(phase_increment) {
                Ok(text) => self.display.show(&text),
                Err(_) => {
                    self.display.show(DISPLAY_FALLBACK);
                    self.diagnostics.report(FaultKind::DisplayFormat);
                    self.log_fault(FaultKind::DisplayFormat);
                }
            },
        }
    }

    fn log_fault(&mut self, kind: FaultKind) {
        self.console.error(kind.as_str());
    }

    pub fn phase_increment(&self) -> u16 {
        self.controller.phase_increment()
    }

    pub fn controller(&self) -> &PhaseController {
        &self.controller
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    pub fn display(&self) -> &DSP {
        &self.display
    }

    pub fn release(self) -> (IO, DSP, SerialConsole<TX>) {
        (self.io, self.display, self.console)
    }
}
