use embedded_hal::serial;

use super::serial_console::SerialConsole;

/// Anything that can put a short line of text in front of the user.
///
/// The frequency display is assumed to always accept the text; drivers that
/// can fail have to deal with it internally.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show(&mut self, text: &str) {
        (**self).show(text)
    }
}

/// Mirrors the display contents to the serial console, one line per update.
///
/// Used on boards where the dot matrix display is not fitted.
pub struct ConsoleDisplay<TX> {
    console: SerialConsole<TX>,
}

impl<TX> ConsoleDisplay<TX>
where
    TX: serial::Write<u8>,
{
    pub fn new(console: SerialConsole<TX>) -> Self {
        Self { console }
    }

    pub fn release(self) -> SerialConsole<TX> {
        self.console
    }
}

impl<TX> DisplaySink for ConsoleDisplay<TX>
where
    TX: serial::Write<u8>,
{
    fn show(&mut self, text: &str) {
        self.console
            .write_str("[DSP] ")
            .and_then(|_| self.console.write_line(text))
            .ok();
    }
}
