use embedded_hal::serial;

/// Diagnostics console on top of any blocking-capable serial transmitter.
///
/// Implements [`ufmt::uWrite`], so log lines are written with `uwrite!` /
/// `uwriteln!` without pulling `core::fmt` into the image.
pub struct SerialConsole<TX> {
    tx: TX,
}

impl<TX> SerialConsole<TX>
where
    TX: serial::Write<u8>,
{
    pub fn new(tx: TX) -> Self {
        Self { tx }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), TX::Error> {
        nb::block!(self.tx.write(byte))
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), TX::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), TX::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    // Debug helper - print hex value
    pub fn write_hex(&mut self, val: u16) -> Result<(), TX::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        for shift in [12, 8, 4, 0] {
            self.write_byte(HEX_CHARS[((val >> shift) & 0xF) as usize])?;
        }
        Ok(())
    }

    pub fn info(&mut self, msg: &str) {
        self.write_str("[INF] ").and_then(|_| self.write_line(msg)).ok();
    }

    pub fn error(&mut self, msg: &str) {
        self.write_str("[ERR] ").and_then(|_| self.write_line(msg)).ok();
    }

    // Print formatted debug info, compiled out unless the `debug` feature is on
    pub fn debug(&mut self, msg: &str, val: u16) {
        if cfg!(feature = "debug") {
            self.write_str("[DBG] ")
                .and_then(|_| self.write_str(msg))
                .and_then(|_| self.write_str(": 0x"))
                .and_then(|_| self.write_hex(val))
                .and_then(|_| self.write_str("\r\n"))
                .ok();
        }
    }

    pub fn release(self) -> TX {
        self.tx
    }
}

impl<TX> ufmt::uWrite for SerialConsole<TX>
where
    TX: serial::Write<u8>,
{
    type Error = TX::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        SerialConsole::write_str(self, s)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    extern crate std;
    use core::convert::Infallible;
    use std::string::String;
    use std::vec::Vec;

    /// Transmitter that reports "busy" every other byte, to exercise `nb::block!`.
    #[derive(Default)]
    pub(crate) struct CaptureTx {
        pub(crate) sent: Vec<u8>,
        busy: bool,
    }

    impl CaptureTx {
        pub(crate) fn text(&self) -> String {
            String::from_utf8(self.sent.clone()).unwrap()
        }
    }

    impl serial::Write<u8> for CaptureTx {
        type Error = Infallible;

        fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
            self.busy = !self.busy;
            if self.busy {
                return Err(nb::Error::WouldBlock);
            }
            self.sent.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Infallible> {
            Ok(())
        }
    }

    #[test]
    fn write_line_terminates_with_crlf() {
        let mut console = SerialConsole::new(CaptureTx::default());
        console.write_line("Ready").unwrap();
        assert_eq!(console.release().text(), "Ready\r\n");
    }

    #[test]
    fn levels_are_prefixed() {
        let mut console = SerialConsole::new(CaptureTx::default());
        console.info("boot");
        console.error("latch");
        assert_eq!(console.release().text(), "[INF] boot\r\n[ERR] latch\r\n");
    }

    #[test]
    fn hex_is_four_digits() {
        let mut console = SerialConsole::new(CaptureTx::default());
        console.write_hex(0x0A5F).unwrap();
        assert_eq!(console.release().text(), "0A5F");
    }

    #[test]
    fn ufmt_writes_through_console() {
        let mut console = SerialConsole::new(CaptureTx::default());
        ufmt::uwrite!(console, "ticks={}", 42u32).unwrap();
        assert_eq!(console.release().text(), "ticks=42");
    }

    #[test]
    fn debug_follows_feature() {
        let mut console = SerialConsole::new(CaptureTx::default());
        console.debug("Phase", 0x0018);
        let text = console.release().text();
        if cfg!(feature = "debug") {
            assert_eq!(text, "[DBG] Phase: 0x0018\r\n");
        } else {
            assert!(text.is_empty());
        }
    }
}
