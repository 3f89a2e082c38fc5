use avr_device::atmega128a::{USART0, USART1};
use core::convert::Infallible;
use embedded_hal::serial;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// Baud rate calculation (16MHz clock, 9600 baud -> 103)
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

const UDRE: u8 = 1 << 5;
const TXEN: u8 = 1 << 3;
// 8 data bits, no parity, 1 stop bit
const UCSZ_8BIT: u8 = (1 << 2) | (1 << 1);

/// Polled transmitter. Interrupts stay disabled on this firmware, so there
/// is no ring buffer; `write` reports `WouldBlock` while the data register is
/// still full.
pub struct Uart<USART> {
    usart: USART,
}

macro_rules! impl_uart {
    ($USART:ident, $udr:ident, $ucsra:ident, $ucsrb:ident, $ucsrc:ident, $ubrrh:ident, $ubrrl:ident) => {
        impl Uart<$USART> {
            pub fn new(usart: $USART) -> Self {
                let [low, high] = UBRR.to_le_bytes();
                unsafe {
                    usart.$ubrrh().write(|w| w.bits(high));
                    usart.$ubrrl().write(|w| w.bits(low));
                    usart.$ucsrc().write(|w| w.bits(UCSZ_8BIT));
                    usart.$ucsrb().write(|w| w.bits(TXEN));
                }
                Self { usart }
            }

            fn data_register_empty(&self) -> bool {
                self.usart.$ucsra().read().bits() & UDRE != 0
            }
        }

        impl serial::Write<u8> for Uart<$USART> {
            type Error = Infallible;

            fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
                if !self.data_register_empty() {
                    return Err(nb::Error::WouldBlock);
                }
                unsafe {
                    self.usart.$udr().write(|w| w.bits(word));
                }
                Ok(())
            }

            fn flush(&mut self) -> nb::Result<(), Infallible> {
                if self.data_register_empty() {
                    Ok(())
                } else {
                    Err(nb::Error::WouldBlock)
                }
            }
        }
    };
}

impl_uart!(USART0, udr0, ucsr0a, ucsr0b, ucsr0c, ubrr0h, ubrr0l);
impl_uart!(USART1, udr1, ucsr1a, ucsr1b, ucsr1c, ubrr1h, ubrr1l);
