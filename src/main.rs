#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;
    use avr_device::atmega128a::Peripherals;

    use dds_firmware::drivers::{ButtonHandler, ConsoleDisplay, DdsInterface, SerialConsole};
    use dds_firmware::hal::board::Board;
    use dds_firmware::hal::{Delay, Uart};
    use dds_firmware::{Application, BoardIo, Scheduler};

    #[avr_device::entry]
    fn main() -> ! {
        // No interrupt driven work on this board
        avr_device::interrupt::disable();

        let dp = Peripherals::take().unwrap();

        let board = Board::new(dp.PORTA, dp.PORTB, dp.PORTC, dp.PORTE);
        let io = BoardIo::new(
            ButtonHandler::new(board.key_increase, board.key_decrease),
            DdsInterface::new(board.phase_low, board.phase_high, board.latch, board.cpld_reset),
        );

        // Diagnostics log on USART0, display contents mirrored on USART1
        let mut console = SerialConsole::new(Uart::<avr_device::atmega128a::USART0>::new(dp.USART0));
        console.write_line("DDS generator v0.1.0").ok();
        let display = ConsoleDisplay::new(SerialConsole::new(
            Uart::<avr_device::atmega128a::USART1>::new(dp.USART1),
        ));

        let mut scheduler = Scheduler::new(Delay::new(dp.TC0));

        // Board I/O is infallible, start() cannot fail here
        let app = match Application::<_, _, _>::start(io, display, console) {
            Ok(app) => app,
            Err(_) => loop {},
        };

        app.run(&mut scheduler)
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
