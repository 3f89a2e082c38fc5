pub mod button_handler;
pub mod dds;
pub mod display;
pub mod serial_console;

pub use button_handler::{Button, ButtonHandler, ButtonState, KeySample};
pub use dds::{DdsInterface, ParallelPort};
pub use display::{ConsoleDisplay, DisplaySink};
pub use serial_console::SerialConsole;
