//! ATmega128 register level drivers implementing the embedded-hal traits
//! the rest of the firmware is written against.

pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin, Port};
pub use timer::{Delay, Prescaler};
pub use uart::Uart;
