//! Configuration constants for the DDS generator firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate of the diagnostics console
pub const UART_BAUD: u32 = 9600;

/// Period of the control loop in milliseconds
pub const TICK_MS: u16 = 10;

/// Hold time added per tick while a key is held, in milliseconds
pub const HOLD_STEP_MS: u8 = 10;

/// Upper bound of the hold counter, in milliseconds
pub const HOLD_MAX_MS: u8 = 200;

/// Hold time after which every tick applies a bulk step, in milliseconds
pub const ACCEL_THRESHOLD_MS: u8 = 100;

/// Phase increment change applied per tick once acceleration kicks in
pub const ACCEL_STEP: u16 = 23;

/// Output frequency per phase increment unit, in micro-hertz (41.343689 Hz)
pub const BASE_FREQUENCY_UHZ: u64 = 41_343_689;

/// Capacity of the frequency text buffer
pub const DISPLAY_TEXT_CAPACITY: usize = 24;

/// Shown instead of a frequency when it cannot be formatted
pub const DISPLAY_FALLBACK: &str = "Error";

/// Shown while both keys are held
pub const KEY_TEST_TEXT: &str = "Key test";
