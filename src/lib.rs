//! Firmware for a DDS frequency generator on the ATmega128.
//!
//! Two keys tune a 16-bit phase increment that is latched into the CPLD in
//! front of the DDS, and the resulting output frequency is shown on the
//! display. Everything except the `hal` module is target independent and runs under
//! `cargo test` on the host.

#![no_std]

pub mod acceleration;
pub mod application;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod drivers;
pub mod frequency;
pub mod io;
pub mod os;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::Application;
pub use controller::{Mode, PhaseController, Screen, TickOutcome};
pub use diagnostics::{Diagnostics, Error, FaultKind};
pub use drivers::{Button, DisplaySink, KeySample};
pub use frequency::{format_frequency, DisplayFormatFailure};
pub use io::{BoardIo, DigitalIo};
pub use os::{Scheduler, Ticker};
