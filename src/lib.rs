//! # fastgpio
//!
//! Zero-cost GPIO pin control for AVR megaAVR microcontrollers.
//!
//! Pins are addressed by a pin number known at compile time. The number
//! selects a [`PinDescriptor`](board::PinDescriptor) from the descriptor table
//! of the board chosen through Cargo features, so every operation on a
//! [`Pin`](gpio::Pin) compiles down to one or two single-bit register accesses.
//!
//! ```no_run
//! use fastgpio::prelude::*;
//!
//! // Arduino pin 13, the on-board LED of an Uno
//! Pin::<IO_B5>::set_output_high();
//! Pin::<IO_B5>::set_output_value_toggle();
//! ```
//!
//! ## Board selection
//!
//! | Feature      | Board                                | Pins |
//! |--------------|--------------------------------------|------|
//! | `atmega328p` | ATmega328P (Arduino Uno), default    | 22   |
//! | `atmega168`  | ATmega168, same pinout as ATmega328P | 22   |
//! | `atmega32u4` | ATmega32U4 (Arduino Leonardo)        | 33   |
//!
//! Both counts include the `IO_NONE` placeholder pin.
#![cfg_attr(not(any(test, feature = "sim")), no_std)]

#[cfg(target_arch = "avr")]
pub use avr_device;
#[cfg(target_arch = "avr")]
pub use avr_device as pac;

pub mod board;
pub mod gpio;
pub mod prelude;
#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use board::active::io::*;

mod private {
    /// Super trait used to mark traits with an exhaustive set of
    /// implementations
    pub trait Sealed {}
}

pub(crate) use private::Sealed;
