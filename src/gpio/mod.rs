//! # GPIO module
//!
//! Pins are zero-sized types parameterized by their pin number, a `u8` const
//! generic. The number is resolved against the descriptor table of the active
//! [`Board`](crate::board::Board) at compile time, so the register addresses
//! and the bit position are constants and no table lookup happens at run
//! time. Using a pin number that is not in the table fails to compile.
//!
//! ```no_run
//! use fastgpio::gpio::Pin;
//! use fastgpio::IO_D5;
//!
//! Pin::<IO_D5>::set_input_pulled_up();
//! let pressed = !Pin::<IO_D5>::is_input_high();
//! ```
//!
//! The same type can be instantiated with [`Pin::new`](GenericPin::new) and
//! handed to drivers through the embedded HAL digital traits.
//!
//! Pins carry no ownership or mode tracking: any code can reconfigure any pin
//! at any time, and sharing a port between the main loop and an interrupt
//! handler needs a critical section provided by the caller.
//!
//! [`PinLoan`] saves the configuration of a pin and restores it when it goes
//! out of scope, which makes it easy to share a single pin between several
//! functions, e.g. an LED and a button.
pub mod loan;
pub use loan::*;

pub mod pins;
pub use pins::*;

pub mod reg;
pub use reg::{IoSpace, Mmio};
