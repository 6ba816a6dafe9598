//! # Compile-time indexed pins
//!
//! A [`GenericPin`] is parameterized by a [`Board`], an [`IoSpace`] and the
//! pin number. It is a zero-sized type whose operations are associated
//! functions, so the pin does not have to be passed around to be used:
//!
//! ```no_run
//! use fastgpio::gpio::Pin;
//! use fastgpio::IO_B5;
//!
//! Pin::<IO_B5>::set_output(true);
//! ```
//!
//! Most code uses the [`Pin`] alias, which selects the [`Active`] board and
//! the [`Mmio`] register access. The descriptor of the pin is the associated
//! constant [`GenericPin::DESCRIPTOR`], so a pin number past the end of the
//! table is rejected by the compiler:
//!
//! ```compile_fail
//! use fastgpio::gpio::Pin;
//!
//! Pin::<200>::set_output_high();
//! ```
//!
//! # Operations
//!
//! Operations that switch a pin to output mode write the `PORTx` bit before
//! setting the `DDRx` bit, so the pin never drives the wrong level during the
//! transition. [`set_state`](GenericPin::set_state) orders its two writes so
//! that the pin only passes through input states.
//!
//! # Embedded HAL traits
//!
//! [`GenericPin`] implements [`OutputPin`], [`StatefulOutputPin`],
//! [`ToggleableOutputPin`] and [`InputPin`] with
//! `Error = core::convert::Infallible`. Since there is no mode tracking,
//! [`OutputPin::set_high`] and [`OutputPin::set_low`] also switch the pin to
//! output mode.

use super::loan::PinLoan;
use super::reg::{IoSpace, Mmio};
use crate::board::{Active, Board, PinDescriptor};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};

//==================================================================================================
//  PinState
//==================================================================================================

/// Configuration of a pin
///
/// Bit 0 is the `PORTx` bit (output value or pull-up enable), bit 1 is the
/// `DDRx` bit (set for output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinState {
    InputFloating = 0b00,
    InputPullUp = 0b01,
    OutputLow = 0b10,
    OutputHigh = 0b11,
}

impl PinState {
    pub const ALL: [PinState; 4] = [
        PinState::InputFloating,
        PinState::InputPullUp,
        PinState::OutputLow,
        PinState::OutputHigh,
    ];

    /// Build a state from its raw value. All bits other than bits 0 and 1
    /// are ignored.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => PinState::InputFloating,
            0b01 => PinState::InputPullUp,
            0b10 => PinState::OutputLow,
            _ => PinState::OutputHigh,
        }
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Whether the `DDRx` bit is set
    #[inline(always)]
    pub const fn is_output(self) -> bool {
        self.bits() & 0b10 != 0
    }

    /// Whether the `PORTx` bit is set
    #[inline(always)]
    pub const fn output_value(self) -> bool {
        self.bits() & 0b01 != 0
    }
}

impl From<u8> for PinState {
    #[inline(always)]
    fn from(bits: u8) -> Self {
        PinState::from_bits(bits)
    }
}

impl From<PinState> for u8 {
    #[inline(always)]
    fn from(state: PinState) -> Self {
        state.bits()
    }
}

//==================================================================================================
//  Pin
//==================================================================================================

/// A GPIO pin, parameterized by [`Board`], [`IoSpace`] and pin number
pub struct GenericPin<B: Board, IO: IoSpace, const PIN: u8> {
    regs: PhantomData<(B, IO)>,
}

/// Pin of the [`Active`] board, accessed through [`Mmio`]
pub type Pin<const PIN: u8> = GenericPin<Active, Mmio, PIN>;

impl<B: Board, IO: IoSpace, const PIN: u8> GenericPin<B, IO, PIN> {
    /// Descriptor of this pin, resolved at compile time
    pub const DESCRIPTOR: PinDescriptor = B::PINS[PIN as usize];

    /// Create a value of the pin type, e.g. to pass it to a driver expecting
    /// one of the embedded HAL traits
    #[inline(always)]
    pub const fn new() -> Self {
        GenericPin { regs: PhantomData }
    }

    #[inline(always)]
    pub const fn index() -> u8 {
        PIN
    }

    #[inline(always)]
    pub const fn descriptor() -> PinDescriptor {
        Self::DESCRIPTOR
    }

    /// Configure the pin as an output driving low
    #[inline(always)]
    pub fn set_output_low() {
        let desc = Self::DESCRIPTOR;
        IO::clear_bit(desc.output, desc.bit);
        IO::set_bit(desc.direction, desc.bit);
    }

    /// Configure the pin as an output driving high
    #[inline(always)]
    pub fn set_output_high() {
        let desc = Self::DESCRIPTOR;
        IO::set_bit(desc.output, desc.bit);
        IO::set_bit(desc.direction, desc.bit);
    }

    /// Configure the pin as an output driving `value`
    #[inline(always)]
    pub fn set_output(value: bool) {
        Self::set_output_value(value);
        IO::set_bit(Self::DESCRIPTOR.direction, Self::DESCRIPTOR.bit);
    }

    /// Toggle the output value and configure the pin as an output
    #[inline(always)]
    pub fn set_output_toggle() {
        Self::set_output_value_toggle();
        IO::set_bit(Self::DESCRIPTOR.direction, Self::DESCRIPTOR.bit);
    }

    /// Clear the output value without changing the direction
    ///
    /// On an input pin this disables the pull-up.
    #[inline(always)]
    pub fn set_output_value_low() {
        IO::clear_bit(Self::DESCRIPTOR.output, Self::DESCRIPTOR.bit);
    }

    /// Set the output value without changing the direction
    ///
    /// On an input pin this enables the pull-up.
    #[inline(always)]
    pub fn set_output_value_high() {
        IO::set_bit(Self::DESCRIPTOR.output, Self::DESCRIPTOR.bit);
    }

    /// Write the output value without changing the direction
    ///
    /// On an input pin this enables or disables the pull-up.
    #[inline(always)]
    pub fn set_output_value(value: bool) {
        if value {
            Self::set_output_value_high();
        } else {
            Self::set_output_value_low();
        }
    }

    /// Invert the output value without changing the direction
    ///
    /// On an input pin this toggles the pull-up.
    #[inline(always)]
    pub fn set_output_value_toggle() {
        // Writing a one to PINx toggles the PORTx bit
        IO::write(Self::DESCRIPTOR.input, Self::DESCRIPTOR.mask());
    }

    /// Configure the pin as an input with the pull-up disabled
    #[inline(always)]
    pub fn set_input() {
        let desc = Self::DESCRIPTOR;
        IO::clear_bit(desc.direction, desc.bit);
        IO::clear_bit(desc.output, desc.bit);
    }

    /// Configure the pin as an input with the pull-up enabled
    #[inline(always)]
    pub fn set_input_pulled_up() {
        let desc = Self::DESCRIPTOR;
        IO::clear_bit(desc.direction, desc.bit);
        IO::set_bit(desc.output, desc.bit);
    }

    /// Level on the pin, for inputs and outputs alike
    #[inline(always)]
    pub fn is_input_high() -> bool {
        IO::read_bit(Self::DESCRIPTOR.input, Self::DESCRIPTOR.bit)
    }

    #[inline(always)]
    pub fn is_output() -> bool {
        IO::read_bit(Self::DESCRIPTOR.direction, Self::DESCRIPTOR.bit)
    }

    /// Value of the `PORTx` bit
    ///
    /// For an input pin this tells whether the pull-up is enabled.
    #[inline(always)]
    pub fn is_output_value_high() -> bool {
        IO::read_bit(Self::DESCRIPTOR.output, Self::DESCRIPTOR.bit)
    }

    /// Same as [`is_output_value_high`](Self::is_output_value_high)
    #[inline(always)]
    pub fn output_value() -> bool {
        Self::is_output_value_high()
    }

    /// Sample the direction and output value of the pin
    ///
    /// The input level does not contribute to the state.
    #[inline]
    pub fn state() -> PinState {
        let mut bits = 0;
        if Self::is_output_value_high() {
            bits |= 0b01;
        }
        if Self::is_output() {
            bits |= 0b10;
        }
        PinState::from_bits(bits)
    }

    /// Restore a state returned by [`state`](Self::state)
    ///
    /// When both bits change, the `DDRx` bit is cleared before the `PORTx`
    /// bit is written and set after it. Every intermediate state is an input:
    ///
    /// | Current         | Intermediate    | Final           |
    /// |-----------------|-----------------|-----------------|
    /// | Output low      | Input floating  | Input pulled up |
    /// | Output high     | Input pulled up | Input floating  |
    /// | Input floating  | Input pulled up | Output high     |
    /// | Input pulled up | Input floating  | Output low      |
    #[inline]
    pub fn set_state(state: PinState) {
        let desc = Self::DESCRIPTOR;
        if !state.is_output() {
            IO::clear_bit(desc.direction, desc.bit);
        }
        if state.output_value() {
            IO::set_bit(desc.output, desc.bit);
        } else {
            IO::clear_bit(desc.output, desc.bit);
        }
        if state.is_output() {
            IO::set_bit(desc.direction, desc.bit);
        }
    }

    /// Save the state of the pin until the returned loan is dropped
    #[inline]
    pub fn loan() -> PinLoan<B, IO, PIN> {
        PinLoan::new()
    }

    /// Run `f` and restore the state of the pin afterwards
    #[inline]
    pub fn with_loan<R>(f: impl FnOnce() -> R) -> R {
        let _loan = Self::loan();
        f()
    }
}

impl<B: Board, IO: IoSpace, const PIN: u8> Default for GenericPin<B, IO, PIN> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================================
//  Embedded HAL traits
//==================================================================================================

impl<B: Board, IO: IoSpace, const PIN: u8> OutputPin for GenericPin<B, IO, PIN> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Self::set_output_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Self::set_output_low();
        Ok(())
    }
}

impl<B: Board, IO: IoSpace, const PIN: u8> StatefulOutputPin for GenericPin<B, IO, PIN> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(Self::is_output_value_high())
    }

    #[inline]
    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(!Self::is_output_value_high())
    }
}

impl<B: Board, IO: IoSpace, const PIN: u8> ToggleableOutputPin for GenericPin<B, IO, PIN> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        Self::set_output_toggle();
        Ok(())
    }
}

impl<B: Board, IO: IoSpace, const PIN: u8> InputPin for GenericPin<B, IO, PIN> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(Self::is_input_high())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!Self::is_input_high())
    }
}
