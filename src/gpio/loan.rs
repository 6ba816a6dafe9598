//! # Saving and restoring pin configurations
//!
//! A [`PinLoan`] samples the [`PinState`] of its pin when it is created and
//! writes it back with [`set_state`](GenericPin::set_state) when it is
//! dropped. Because restoring happens in [`Drop`], it also happens on early
//! returns and while unwinding.
//!
//! Checking a button that shares a pin with an LED:
//!
//! ```no_run
//! use fastgpio::gpio::{Loan, Pin};
//! use fastgpio::IO_D5;
//!
//! fn button_is_pressed() -> bool {
//!     let _loan = Loan::<IO_D5>::new();
//!     Pin::<IO_D5>::set_input_pulled_up();
//!     // Give the pull-up some time to charge the line
//!     for _ in 0..16 {
//!         core::hint::spin_loop();
//!     }
//!     !Pin::<IO_D5>::is_input_high()
//! }
//! ```
//!
//! Only the direction and the output value are restored. Anything else that
//! happened while the pin was on loan, e.g. levels seen by other code, is
//! not undone.
use super::pins::{GenericPin, PinState};
use super::reg::{IoSpace, Mmio};
use crate::board::{Active, Board};
use core::marker::PhantomData;

/// Restores the state of pin `PIN` when dropped
#[must_use = "the pin is restored as soon as the loan is dropped"]
pub struct PinLoan<B: Board, IO: IoSpace, const PIN: u8> {
    state: PinState,
    pin: PhantomData<GenericPin<B, IO, PIN>>,
}

/// Loan of a pin of the [`Active`] board
pub type Loan<const PIN: u8> = PinLoan<Active, Mmio, PIN>;

impl<B: Board, IO: IoSpace, const PIN: u8> PinLoan<B, IO, PIN> {
    #[inline]
    pub fn new() -> Self {
        PinLoan {
            state: GenericPin::<B, IO, PIN>::state(),
            pin: PhantomData,
        }
    }

    /// State the pin is restored to
    #[inline]
    pub fn state(&self) -> PinState {
        self.state
    }
}

impl<B: Board, IO: IoSpace, const PIN: u8> Default for PinLoan<B, IO, PIN> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board, IO: IoSpace, const PIN: u8> Drop for PinLoan<B, IO, PIN> {
    #[inline]
    fn drop(&mut self) {
        GenericPin::<B, IO, PIN>::set_state(self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::atmega328p::{io::*, Atmega328p};
    use crate::gpio::pins::tests::{for_each_pin, states_in_trace, SimPin};
    use crate::sim::{self, SimIo};
    use proptest::prelude::*;

    type Uno<const PIN: u8> = SimPin<Atmega328p, PIN>;
    type UnoLoan<const PIN: u8> = PinLoan<Atmega328p, SimIo<Atmega328p>, PIN>;

    fn mutate<B: Board, const PIN: u8>(op: u8) {
        match op % 12 {
            0 => SimPin::<B, PIN>::set_output_low(),
            1 => SimPin::<B, PIN>::set_output_high(),
            2 => SimPin::<B, PIN>::set_output(op & 0x80 != 0),
            3 => SimPin::<B, PIN>::set_output_toggle(),
            4 => SimPin::<B, PIN>::set_output_value_low(),
            5 => SimPin::<B, PIN>::set_output_value_high(),
            6 => SimPin::<B, PIN>::set_output_value(op & 0x80 != 0),
            7 => SimPin::<B, PIN>::set_output_value_toggle(),
            8 => SimPin::<B, PIN>::set_input(),
            9 => SimPin::<B, PIN>::set_input_pulled_up(),
            10 => SimPin::<B, PIN>::set_state(PinState::from_bits(op >> 4)),
            _ => {
                let _ = SimPin::<B, PIN>::is_input_high();
            }
        }
    }

    fn loan_restores<B: Board, const PIN: u8>() {
        for initial in PinState::ALL {
            SimPin::<B, PIN>::set_state(initial);
            {
                let loan = PinLoan::<B, SimIo<B>, PIN>::new();
                assert_eq!(loan.state(), initial);
                for op in 0..12 {
                    mutate::<B, PIN>(op);
                }
            }
            assert_eq!(SimPin::<B, PIN>::state(), initial, "{} pin {}", B::NAME, PIN);
        }
    }

    #[test]
    fn loan_restores_every_pin() {
        for_each_pin!(loan_restores);
    }

    #[test]
    fn restored_on_early_return() {
        fn sample(bail: bool) -> Option<bool> {
            let _loan = UnoLoan::<IO_D5>::new();
            Uno::<IO_D5>::set_input_pulled_up();
            if bail {
                return None;
            }
            Some(!Uno::<IO_D5>::is_input_high())
        }

        sim::reset();
        Uno::<IO_D5>::set_output_high();
        assert_eq!(sample(true), None);
        assert_eq!(Uno::<IO_D5>::state(), PinState::OutputHigh);

        sim::drive(Uno::<IO_D5>::DESCRIPTOR, Some(false));
        Uno::<IO_D5>::set_output_low();
        // Pressed button pulls the line low
        assert_eq!(sample(false), Some(true));
        assert_eq!(Uno::<IO_D5>::state(), PinState::OutputLow);
    }

    #[test]
    fn restored_while_unwinding() {
        sim::reset();
        Uno::<IO_C1>::set_input_pulled_up();
        let result = std::panic::catch_unwind(|| {
            let _loan = UnoLoan::<IO_C1>::new();
            Uno::<IO_C1>::set_output_high();
            panic!("pin failure");
        });
        assert!(result.is_err());
        assert_eq!(Uno::<IO_C1>::state(), PinState::InputPullUp);
    }

    #[test]
    fn nested_loans() {
        sim::reset();
        Uno::<IO_B2>::set_output_low();
        {
            let _outer = Uno::<IO_B2>::loan();
            Uno::<IO_B2>::set_input();
            {
                let inner = Uno::<IO_B2>::loan();
                assert_eq!(inner.state(), PinState::InputFloating);
                Uno::<IO_B2>::set_output_high();
            }
            assert_eq!(Uno::<IO_B2>::state(), PinState::InputFloating);
        }
        assert_eq!(Uno::<IO_B2>::state(), PinState::OutputLow);
    }

    #[test]
    fn with_loan_returns_closure_result() {
        sim::reset();
        Uno::<IO_D7>::set_output_high();
        sim::drive(Uno::<IO_D7>::DESCRIPTOR, Some(false));
        let pressed = Uno::<IO_D7>::with_loan(|| {
            Uno::<IO_D7>::set_input_pulled_up();
            !Uno::<IO_D7>::is_input_high()
        });
        assert!(pressed);
        assert_eq!(Uno::<IO_D7>::state(), PinState::OutputHigh);
    }

    #[test]
    fn restore_does_not_drive_wrong_level() {
        sim::reset();
        Uno::<IO_B4>::set_output_low();
        let loan = UnoLoan::<IO_B4>::default();
        Uno::<IO_B4>::set_input_pulled_up();
        sim::take_trace();
        drop(loan);
        let states = states_in_trace(Uno::<IO_B4>::DESCRIPTOR, PinState::InputPullUp);
        assert_eq!(states.last(), Some(&PinState::OutputLow));
        assert!(!states.contains(&PinState::OutputHigh));
    }

    #[test]
    fn untouched_pins_are_not_restored() {
        sim::reset();
        let loan = UnoLoan::<IO_D2>::new();
        Uno::<IO_D3>::set_output_high();
        drop(loan);
        assert_eq!(Uno::<IO_D3>::state(), PinState::OutputHigh);
        assert_eq!(Uno::<IO_D2>::state(), PinState::InputFloating);
    }

    proptest! {
        #[test]
        fn loan_restores_after_any_sequence(
            initial in 0u8..4,
            ops in proptest::collection::vec(any::<u8>(), 0..32),
        ) {
            sim::reset();
            let initial = PinState::from_bits(initial);
            Uno::<IO_C3>::set_state(initial);
            {
                let _loan = UnoLoan::<IO_C3>::new();
                for op in ops {
                    mutate::<Atmega328p, IO_C3>(op);
                }
            }
            prop_assert_eq!(Uno::<IO_C3>::state(), initial);
        }
    }
}
