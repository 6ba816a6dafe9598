//! Test image
//!
//! Flash it, then watch the on-board LED. A slow blink means the selected test
//! case passed. A failed assertion halts the chip with the LED off.
#![no_main]
#![no_std]

use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};
use fastgpio::gpio::{Loan, Pin, PinState};
use fastgpio::{IO_D2, IO_D3};
use panic_halt as _;

#[cfg(not(feature = "atmega32u4"))]
const LED: u8 = fastgpio::IO_B5;
#[cfg(feature = "atmega32u4")]
const LED: u8 = fastgpio::IO_C7;

#[allow(dead_code)]
#[derive(Debug)]
enum TestCase {
    // Tie D2 to D3 for these tests!
    TestBasic,
    TestPullup,
    TestToggle,
    TestLoan,
    TestStates,
    TestHal,
}

fn delay(loops: u32) {
    for _ in 0..loops {
        avr_device::asm::nop();
    }
}

#[avr_device::entry]
fn main() -> ! {
    Pin::<LED>::set_output_low();
    let test_case = TestCase::TestBasic;

    type Out = Pin<IO_D2>;
    type In = Pin<IO_D3>;

    match test_case {
        TestCase::TestBasic => {
            Out::set_output_high();
            In::set_input();
            delay(10);
            assert!(In::is_input_high());
            Out::set_output_low();
            delay(10);
            assert!(!In::is_input_high());
        }
        TestCase::TestPullup => {
            Out::set_input();
            In::set_input_pulled_up();
            delay(10);
            assert!(In::is_input_high());
            Out::set_output_low();
            delay(10);
            assert!(!In::is_input_high());
            Out::set_output_high();
            delay(10);
            assert!(In::is_input_high());
            Out::set_input();
            delay(10);
            assert!(In::is_input_high());
        }
        TestCase::TestToggle => {
            In::set_input();
            Out::set_output_low();
            Out::set_output_toggle();
            delay(10);
            assert!(In::is_input_high());
            assert!(Out::is_output_value_high());
            Out::set_output_value_toggle();
            delay(10);
            assert!(!In::is_input_high());
        }
        TestCase::TestLoan => {
            In::set_input();
            Out::set_output_high();
            {
                let loan = Loan::<IO_D2>::new();
                assert_eq!(loan.state(), PinState::OutputHigh);
                Out::set_output_low();
                delay(10);
                assert!(!In::is_input_high());
            }
            delay(10);
            assert!(In::is_input_high());
            assert_eq!(Out::state(), PinState::OutputHigh);
        }
        TestCase::TestStates => {
            In::set_input_pulled_up();
            for state in PinState::ALL {
                Out::set_state(state);
                assert_eq!(Out::state(), state);
                delay(10);
                // Only a low output overrides the pull-up
                assert_eq!(In::is_input_high(), state != PinState::OutputLow);
            }
        }
        TestCase::TestHal => {
            let mut out = Out::new();
            let input = In::new();
            In::set_input();
            Out::set_output_low();
            out.set_high().unwrap();
            delay(10);
            assert!(input.is_high().unwrap());
            out.toggle().unwrap();
            delay(10);
            assert!(input.is_low().unwrap());
        }
    }

    loop {
        Pin::<LED>::set_output_toggle();
        delay(400_000);
    }
}
