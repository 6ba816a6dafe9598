//! One pin for an LED and a button
//!
//! Wire an LED with a series resistor from D5 to GND and a push button from
//! D5 to GND. The LED is lit most of the time. Every few milliseconds the pin
//! is borrowed, switched to a pulled-up input and sampled. A pressed button
//! stops the blinking.
#![no_main]
#![no_std]

use fastgpio::gpio::{Loan, Pin};
use fastgpio::IO_D5;
use panic_halt as _;

fn delay(loops: u32) {
    for _ in 0..loops {
        avr_device::asm::nop();
    }
}

fn button_is_pressed() -> bool {
    let _loan = Loan::<IO_D5>::new();
    Pin::<IO_D5>::set_input_pulled_up();
    delay(10);
    !Pin::<IO_D5>::is_input_high()
}

#[avr_device::entry]
fn main() -> ! {
    Pin::<IO_D5>::set_output_high();
    let mut ticks: u8 = 0;
    loop {
        delay(5_000);
        if button_is_pressed() {
            continue;
        }
        ticks = ticks.wrapping_add(1);
        if ticks % 32 == 0 {
            Pin::<IO_D5>::set_output_toggle();
        }
    }
}
