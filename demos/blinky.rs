//! Simple blinky example
//!
//! Blinks the on-board LED of an Arduino Uno (PB5) or Leonardo (PC7).
#![no_main]
#![no_std]

use fastgpio::gpio::Pin;
use panic_halt as _;

#[cfg(not(feature = "atmega32u4"))]
const LED: u8 = fastgpio::IO_B5;
#[cfg(feature = "atmega32u4")]
const LED: u8 = fastgpio::IO_C7;

fn delay(loops: u32) {
    for _ in 0..loops {
        avr_device::asm::nop();
    }
}

#[avr_device::entry]
fn main() -> ! {
    for _ in 0..10 {
        Pin::<LED>::set_output_low();
        delay(200_000);
        Pin::<LED>::set_output_high();
        delay(200_000);
    }
    loop {
        Pin::<LED>::set_output_value_toggle();
        delay(100_000);
    }
}
