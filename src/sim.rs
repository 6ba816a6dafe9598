//! # Simulated I/O space
//!
//! [`SimIo`] implements [`IoSpace`] on a model of the megaAVR port registers
//! kept in thread-local memory, so pin code can be exercised on the host.
//! It is available to the crate's own tests and, with the `sim` feature, to
//! host-side tests of downstream code:
//!
//! ```ignore
//! use fastgpio::board::atmega328p::{io::IO_B5, Atmega328p};
//! use fastgpio::gpio::GenericPin;
//! use fastgpio::sim::{self, SimIo};
//!
//! type Led = GenericPin<Atmega328p, SimIo<Atmega328p>, IO_B5>;
//!
//! sim::reset();
//! Led::set_output_high();
//! assert!(Led::is_input_high());
//! ```
//!
//! The model follows the hardware where the pin operations can observe it:
//!
//! - Every register reads as zero after [`reset`], so all pins start as
//!   floating inputs.
//! - Reading a `PINx` register of the board returns, per bit, the `PORTx` bit
//!   for outputs. For inputs it returns the level set with [`drive`], or the
//!   pull-up when nothing drives the pin, or low.
//! - Writing a `PINx` register toggles the `PORTx` bits set in the value.
//!
//! Every register write is recorded, see [`take_trace`]. Each test thread
//! has its own chip.
use crate::board::{Board, PinDescriptor};
use crate::gpio::IoSpace;
use core::marker::PhantomData;
use std::cell::RefCell;

/// A register write as seen by the simulated chip
///
/// A write to a `PINx` register is recorded as the resulting write of the
/// toggled `PORTx` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub addr: u8,
    pub value: u8,
}

struct Chip {
    regs: [u8; 256],
    /// Bits of each `PINx` register driven from outside the chip
    driven: [u8; 256],
    /// Level of the driven bits
    levels: [u8; 256],
    trace: Vec<Access>,
}

impl Chip {
    const fn new() -> Self {
        Chip {
            regs: [0; 256],
            driven: [0; 256],
            levels: [0; 256],
            trace: Vec::new(),
        }
    }

    fn input(&self, port: &PinDescriptor) -> u8 {
        let dir = self.regs[port.direction as usize];
        let out = self.regs[port.output as usize];
        let driven = self.driven[port.input as usize];
        let levels = self.levels[port.input as usize];
        (dir & out) | (!dir & driven & levels) | (!dir & !driven & out)
    }

    fn store(&mut self, addr: u8, value: u8) {
        self.regs[addr as usize] = value;
        self.trace.push(Access { addr, value });
    }
}

std::thread_local! {
    static CHIP: RefCell<Chip> = const { RefCell::new(Chip::new()) };
}

/// Simulated registers of board `B`
pub struct SimIo<B: Board> {
    board: PhantomData<fn() -> B>,
}

impl<B: Board> SimIo<B> {
    /// Any descriptor of the port whose `PINx` register is at `addr`
    fn port(addr: u8) -> Option<&'static PinDescriptor> {
        B::PINS.iter().find(|desc| desc.input == addr)
    }
}

unsafe impl<B: Board> IoSpace for SimIo<B> {
    fn read(addr: u8) -> u8 {
        CHIP.with(|chip| {
            let chip = chip.borrow();
            match Self::port(addr) {
                Some(port) => chip.input(port),
                None => chip.regs[addr as usize],
            }
        })
    }

    fn write(addr: u8, value: u8) {
        CHIP.with(|chip| {
            let mut chip = chip.borrow_mut();
            match Self::port(addr) {
                Some(port) => {
                    let toggled = chip.regs[port.output as usize] ^ value;
                    chip.store(port.output, toggled);
                }
                None => chip.store(addr, value),
            }
        })
    }
}

/// Put the simulated chip of the current thread back into its reset state
pub fn reset() {
    CHIP.with(|chip| *chip.borrow_mut() = Chip::new());
}

/// Drive the pin from outside the chip, or release it with `None`
pub fn drive(pin: PinDescriptor, level: Option<bool>) {
    CHIP.with(|chip| {
        let mut chip = chip.borrow_mut();
        let input = pin.input as usize;
        match level {
            Some(level) => {
                chip.driven[input] |= pin.mask();
                if level {
                    chip.levels[input] |= pin.mask();
                } else {
                    chip.levels[input] &= !pin.mask();
                }
            }
            None => chip.driven[input] &= !pin.mask(),
        }
    })
}

/// Raw content of the register at `addr`
///
/// `PINx` registers are only computed when read through [`SimIo`], their raw
/// content is always zero.
pub fn register(addr: u8) -> u8 {
    CHIP.with(|chip| chip.borrow().regs[addr as usize])
}

/// Take the writes recorded since the last call or the last [`reset`]
pub fn take_trace() -> Vec<Access> {
    CHIP.with(|chip| core::mem::take(&mut chip.borrow_mut().trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::addr::{DDRB, PINB, PORTB};
    use crate::board::atmega328p::Atmega328p;

    type Io = SimIo<Atmega328p>;

    #[test]
    fn reset_state() {
        Io::write(PORTB, 0xff);
        reset();
        assert_eq!(Io::read(PORTB), 0);
        assert_eq!(Io::read(DDRB), 0);
        assert_eq!(Io::read(PINB), 0);
        assert!(take_trace().is_empty());
    }

    #[test]
    fn pin_register_toggles_port() {
        reset();
        Io::write(PORTB, 0b0000_0101);
        Io::write(PINB, 0b0000_0110);
        assert_eq!(register(PORTB), 0b0000_0011);
        assert_eq!(register(PINB), 0);
        assert_eq!(
            take_trace(),
            [
                Access { addr: PORTB, value: 0b0000_0101 },
                Access { addr: PORTB, value: 0b0000_0011 },
            ]
        );
    }

    #[test]
    fn pin_register_reflects_levels() {
        reset();
        let pb0 = Atmega328p::PINS[8];
        let pb1 = Atmega328p::PINS[9];
        // PB0 output high, PB1 pulled up, PB2 floating, PB3 driven high
        Io::write(DDRB, 0b0000_0001);
        Io::write(PORTB, 0b0000_0011);
        assert_eq!(Io::read(PINB), 0b0000_0011);
        drive(Atmega328p::PINS[11], Some(true));
        assert_eq!(Io::read(PINB), 0b0000_1011);
        // External levels do not override outputs
        drive(pb0, Some(false));
        drive(pb1, Some(false));
        assert_eq!(Io::read(PINB), 0b0000_1001);
        drive(pb1, None);
        assert_eq!(Io::read(PINB), 0b0000_1011);
    }

    #[test]
    fn other_addresses_are_plain_memory() {
        reset();
        Io::write(0x80, 0x5a);
        assert_eq!(Io::read(0x80), 0x5a);
        assert_eq!(register(0x80), 0x5a);
    }
}
