//==================================================================================================
//  IoSpace
//==================================================================================================

/// Register access used by the pin operations
///
/// All functions are associated functions without a receiver, so an
/// implementation is a zero-sized marker type and every call is resolved
/// statically. The pin operations always pass compile-time constant
/// addresses and bit positions.
///
/// `set_bit` and `clear_bit` are a read followed by a write and are not
/// atomic. For [`Mmio`] the compiler usually folds them into a single `sbi`
/// or `cbi` on the low I/O registers, but the generated code is not
/// guaranteed to do so.
///
/// # Safety
///
/// Implementations must treat `addr` as the data-space address of an 8-bit
/// I/O register. A write of ones to an input (`PINx`) register must toggle
/// the corresponding output (`PORTx`) bits and leave every other bit
/// untouched, as the megaAVR hardware does.
pub unsafe trait IoSpace {
    /// Read the register at `addr`
    fn read(addr: u8) -> u8;

    /// Write `value` to the register at `addr`
    fn write(addr: u8, value: u8);

    /// Set a single bit of the register at `addr`
    #[inline(always)]
    fn set_bit(addr: u8, bit: u8) {
        Self::write(addr, Self::read(addr) | (1 << bit));
    }

    /// Clear a single bit of the register at `addr`
    #[inline(always)]
    fn clear_bit(addr: u8, bit: u8) {
        Self::write(addr, Self::read(addr) & !(1 << bit));
    }

    #[inline(always)]
    fn read_bit(addr: u8, bit: u8) -> bool {
        (Self::read(addr) >> bit) & 0x01 == 1
    }
}

//==================================================================================================
//  Mmio
//==================================================================================================

/// Volatile accesses to the memory mapped I/O registers of the running chip
pub enum Mmio {}

// Pin descriptors only hold the addresses of the port registers of the
// selected board, and the hardware implements the PINx toggle behavior.
unsafe impl IoSpace for Mmio {
    #[inline(always)]
    fn read(addr: u8) -> u8 {
        // Safety: `addr` is the address of an I/O register, which is always mapped
        unsafe { core::ptr::read_volatile(addr as usize as *const u8) }
    }

    #[inline(always)]
    fn write(addr: u8, value: u8) {
        // Safety: `addr` is the address of an I/O register, which is always mapped
        unsafe { core::ptr::write_volatile(addr as usize as *mut u8, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::addr::{DDRC, PORTC};
    use crate::board::atmega328p::Atmega328p;
    use crate::sim::{self, SimIo};

    type Io = SimIo<Atmega328p>;

    #[test]
    fn bit_helpers_only_touch_their_bit() {
        sim::reset();
        Io::write(PORTC, 0b1010_0101);
        Io::set_bit(PORTC, 1);
        assert_eq!(sim::register(PORTC), 0b1010_0111);
        Io::clear_bit(PORTC, 7);
        assert_eq!(sim::register(PORTC), 0b0010_0111);
        assert!(Io::read_bit(PORTC, 5));
        assert!(!Io::read_bit(PORTC, 6));
        assert_eq!(sim::register(DDRC), 0);
    }
}
