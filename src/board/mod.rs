//! # Pin descriptor tables
//!
//! Every supported board provides an ordered table of [`PinDescriptor`]s. The
//! position of a descriptor in the table is the pin number used by the rest
//! of the crate, and each board module exports an `io` module with a
//! symbolic constant for every physical pin, e.g. `IO_B5`.
//!
//! Exactly one board is active per build. It is selected with a Cargo
//! feature and exported as [`Active`]. Builds without a board feature, or
//! with features for two different pinouts, fail to compile.
//!
//! The last entry of each table is a placeholder pin mapped to a bit that is
//! not bonded out on the package. Its constant `IO_NONE` can be used to say
//! "no pin" while still being usable with every pin operation.
use crate::Sealed;

//==================================================================================================
//  Register addresses
//==================================================================================================

/// Data-space addresses of the megaAVR port registers
///
/// These are the addresses seen by `ld`/`st`, i.e. the I/O address plus
/// `0x20`. Every port is laid out as `PINx`, `DDRx`, `PORTx`.
pub mod addr {
    pub const PINB: u8 = 0x23;
    pub const DDRB: u8 = 0x24;
    pub const PORTB: u8 = 0x25;
    pub const PINC: u8 = 0x26;
    pub const DDRC: u8 = 0x27;
    pub const PORTC: u8 = 0x28;
    pub const PIND: u8 = 0x29;
    pub const DDRD: u8 = 0x2A;
    pub const PORTD: u8 = 0x2B;
    pub const PINE: u8 = 0x2C;
    pub const DDRE: u8 = 0x2D;
    pub const PORTE: u8 = 0x2E;
    pub const PINF: u8 = 0x2F;
    pub const DDRF: u8 = 0x30;
    pub const PORTF: u8 = 0x31;
}

//==================================================================================================
//  PinDescriptor
//==================================================================================================

/// Register addresses and bit position of a single pin
///
/// The three registers share the bit position. `input` reflects the level on
/// the pin, `output` holds the driven value (or the pull-up enable for an
/// input) and `direction` selects output mode when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    /// Address of the `PINx` register
    pub input: u8,
    /// Address of the `PORTx` register
    pub output: u8,
    /// Address of the `DDRx` register
    pub direction: u8,
    /// Bit index inside the three registers
    pub bit: u8,
}

impl PinDescriptor {
    #[inline]
    pub const fn new(input: u8, output: u8, direction: u8, bit: u8) -> Self {
        assert!(bit < 8, "AVR ports are 8 bits wide");
        PinDescriptor {
            input,
            output,
            direction,
            bit,
        }
    }

    /// Single-bit mask selecting this pin inside its port registers
    #[inline(always)]
    pub const fn mask(&self) -> u8 {
        1 << self.bit
    }
}

//==================================================================================================
//  Board
//==================================================================================================

/// Type-level enum of the supported boards
pub trait Board: Sealed {
    /// Human readable name of the microcontroller
    const NAME: &'static str;
    /// Descriptor table, indexed by pin number
    const PINS: &'static [PinDescriptor];
    /// Pin number of the placeholder pin
    const NONE: u8;
    /// Every symbolic pin constant together with its pin number
    const NAMED: &'static [(&'static str, u8)];
}

/// Generates a board type, its descriptor table and its `io` constants
///
/// Entries are listed in pin number order. An entry named `_` occupies a pin
/// number without getting a constant of its own, which is used for alternate
/// numbers of a pin that already has one.
macro_rules! declare_board {
    (
        $(#[$meta:meta])*
        $Board:ident, $name:literal, [$($entries:tt)+]
    ) => {
        declare_board!(@munch ($(#[$meta])* $Board, $name) [] [] (0u8); $($entries)+);
    };
    (
        @munch $head:tt [$($table:tt)*] [$($named:tt)*] ($idx:expr);
        _ = ($Port:ident, $bit:literal), $($rest:tt)*
    ) => {
        declare_board!(
            @munch $head [$($table)* ($Port, $bit)] [$($named)*] (($idx) + 1); $($rest)*
        );
    };
    (
        @munch $head:tt [$($table:tt)*] [$($named:tt)*] ($idx:expr);
        $Name:ident = ($Port:ident, $bit:literal), $($rest:tt)*
    ) => {
        declare_board!(
            @munch $head [$($table)* ($Port, $bit)] [$($named)* ($Name, $Port, $bit, $idx)]
            (($idx) + 1); $($rest)*
        );
    };
    (
        @munch ($(#[$meta:meta])* $Board:ident, $name:literal)
        [$(($Port:ident, $bit:literal))+]
        [$(($Name:ident, $NPort:ident, $nbit:literal, $num:expr))+]
        ($len:expr);
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub enum $Board {}

            impl $crate::Sealed for $Board {}

            /// Descriptor table, indexed by pin number
            pub const PINS: &[$crate::board::PinDescriptor] = &[
                $(
                    $crate::board::PinDescriptor::new(
                        $crate::board::addr::[<PIN $Port>],
                        $crate::board::addr::[<PORT $Port>],
                        $crate::board::addr::[<DDR $Port>],
                        $bit,
                    ),
                )+
            ];

            /// Symbolic pin numbers
            pub mod io {
                $(
                    #[doc = "Pin number of P" $NPort $nbit]
                    pub const $Name: u8 = $num;
                )+
            }

            impl $crate::board::Board for $Board {
                const NAME: &'static str = $name;
                const PINS: &'static [$crate::board::PinDescriptor] = PINS;
                const NONE: u8 = io::IO_NONE;
                const NAMED: &'static [(&'static str, u8)] = &[
                    $((stringify!($Name), io::$Name),)+
                ];
            }

            const _: () = assert!(PINS.len() == ($len) as usize);
            const _: () = assert!(io::IO_NONE as usize == PINS.len() - 1);
            $(
                const _: () = assert!(
                    PINS[io::$Name as usize].input == $crate::board::addr::[<PIN $NPort>]
                        && PINS[io::$Name as usize].bit == $nbit
                );
            )+
        }
    };
}

pub mod atmega328p;
pub mod atmega32u4;

//==================================================================================================
//  Board selection
//==================================================================================================

#[cfg(not(any(feature = "atmega168", feature = "atmega328p", feature = "atmega32u4")))]
compile_error!(
    "fastgpio does not support this board: enable one of the `atmega168`, `atmega328p` or \
     `atmega32u4` features"
);

#[cfg(all(
    any(feature = "atmega168", feature = "atmega328p"),
    feature = "atmega32u4"
))]
compile_error!(
    "the ATmega168/328P and ATmega32U4 pinouts are mutually exclusive, disable the default \
     features when selecting `atmega32u4`"
);

// Without a board feature the ATmega328P tables stand in, so that the
// compile_error above is the only error reported.
#[cfg(not(feature = "atmega32u4"))]
pub use atmega328p as active;
/// Board selected for this build
#[cfg(not(feature = "atmega32u4"))]
pub type Active = atmega328p::Atmega328p;

#[cfg(feature = "atmega32u4")]
pub use atmega32u4 as active;
/// Board selected for this build
#[cfg(feature = "atmega32u4")]
pub type Active = atmega32u4::Atmega32u4;
