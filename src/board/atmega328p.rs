//! ATmega168 and ATmega328P, numbered like the Arduino Uno

declare_board!(
    /// ATmega168/ATmega328P in the 28 or 32 pin package
    Atmega328p,
    "ATmega328P",
    [
        IO_D0 = (D, 0),
        IO_D1 = (D, 1),
        IO_D2 = (D, 2),
        IO_D3 = (D, 3),
        IO_D4 = (D, 4),
        IO_D5 = (D, 5),
        IO_D6 = (D, 6),
        IO_D7 = (D, 7),
        IO_B0 = (B, 0),
        IO_B1 = (B, 1),
        IO_B2 = (B, 2),
        IO_B3 = (B, 3),
        IO_B4 = (B, 4),
        IO_B5 = (B, 5),
        IO_C0 = (C, 0),
        IO_C1 = (C, 1),
        IO_C2 = (C, 2),
        IO_C3 = (C, 3),
        IO_C4 = (C, 4),
        IO_C5 = (C, 5),
        IO_C6 = (C, 6),
        // PORTC has no bit 7
        IO_NONE = (C, 7),
    ]
);
