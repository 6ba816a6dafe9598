//! ATmega32U4, numbered like the Arduino Leonardo

declare_board!(
    /// ATmega32U4
    Atmega32u4,
    "ATmega32U4",
    [
        IO_D2 = (D, 2),
        IO_D3 = (D, 3),
        IO_D1 = (D, 1),
        IO_D0 = (D, 0),
        IO_D4 = (D, 4),
        IO_C6 = (C, 6),
        IO_D7 = (D, 7),
        IO_E6 = (E, 6),
        IO_B4 = (B, 4),
        IO_B5 = (B, 5),
        IO_B6 = (B, 6),
        IO_B7 = (B, 7),
        IO_D6 = (D, 6),
        IO_C7 = (C, 7),
        IO_B3 = (B, 3),
        IO_B1 = (B, 1),
        IO_B2 = (B, 2),
        IO_B0 = (B, 0),
        IO_F7 = (F, 7),
        IO_F6 = (F, 6),
        IO_F5 = (F, 5),
        IO_F4 = (F, 4),
        IO_F1 = (F, 1),
        IO_F0 = (F, 0),
        // Arduino A6 to A11
        _ = (D, 4),
        _ = (D, 7),
        _ = (B, 4),
        _ = (B, 5),
        _ = (B, 6),
        _ = (D, 6),
        // Not reachable through the Arduino pin numbers
        IO_D5 = (D, 5),
        IO_E2 = (E, 2),
        // PE0 is not bonded out
        IO_NONE = (E, 0),
    ]
);
