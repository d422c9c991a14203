//! Standard character module geometries
//!
//! Sizes that a single HD44780U (or a pin-compatible clone) drives directly.

use crate::{CharacterRom, DisplaySpec};

/// 8×1 module, one-line DDRAM layout
pub const LCD_8X1: DisplaySpec = DisplaySpec {
    name: "Generic 8×1",
    columns: 8,
    rows: 1,
    rom: CharacterRom::A00,
};

/// 16×1 module, one-line DDRAM layout
pub const LCD_16X1: DisplaySpec = DisplaySpec {
    name: "Generic 16×1",
    columns: 16,
    rows: 1,
    rom: CharacterRom::A00,
};

/// 16×2 module (the ubiquitous "1602")
pub const LCD_16X2: DisplaySpec = DisplaySpec {
    name: "Generic 16×2",
    columns: 16,
    rows: 2,
    rom: CharacterRom::A00,
};

/// 20×2 module
pub const LCD_20X2: DisplaySpec = DisplaySpec {
    name: "Generic 20×2",
    columns: 20,
    rows: 2,
    rom: CharacterRom::A00,
};

/// 20×4 module ("2004")
///
/// Rows 2 and 3 continue rows 0 and 1 inside the same DDRAM segments,
/// starting 20 bytes in.
pub const LCD_20X4: DisplaySpec = DisplaySpec {
    name: "Generic 20×4",
    columns: 20,
    rows: 4,
    rom: CharacterRom::A00,
};

/// 24×2 module
pub const LCD_24X2: DisplaySpec = DisplaySpec {
    name: "Generic 24×2",
    columns: 24,
    rows: 2,
    rom: CharacterRom::A02,
};

/// 40×2 module, every DDRAM byte visible
pub const LCD_40X2: DisplaySpec = DisplaySpec {
    name: "Generic 40×2",
    columns: 40,
    rows: 2,
    rom: CharacterRom::A02,
};

/// Every preset, smallest first
pub const ALL: [&DisplaySpec; 7] = [
    &LCD_8X1, &LCD_16X1, &LCD_16X2, &LCD_20X2, &LCD_24X2, &LCD_20X4, &LCD_40X2,
];
