//! Display specification types
//!
//! Geometry and character ROM selection for a character module.

use crate::rom::{GlyphRows, RomTable, ROM_A00, ROM_A02, ROM_FIRST_CODE};

/// Narrowest supported module, in characters.
pub const MIN_COLUMNS: u8 = 8;

/// Widest supported module, in characters (one DDRAM segment).
pub const MAX_COLUMNS: u8 = 40;

/// Row counts a single HD44780U can drive.
pub const SUPPORTED_ROWS: [u8; 3] = [1, 2, 4];

/// Check a column/row pair against the controller's supported geometries.
pub const fn is_supported_geometry(columns: u8, rows: u8) -> bool {
    columns >= MIN_COLUMNS && columns <= MAX_COLUMNS && matches!(rows, 1 | 2 | 4)
}

/// Character generator ROM mask variant
///
/// Chosen at manufacture time; a part ships with exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CharacterRom {
    /// Japanese standard font (katakana in the upper half)
    A00,
    /// European standard font (Latin-1 style upper half)
    #[default]
    A02,
}

impl CharacterRom {
    /// Alias for [`CharacterRom::A00`]
    pub const JAPANESE: Self = Self::A00;

    /// Alias for [`CharacterRom::A02`]
    pub const EUROPEAN: Self = Self::A02;

    /// The full glyph table for this variant
    pub const fn table(self) -> &'static RomTable {
        match self {
            CharacterRom::A00 => &ROM_A00,
            CharacterRom::A02 => &ROM_A02,
        }
    }

    /// Glyph rows for `code`, or `None` for codes that address CGRAM
    pub fn glyph(self, code: u8) -> Option<&'static GlyphRows> {
        let index = code.checked_sub(ROM_FIRST_CODE)?;
        self.table().get(usize::from(index))
    }

    /// Datasheet name of the ROM mask
    pub const fn name(self) -> &'static str {
        match self {
            CharacterRom::A00 => "A00",
            CharacterRom::A02 => "A02",
        }
    }
}

/// Complete specification of a character module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplaySpec {
    /// Module name (e.g., "Generic 16×2")
    pub name: &'static str,

    /// Visible characters per row (8-40)
    pub columns: u8,

    /// Visible rows (1, 2 or 4)
    pub rows: u8,

    /// Character generator ROM fitted to the controller
    pub rom: CharacterRom,
}

impl DisplaySpec {
    /// Number of visible character cells
    pub const fn cells(&self) -> u16 {
        // SAFETY: both factors are u8, the product fits in u16.
        #[allow(clippy::arithmetic_side_effects)]
        let cells = self.columns as u16 * self.rows as u16;
        cells
    }

    /// Whether one HD44780U can drive this geometry
    pub const fn is_supported(&self) -> bool {
        is_supported_geometry(self.columns, self.rows)
    }

    /// Whether rows 2 and 3 fold into the same DDRAM segments as rows 0 and 1
    pub const fn is_four_row(&self) -> bool {
        self.rows == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_geometry_bounds() {
        assert!(is_supported_geometry(8, 1));
        assert!(is_supported_geometry(40, 2));
        assert!(is_supported_geometry(20, 4));
        assert!(!is_supported_geometry(7, 2));
        assert!(!is_supported_geometry(41, 2));
        assert!(!is_supported_geometry(16, 3));
        assert!(!is_supported_geometry(16, 0));
    }

    #[test]
    fn test_cgram_codes_have_no_rom_glyph() {
        for code in 0..ROM_FIRST_CODE {
            assert!(CharacterRom::A00.glyph(code).is_none());
        }
        assert!(CharacterRom::A00.glyph(ROM_FIRST_CODE).is_some());
        assert!(CharacterRom::A02.glyph(0xFF).is_some());
    }

    #[test]
    fn test_rom_aliases() {
        assert_eq!(CharacterRom::JAPANESE, CharacterRom::A00);
        assert_eq!(CharacterRom::EUROPEAN, CharacterRom::A02);
        assert_eq!(CharacterRom::default(), CharacterRom::A02);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rom_serializes_by_mask_name() {
        let json = serde_json::to_string(&CharacterRom::A00).unwrap();
        assert_eq!(json, "\"A00\"");
        let rom: CharacterRom = serde_json::from_str("\"A02\"").unwrap();
        assert_eq!(rom, CharacterRom::A02);
    }

    #[test]
    fn test_cells() {
        let spec = DisplaySpec {
            name: "Test",
            columns: 20,
            rows: 4,
            rom: CharacterRom::A00,
        };
        assert_eq!(spec.cells(), 80);
        assert!(spec.is_four_row());
    }
}
