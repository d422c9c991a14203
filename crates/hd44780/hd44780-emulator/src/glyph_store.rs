//! Glyph store
//!
//! CGRAM plus a reference to the immutable character ROM fitted at
//! construction. Character codes 0-15 resolve to CGRAM, everything above to
//! the ROM.

use hd44780_specs::{CharacterRom, ROM_FIRST_CODE};

/// Bytes of CGRAM (6-bit address counter)
pub const CGRAM_SIZE: usize = 64;

/// Pixel rows in the tallest character cell (5×10 font plus cursor line)
pub const MAX_GLYPH_ROWS: usize = 11;

/// Dot columns per glyph
pub const GLYPH_WIDTH: u8 = 5;

/// Bits of a glyph row that map to dots; bit 4 is the leftmost column
pub const GLYPH_ROW_MASK: u8 = 0x1F;

/// Character font selected by function set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSize {
    /// 5×8 cell, 8 user glyphs of 8 bytes
    #[default]
    Dots5x8,
    /// 5×11 cell, 4 user glyphs of 16 bytes
    Dots5x10,
}

impl FontSize {
    /// Pixel rows in one character cell
    pub const fn cell_rows(self) -> u8 {
        match self {
            FontSize::Dots5x8 => 8,
            FontSize::Dots5x10 => 11,
        }
    }

    /// CGRAM bytes reserved per user glyph
    pub const fn cgram_stride(self) -> u8 {
        match self {
            FontSize::Dots5x8 => 8,
            FontSize::Dots5x10 => 16,
        }
    }

    /// CGRAM glyph slot used by character code `code` (0-15)
    ///
    /// In the tall font bit 0 of the code is ignored.
    pub const fn cgram_slot(self, code: u8) -> u8 {
        match self {
            FontSize::Dots5x8 => code & 0x07,
            FontSize::Dots5x10 => code.wrapping_shr(1) & 0x03,
        }
    }
}

/// Pixel rows of one character cell, top row first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; MAX_GLYPH_ROWS],
    height: u8,
}

impl Glyph {
    /// An empty glyph of the given height
    pub const fn blank(height: u8) -> Self {
        Self {
            rows: [0; MAX_GLYPH_ROWS],
            height,
        }
    }

    /// Build from row bytes, truncated or padded to `height`
    pub fn from_rows(source: &[u8], height: u8) -> Self {
        let mut glyph = Self::blank(height);
        for (dst, src) in glyph.rows.iter_mut().zip(source).take(usize::from(height)) {
            *dst = src & GLYPH_ROW_MASK;
        }
        glyph
    }

    /// Row bytes, top first; bit 4 is the leftmost dot
    pub fn rows(&self) -> &[u8] {
        self.rows.get(..usize::from(self.height)).unwrap_or(&self.rows)
    }

    /// Number of pixel rows
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Whether the dot at (`x`, `y`) is lit
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        let Some(shift) = LAST_DOT.checked_sub(x) else {
            return false;
        };
        self.rows()
            .get(usize::from(y))
            .and_then(|row| row.checked_shr(u32::from(shift)))
            .is_some_and(|bits| bits & 1 != 0)
    }

    /// Number of lit dots
    pub fn lit(&self) -> u32 {
        self.rows().iter().map(|row| row.count_ones()).sum()
    }
}

/// CGRAM and the character ROM
#[derive(Debug, Clone)]
pub struct GlyphStore {
    cgram: [u8; CGRAM_SIZE],
    rom: CharacterRom,
}

impl GlyphStore {
    /// Zeroed CGRAM over the given ROM
    pub const fn new(rom: CharacterRom) -> Self {
        Self {
            cgram: [0; CGRAM_SIZE],
            rom,
        }
    }

    /// ROM variant this store reads from
    pub const fn rom(&self) -> CharacterRom {
        self.rom
    }

    /// Raw CGRAM contents
    pub const fn cgram(&self) -> &[u8; CGRAM_SIZE] {
        &self.cgram
    }

    /// Store one CGRAM byte; the offset wraps at 64
    pub fn write_cgram(&mut self, offset: u8, value: u8) {
        if let Some(byte) = self.cgram.get_mut(cgram_index(offset)) {
            *byte = value;
        }
    }

    /// Read one CGRAM byte; the offset wraps at 64
    pub fn read_cgram(&self, offset: u8) -> u8 {
        self.cgram.get(cgram_index(offset)).copied().unwrap_or(0)
    }

    /// Pixel rows for character `code` in the given font
    ///
    /// Codes below 16 come from CGRAM. ROM glyphs are 5×8 and sit at the top
    /// of a taller cell. Codes empty on the mask come out blank.
    pub fn glyph_bits(&self, code: u8, font: FontSize) -> Glyph {
        let height = font.cell_rows();
        if code < ROM_FIRST_CODE {
            let stride = usize::from(font.cgram_stride());
            let start = usize::from(font.cgram_slot(code)).saturating_mul(stride);
            let rows = self
                .cgram
                .get(start..start.saturating_add(stride))
                .unwrap_or(&[]);
            Glyph::from_rows(rows, height)
        } else {
            match self.rom.glyph(code) {
                Some(rows) => Glyph::from_rows(rows, height),
                None => Glyph::blank(height),
            }
        }
    }
}

const LAST_DOT: u8 = GLYPH_WIDTH - 1;

fn cgram_index(offset: u8) -> usize {
    usize::from(offset & 0x3F)
}
