//! Character generator ROM tables
//!
//! Two mask-ROM variants ship on HD44780U parts: A00 (Japanese, katakana in
//! the upper half) and A02 (European, Latin-1 style upper half). Both tables
//! are indexed by `code - ROM_FIRST_CODE`; codes below [`ROM_FIRST_CODE`]
//! address CGRAM and never reach these tables.
//!
//! Each glyph is stored in the same layout CGRAM uses: one byte per pixel
//! row, top row first, with bit 4 as the leftmost of the five columns. Row 7
//! is the cursor line and is blank for most glyphs.
//!
//! Codes that are empty on the real masks stay blank: 0x10-0x1F, 0x80-0xA0
//! and 0xFE on A00, 0xA0 on A02, and the space in both.

/// First character code served from ROM (codes below it read CGRAM).
pub const ROM_FIRST_CODE: u8 = 16;

/// Number of glyphs held by one ROM variant.
pub const ROM_GLYPH_COUNT: usize = 240;

/// Pixel rows of one 5×8 glyph, top row first, bit 4 = leftmost column.
pub type GlyphRows = [u8; 8];

/// A complete character ROM.
pub type RomTable = [GlyphRows; ROM_GLYPH_COUNT];

/// A00 (Japanese) character ROM.
pub static ROM_A00: RomTable = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 space
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // 0x21 '!'
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x22 '"'
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A, 0x00], // 0x23 '#'
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04, 0x00], // 0x24 '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03, 0x00], // 0x25 '%'
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D, 0x00], // 0x26 '&'
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27 '\''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00], // 0x28 '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // 0x29 ')'
    [0x00, 0x0A, 0x04, 0x1F, 0x04, 0x0A, 0x00, 0x00], // 0x2A '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00], // 0x2B '+'
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08, 0x00], // 0x2C ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00], // 0x2D '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // 0x2E '.'
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // 0x2F '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00], // 0x30 '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x31 '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F, 0x00], // 0x32 '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E, 0x00], // 0x33 '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02, 0x00], // 0x34 '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E, 0x00], // 0x35 '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E, 0x00], // 0x36 '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00], // 0x37 '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0x38 '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C, 0x00], // 0x39 '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00, 0x00], // 0x3A ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08, 0x00], // 0x3B ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, 0x00], // 0x3C '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x00], // 0x3D '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08, 0x00], // 0x3E '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04, 0x00], // 0x3F '?'
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E, 0x00], // 0x40 '@'
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0x41 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E, 0x00], // 0x42 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E, 0x00], // 0x43 'C'
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C, 0x00], // 0x44 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F, 0x00], // 0x45 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10, 0x00], // 0x46 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F, 0x00], // 0x47 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00], // 0x48 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x49 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C, 0x00], // 0x4A 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, 0x00], // 0x4B 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0x00], // 0x4C 'L'
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11, 0x00], // 0x4D 'M'
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x00], // 0x4E 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x4F 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10, 0x00], // 0x50 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D, 0x00], // 0x51 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11, 0x00], // 0x52 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E, 0x00], // 0x53 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x54 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x55 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 0x56 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A, 0x00], // 0x57 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11, 0x00], // 0x58 'X'
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x00], // 0x59 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F, 0x00], // 0x5A 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // 0x5B '['
    [0x11, 0x0A, 0x1F, 0x04, 0x1F, 0x04, 0x04, 0x00], // 0x5C yen sign
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E, 0x00], // 0x5D ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x5E '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00], // 0x5F '_'
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x60 '`'
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0x61 'a'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E, 0x00], // 0x62 'b'
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E, 0x00], // 0x63 'c'
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F, 0x00], // 0x64 'd'
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0x65 'e'
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08, 0x00], // 0x66 'f'
    [0x00, 0x00, 0x0F, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0x67 'g'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0x68 'h'
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x69 'i'
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C, 0x00], // 0x6A 'j'
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12, 0x00], // 0x6B 'k'
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x6C 'l'
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11, 0x00], // 0x6D 'm'
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0x6E 'n'
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x6F 'o'
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10, 0x00], // 0x70 'p'
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01, 0x00], // 0x71 'q'
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00], // 0x72 'r'
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E, 0x00], // 0x73 's'
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06, 0x00], // 0x74 't'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0x75 'u'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 0x76 'v'
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A, 0x00], // 0x77 'w'
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00], // 0x78 'x'
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0x79 'y'
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F, 0x00], // 0x7A 'z'
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, 0x00], // 0x7B '{'
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x7C '|'
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, 0x00], // 0x7D '}'
    [0x00, 0x04, 0x02, 0x1F, 0x02, 0x04, 0x00, 0x00], // 0x7E right arrow
    [0x00, 0x04, 0x08, 0x1F, 0x08, 0x04, 0x00, 0x00], // 0x7F left arrow
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x80
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x81
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x82
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x83
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x84
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x85
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x86
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x87
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x88
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x89
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x90
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x91
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x92
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x93
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x94
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x95
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x96
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x97
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x98
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x99
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xA0
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x14, 0x1C, 0x00], // 0xA1 ideographic full stop
    [0x07, 0x04, 0x04, 0x04, 0x00, 0x00, 0x00, 0x00], // 0xA2 left corner bracket
    [0x00, 0x00, 0x00, 0x04, 0x04, 0x04, 0x1C, 0x00], // 0xA3 right corner bracket
    [0x00, 0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x00], // 0xA4 ideographic comma
    [0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00], // 0xA5 middle dot
    [0x00, 0x1F, 0x01, 0x1F, 0x01, 0x02, 0x04, 0x00], // 0xA6 katakana wo
    [0x00, 0x00, 0x1F, 0x01, 0x06, 0x04, 0x08, 0x00], // 0xA7 small katakana a
    [0x00, 0x00, 0x02, 0x04, 0x0C, 0x14, 0x04, 0x00], // 0xA8 small katakana i
    [0x00, 0x00, 0x04, 0x1F, 0x11, 0x01, 0x06, 0x00], // 0xA9 small katakana u
    [0x00, 0x00, 0x00, 0x1F, 0x04, 0x04, 0x1F, 0x00], // 0xAA small katakana e
    [0x00, 0x00, 0x02, 0x1F, 0x06, 0x0A, 0x12, 0x00], // 0xAB small katakana o
    [0x00, 0x00, 0x08, 0x1F, 0x09, 0x0A, 0x08, 0x00], // 0xAC small katakana ya
    [0x00, 0x00, 0x00, 0x0E, 0x02, 0x02, 0x1F, 0x00], // 0xAD small katakana yu
    [0x00, 0x00, 0x1E, 0x02, 0x1E, 0x02, 0x1E, 0x00], // 0xAE small katakana yo
    [0x00, 0x00, 0x00, 0x15, 0x15, 0x01, 0x06, 0x00], // 0xAF small katakana tsu
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00], // 0xB0 prolonged sound mark
    [0x1F, 0x01, 0x05, 0x06, 0x04, 0x04, 0x08, 0x00], // 0xB1 katakana a
    [0x01, 0x02, 0x04, 0x0C, 0x14, 0x04, 0x04, 0x00], // 0xB2 katakana i
    [0x04, 0x1F, 0x11, 0x11, 0x01, 0x02, 0x04, 0x00], // 0xB3 katakana u
    [0x00, 0x1F, 0x04, 0x04, 0x04, 0x04, 0x1F, 0x00], // 0xB4 katakana e
    [0x02, 0x1F, 0x02, 0x06, 0x0A, 0x12, 0x02, 0x00], // 0xB5 katakana o
    [0x08, 0x1F, 0x09, 0x09, 0x09, 0x09, 0x12, 0x00], // 0xB6 katakana ka
    [0x04, 0x1F, 0x04, 0x1F, 0x04, 0x04, 0x04, 0x00], // 0xB7 katakana ki
    [0x00, 0x0F, 0x09, 0x11, 0x01, 0x02, 0x0C, 0x00], // 0xB8 katakana ku
    [0x08, 0x0F, 0x12, 0x02, 0x02, 0x02, 0x04, 0x00], // 0xB9 katakana ke
    [0x00, 0x1F, 0x01, 0x01, 0x01, 0x01, 0x1F, 0x00], // 0xBA katakana ko
    [0x0A, 0x1F, 0x0A, 0x0A, 0x02, 0x04, 0x08, 0x00], // 0xBB katakana sa
    [0x00, 0x18, 0x01, 0x19, 0x01, 0x02, 0x1C, 0x00], // 0xBC katakana shi
    [0x00, 0x1F, 0x01, 0x02, 0x04, 0x0A, 0x11, 0x00], // 0xBD katakana su
    [0x08, 0x1F, 0x09, 0x0A, 0x08, 0x08, 0x07, 0x00], // 0xBE katakana se
    [0x00, 0x11, 0x11, 0x09, 0x01, 0x02, 0x0C, 0x00], // 0xBF katakana so
    [0x00, 0x0F, 0x09, 0x15, 0x03, 0x02, 0x0C, 0x00], // 0xC0 katakana ta
    [0x02, 0x1C, 0x04, 0x1F, 0x04, 0x04, 0x08, 0x00], // 0xC1 katakana chi
    [0x00, 0x15, 0x15, 0x15, 0x01, 0x02, 0x04, 0x00], // 0xC2 katakana tsu
    [0x0E, 0x00, 0x1F, 0x04, 0x04, 0x04, 0x08, 0x00], // 0xC3 katakana te
    [0x08, 0x08, 0x08, 0x0C, 0x0A, 0x08, 0x08, 0x00], // 0xC4 katakana to
    [0x04, 0x04, 0x1F, 0x04, 0x04, 0x08, 0x10, 0x00], // 0xC5 katakana na
    [0x00, 0x0E, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00], // 0xC6 katakana ni
    [0x00, 0x1F, 0x01, 0x0A, 0x04, 0x0A, 0x10, 0x00], // 0xC7 katakana nu
    [0x04, 0x1F, 0x02, 0x04, 0x0E, 0x15, 0x04, 0x00], // 0xC8 katakana ne
    [0x02, 0x02, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // 0xC9 katakana no
    [0x00, 0x04, 0x02, 0x11, 0x11, 0x11, 0x11, 0x00], // 0xCA katakana ha
    [0x10, 0x10, 0x1F, 0x10, 0x10, 0x10, 0x0F, 0x00], // 0xCB katakana hi
    [0x00, 0x1F, 0x01, 0x01, 0x01, 0x02, 0x0C, 0x00], // 0xCC katakana fu
    [0x00, 0x08, 0x14, 0x02, 0x01, 0x01, 0x00, 0x00], // 0xCD katakana he
    [0x04, 0x1F, 0x04, 0x04, 0x15, 0x15, 0x04, 0x00], // 0xCE katakana ho
    [0x00, 0x1F, 0x01, 0x01, 0x0A, 0x04, 0x02, 0x00], // 0xCF katakana ma
    [0x00, 0x0E, 0x00, 0x0E, 0x00, 0x0E, 0x01, 0x00], // 0xD0 katakana mi
    [0x00, 0x04, 0x08, 0x10, 0x11, 0x1F, 0x01, 0x00], // 0xD1 katakana mu
    [0x00, 0x01, 0x01, 0x0A, 0x04, 0x0A, 0x10, 0x00], // 0xD2 katakana me
    [0x00, 0x1F, 0x08, 0x1F, 0x08, 0x08, 0x07, 0x00], // 0xD3 katakana mo
    [0x08, 0x08, 0x1F, 0x09, 0x0A, 0x08, 0x08, 0x00], // 0xD4 katakana ya
    [0x00, 0x0E, 0x02, 0x02, 0x02, 0x02, 0x1F, 0x00], // 0xD5 katakana yu
    [0x00, 0x1F, 0x01, 0x1F, 0x01, 0x01, 0x1F, 0x00], // 0xD6 katakana yo
    [0x0E, 0x00, 0x1F, 0x01, 0x01, 0x02, 0x04, 0x00], // 0xD7 katakana ra
    [0x12, 0x12, 0x12, 0x12, 0x02, 0x04, 0x08, 0x00], // 0xD8 katakana ri
    [0x00, 0x04, 0x14, 0x14, 0x15, 0x15, 0x16, 0x00], // 0xD9 katakana ru
    [0x00, 0x10, 0x10, 0x11, 0x12, 0x14, 0x18, 0x00], // 0xDA katakana re
    [0x00, 0x1F, 0x11, 0x11, 0x11, 0x11, 0x1F, 0x00], // 0xDB katakana ro
    [0x00, 0x1F, 0x11, 0x11, 0x01, 0x02, 0x04, 0x00], // 0xDC katakana wa
    [0x00, 0x18, 0x00, 0x01, 0x01, 0x02, 0x1C, 0x00], // 0xDD katakana n
    [0x04, 0x12, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDE voiced sound mark
    [0x1C, 0x14, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDF degree
    [0x00, 0x00, 0x0D, 0x12, 0x12, 0x12, 0x0D, 0x00], // 0xE0 alpha
    [0x0A, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE1 a umlaut
    [0x0E, 0x11, 0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10], // 0xE2 beta
    [0x00, 0x00, 0x0E, 0x10, 0x0C, 0x10, 0x0E, 0x00], // 0xE3 epsilon
    [0x00, 0x00, 0x11, 0x11, 0x13, 0x1D, 0x10, 0x10], // 0xE4 mu
    [0x00, 0x00, 0x0F, 0x14, 0x11, 0x11, 0x0E, 0x00], // 0xE5 sigma
    [0x00, 0x00, 0x06, 0x09, 0x11, 0x11, 0x1E, 0x10], // 0xE6 rho
    [0x00, 0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // 0xE7 g with descender
    [0x00, 0x07, 0x04, 0x04, 0x14, 0x0C, 0x04, 0x00], // 0xE8 square root
    [0x00, 0x02, 0x1A, 0x02, 0x00, 0x00, 0x00, 0x00], // 0xE9 superscript minus one
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x02, 0x12, 0x0C], // 0xEA j with descender
    [0x00, 0x14, 0x08, 0x14, 0x00, 0x00, 0x00, 0x00], // 0xEB superscript x
    [0x00, 0x04, 0x0F, 0x14, 0x14, 0x0F, 0x04, 0x00], // 0xEC cent
    [0x00, 0x08, 0x1C, 0x08, 0x1C, 0x08, 0x0F, 0x00], // 0xED l with double bar
    [0x0E, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0xEE n tilde
    [0x0A, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xEF o umlaut
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x1E, 0x10, 0x10], // 0xF0 p with descender
    [0x00, 0x00, 0x0D, 0x13, 0x11, 0x0F, 0x01, 0x01], // 0xF1 q with descender
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x0E, 0x00], // 0xF2 theta
    [0x00, 0x00, 0x00, 0x0A, 0x15, 0x0A, 0x00, 0x00], // 0xF3 infinity
    [0x00, 0x0E, 0x11, 0x11, 0x11, 0x0A, 0x1B, 0x00], // 0xF4 omega
    [0x0A, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0xF5 u umlaut
    [0x1F, 0x10, 0x08, 0x04, 0x08, 0x10, 0x1F, 0x00], // 0xF6 capital sigma
    [0x00, 0x00, 0x1F, 0x0A, 0x0A, 0x0A, 0x11, 0x00], // 0xF7 pi
    [0x1F, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00], // 0xF8 x bar
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0F, 0x01, 0x0E], // 0xF9 y with descender
    [0x01, 0x0E, 0x04, 0x1F, 0x04, 0x04, 0x04, 0x00], // 0xFA thousand
    [0x00, 0x1F, 0x08, 0x0F, 0x09, 0x11, 0x13, 0x00], // 0xFB ten thousand
    [0x00, 0x1F, 0x15, 0x1F, 0x11, 0x11, 0x11, 0x00], // 0xFC yen kanji
    [0x00, 0x04, 0x00, 0x1F, 0x00, 0x04, 0x00, 0x00], // 0xFD division
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFE
    [0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // 0xFF full block
];

/// A02 (European) character ROM.
pub static ROM_A02: RomTable = [
    [0x10, 0x18, 0x1C, 0x1E, 0x1C, 0x18, 0x10, 0x00], // 0x10 right triangle
    [0x01, 0x03, 0x07, 0x0F, 0x07, 0x03, 0x01, 0x00], // 0x11 left triangle
    [0x09, 0x12, 0x1B, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12 left double quote
    [0x1B, 0x09, 0x12, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13 right double quote
    [0x04, 0x0E, 0x1F, 0x00, 0x04, 0x0E, 0x1F, 0x00], // 0x14 double up arrow
    [0x1F, 0x0E, 0x04, 0x00, 0x1F, 0x0E, 0x04, 0x00], // 0x15 double down arrow
    [0x00, 0x0E, 0x1F, 0x1F, 0x1F, 0x0E, 0x00, 0x00], // 0x16 bullet
    [0x01, 0x01, 0x05, 0x09, 0x1F, 0x08, 0x04, 0x00], // 0x17 return
    [0x04, 0x0E, 0x15, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x18 up arrow
    [0x04, 0x04, 0x04, 0x04, 0x15, 0x0E, 0x04, 0x00], // 0x19 down arrow
    [0x00, 0x04, 0x02, 0x1F, 0x02, 0x04, 0x00, 0x00], // 0x1A right arrow
    [0x00, 0x04, 0x08, 0x1F, 0x08, 0x04, 0x00, 0x00], // 0x1B left arrow
    [0x02, 0x04, 0x08, 0x04, 0x02, 0x00, 0x1F, 0x00], // 0x1C less or equal
    [0x08, 0x04, 0x02, 0x04, 0x08, 0x00, 0x1F, 0x00], // 0x1D greater or equal
    [0x00, 0x04, 0x04, 0x0E, 0x0E, 0x1F, 0x00, 0x00], // 0x1E up triangle
    [0x00, 0x1F, 0x0E, 0x0E, 0x04, 0x04, 0x00, 0x00], // 0x1F down triangle
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 space
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // 0x21 '!'
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x22 '"'
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A, 0x00], // 0x23 '#'
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04, 0x00], // 0x24 '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03, 0x00], // 0x25 '%'
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D, 0x00], // 0x26 '&'
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27 '\''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00], // 0x28 '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // 0x29 ')'
    [0x00, 0x0A, 0x04, 0x1F, 0x04, 0x0A, 0x00, 0x00], // 0x2A '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00], // 0x2B '+'
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08, 0x00], // 0x2C ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00], // 0x2D '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // 0x2E '.'
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // 0x2F '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00], // 0x30 '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x31 '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F, 0x00], // 0x32 '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E, 0x00], // 0x33 '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02, 0x00], // 0x34 '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E, 0x00], // 0x35 '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E, 0x00], // 0x36 '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00], // 0x37 '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0x38 '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C, 0x00], // 0x39 '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00, 0x00], // 0x3A ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08, 0x00], // 0x3B ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, 0x00], // 0x3C '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x00], // 0x3D '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08, 0x00], // 0x3E '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04, 0x00], // 0x3F '?'
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E, 0x00], // 0x40 '@'
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0x41 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E, 0x00], // 0x42 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E, 0x00], // 0x43 'C'
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C, 0x00], // 0x44 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F, 0x00], // 0x45 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10, 0x00], // 0x46 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F, 0x00], // 0x47 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00], // 0x48 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x49 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C, 0x00], // 0x4A 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, 0x00], // 0x4B 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0x00], // 0x4C 'L'
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11, 0x00], // 0x4D 'M'
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x00], // 0x4E 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x4F 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10, 0x00], // 0x50 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D, 0x00], // 0x51 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11, 0x00], // 0x52 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E, 0x00], // 0x53 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x54 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x55 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 0x56 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A, 0x00], // 0x57 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11, 0x00], // 0x58 'X'
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x00], // 0x59 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F, 0x00], // 0x5A 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // 0x5B '['
    [0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // 0x5C '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E, 0x00], // 0x5D ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x5E '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00], // 0x5F '_'
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x60 '`'
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0x61 'a'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E, 0x00], // 0x62 'b'
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E, 0x00], // 0x63 'c'
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F, 0x00], // 0x64 'd'
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0x65 'e'
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08, 0x00], // 0x66 'f'
    [0x00, 0x00, 0x0F, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0x67 'g'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0x68 'h'
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x69 'i'
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C, 0x00], // 0x6A 'j'
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12, 0x00], // 0x6B 'k'
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x6C 'l'
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11, 0x00], // 0x6D 'm'
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0x6E 'n'
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x6F 'o'
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10, 0x00], // 0x70 'p'
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01, 0x00], // 0x71 'q'
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00], // 0x72 'r'
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E, 0x00], // 0x73 's'
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06, 0x00], // 0x74 't'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0x75 'u'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 0x76 'v'
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A, 0x00], // 0x77 'w'
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00], // 0x78 'x'
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0x79 'y'
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F, 0x00], // 0x7A 'z'
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, 0x00], // 0x7B '{'
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x7C '|'
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, 0x00], // 0x7D '}'
    [0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00, 0x00], // 0x7E '~'
    [0x04, 0x0A, 0x11, 0x11, 0x11, 0x1F, 0x00, 0x00], // 0x7F house
    [0x1F, 0x10, 0x10, 0x1E, 0x11, 0x11, 0x1E, 0x00], // 0x80 cyrillic be
    [0x0F, 0x05, 0x05, 0x09, 0x11, 0x1F, 0x11, 0x00], // 0x81 cyrillic de
    [0x15, 0x15, 0x15, 0x0E, 0x15, 0x15, 0x15, 0x00], // 0x82 cyrillic zhe
    [0x1E, 0x01, 0x01, 0x06, 0x01, 0x01, 0x1E, 0x00], // 0x83 cyrillic ze
    [0x11, 0x11, 0x13, 0x15, 0x19, 0x11, 0x11, 0x00], // 0x84 cyrillic i
    [0x0A, 0x04, 0x11, 0x13, 0x15, 0x19, 0x11, 0x00], // 0x85 cyrillic short i
    [0x0F, 0x05, 0x05, 0x05, 0x05, 0x15, 0x09, 0x00], // 0x86 cyrillic el
    [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x00], // 0x87 cyrillic pe
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x08, 0x10, 0x00], // 0x88 cyrillic u
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x1F, 0x01, 0x00], // 0x89 cyrillic tse
    [0x11, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x01, 0x00], // 0x8A cyrillic che
    [0x00, 0x15, 0x15, 0x15, 0x15, 0x15, 0x1F, 0x00], // 0x8B cyrillic sha
    [0x15, 0x15, 0x15, 0x15, 0x15, 0x1F, 0x01, 0x00], // 0x8C cyrillic shcha
    [0x18, 0x08, 0x08, 0x0E, 0x09, 0x09, 0x0E, 0x00], // 0x8D cyrillic hard sign
    [0x11, 0x11, 0x11, 0x19, 0x15, 0x15, 0x19, 0x00], // 0x8E cyrillic yeru
    [0x0E, 0x11, 0x05, 0x0B, 0x01, 0x11, 0x0E, 0x00], // 0x8F cyrillic e
    [0x00, 0x00, 0x09, 0x15, 0x12, 0x12, 0x0D, 0x00], // 0x90 alpha
    [0x04, 0x06, 0x05, 0x05, 0x04, 0x1C, 0x1C, 0x00], // 0x91 eighth note
    [0x1F, 0x11, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 0x92 capital gamma
    [0x00, 0x00, 0x1F, 0x0A, 0x0A, 0x0A, 0x13, 0x00], // 0x93 pi
    [0x1F, 0x10, 0x08, 0x04, 0x08, 0x10, 0x1F, 0x00], // 0x94 capital sigma
    [0x00, 0x00, 0x0F, 0x12, 0x12, 0x12, 0x0C, 0x00], // 0x95 sigma
    [0x06, 0x05, 0x07, 0x05, 0x1D, 0x1B, 0x03, 0x00], // 0x96 beamed notes
    [0x00, 0x01, 0x0E, 0x14, 0x04, 0x04, 0x02, 0x00], // 0x97 tau
    [0x04, 0x0E, 0x0E, 0x0E, 0x1F, 0x04, 0x00, 0x00], // 0x98 bell
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x0E, 0x00], // 0x99 capital theta
    [0x00, 0x0E, 0x11, 0x11, 0x11, 0x0A, 0x1B, 0x00], // 0x9A capital omega
    [0x06, 0x09, 0x04, 0x0A, 0x11, 0x11, 0x0E, 0x00], // 0x9B delta
    [0x00, 0x00, 0x0B, 0x15, 0x1A, 0x00, 0x00, 0x00], // 0x9C infinity
    [0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00], // 0x9D heart
    [0x00, 0x00, 0x0E, 0x10, 0x0C, 0x10, 0x0E, 0x00], // 0x9E epsilon
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x00], // 0x9F intersection
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xA0
    [0x04, 0x00, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0xA1 inverted exclamation
    [0x04, 0x0E, 0x14, 0x14, 0x15, 0x0E, 0x04, 0x00], // 0xA2 cent
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x09, 0x16, 0x00], // 0xA3 pound sign
    [0x00, 0x11, 0x0E, 0x0A, 0x0E, 0x11, 0x00, 0x00], // 0xA4 currency
    [0x11, 0x0A, 0x1F, 0x04, 0x1F, 0x04, 0x04, 0x00], // 0xA5 yen
    [0x04, 0x04, 0x04, 0x00, 0x04, 0x04, 0x04, 0x00], // 0xA6 broken bar
    [0x06, 0x09, 0x04, 0x0A, 0x04, 0x12, 0x0C, 0x00], // 0xA7 section
    [0x02, 0x05, 0x04, 0x1F, 0x04, 0x14, 0x08, 0x00], // 0xA8 florin
    [0x0E, 0x11, 0x1F, 0x19, 0x1F, 0x11, 0x0E, 0x00], // 0xA9 copyright
    [0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00, 0x1F, 0x00], // 0xAA feminine ordinal
    [0x00, 0x05, 0x0A, 0x14, 0x0A, 0x05, 0x00, 0x00], // 0xAB left guillemet
    [0x12, 0x15, 0x15, 0x1D, 0x15, 0x15, 0x12, 0x00], // 0xAC cyrillic yu
    [0x0F, 0x11, 0x11, 0x0F, 0x05, 0x09, 0x11, 0x00], // 0xAD cyrillic ya
    [0x0E, 0x11, 0x1D, 0x1B, 0x1D, 0x1B, 0x11, 0x0E], // 0xAE registered
    [0x04, 0x08, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xAF left single quote
    [0x1C, 0x14, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xB0 degree
    [0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x1F, 0x00], // 0xB1 plus-minus
    [0x0C, 0x02, 0x04, 0x08, 0x0E, 0x00, 0x00, 0x00], // 0xB2 superscript two
    [0x0C, 0x02, 0x0C, 0x02, 0x0C, 0x00, 0x00, 0x00], // 0xB3 superscript three
    [0x1C, 0x12, 0x1C, 0x10, 0x17, 0x12, 0x13, 0x00], // 0xB4 peseta
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x1D, 0x10], // 0xB5 micro
    [0x0F, 0x1D, 0x1D, 0x0D, 0x05, 0x05, 0x05, 0x00], // 0xB6 pilcrow
    [0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00], // 0xB7 middle dot
    [0x00, 0x00, 0x00, 0x0A, 0x11, 0x15, 0x0A, 0x00], // 0xB8 omega
    [0x04, 0x0C, 0x04, 0x04, 0x0E, 0x00, 0x00, 0x00], // 0xB9 superscript one
    [0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00, 0x1F, 0x00], // 0xBA masculine ordinal
    [0x00, 0x14, 0x0A, 0x05, 0x0A, 0x14, 0x00, 0x00], // 0xBB right guillemet
    [0x10, 0x12, 0x14, 0x09, 0x13, 0x07, 0x01, 0x00], // 0xBC one quarter
    [0x10, 0x12, 0x14, 0x0E, 0x11, 0x02, 0x07, 0x00], // 0xBD one half
    [0x18, 0x09, 0x1A, 0x0D, 0x13, 0x07, 0x01, 0x00], // 0xBE three quarters
    [0x04, 0x00, 0x04, 0x08, 0x10, 0x11, 0x0E, 0x00], // 0xBF inverted question
    [0x08, 0x04, 0x0E, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0xC0 A grave
    [0x02, 0x04, 0x0E, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0xC1 A acute
    [0x04, 0x0A, 0x0E, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0xC2 A circumflex
    [0x0D, 0x12, 0x0E, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0xC3 A tilde
    [0x11, 0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0xC4 A umlaut
    [0x04, 0x0A, 0x04, 0x0E, 0x11, 0x1F, 0x11, 0x00], // 0xC5 A ring
    [0x0F, 0x14, 0x14, 0x1F, 0x14, 0x14, 0x17, 0x00], // 0xC6 AE
    [0x0E, 0x11, 0x10, 0x11, 0x0E, 0x04, 0x0C, 0x00], // 0xC7 C cedilla
    [0x08, 0x04, 0x1F, 0x10, 0x1E, 0x10, 0x1F, 0x00], // 0xC8 E grave
    [0x02, 0x04, 0x1F, 0x10, 0x1E, 0x10, 0x1F, 0x00], // 0xC9 E acute
    [0x04, 0x0A, 0x1F, 0x10, 0x1E, 0x10, 0x1F, 0x00], // 0xCA E circumflex
    [0x0A, 0x00, 0x1F, 0x10, 0x1E, 0x10, 0x1F, 0x00], // 0xCB E diaeresis
    [0x08, 0x04, 0x0E, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0xCC I grave
    [0x02, 0x04, 0x0E, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0xCD I acute
    [0x04, 0x0A, 0x0E, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0xCE I circumflex
    [0x0A, 0x00, 0x0E, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0xCF I diaeresis
    [0x0E, 0x09, 0x09, 0x1D, 0x09, 0x09, 0x0E, 0x00], // 0xD0 Eth
    [0x0D, 0x12, 0x11, 0x19, 0x15, 0x13, 0x11, 0x00], // 0xD1 N tilde
    [0x08, 0x04, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xD2 O grave
    [0x02, 0x04, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xD3 O acute
    [0x04, 0x0A, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xD4 O circumflex
    [0x0D, 0x12, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xD5 O tilde
    [0x11, 0x0E, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xD6 O umlaut
    [0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00, 0x00], // 0xD7 multiplication
    [0x0E, 0x13, 0x13, 0x15, 0x19, 0x19, 0x0E, 0x00], // 0xD8 O stroke
    [0x08, 0x04, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xD9 U grave
    [0x02, 0x04, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xDA U acute
    [0x04, 0x0A, 0x00, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xDB U circumflex
    [0x11, 0x00, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xDC U umlaut
    [0x02, 0x04, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x00], // 0xDD Y acute
    [0x10, 0x10, 0x1E, 0x11, 0x1E, 0x10, 0x10, 0x00], // 0xDE Thorn
    [0x0C, 0x12, 0x12, 0x16, 0x11, 0x11, 0x16, 0x00], // 0xDF sharp s
    [0x08, 0x04, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE0 a grave
    [0x02, 0x04, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE1 a acute
    [0x04, 0x0A, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE2 a circumflex
    [0x0D, 0x12, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE3 a tilde
    [0x0A, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE4 a umlaut
    [0x04, 0x0A, 0x04, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // 0xE5 a ring
    [0x00, 0x00, 0x1A, 0x05, 0x1F, 0x14, 0x0F, 0x00], // 0xE6 ae
    [0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E, 0x04, 0x0C], // 0xE7 c cedilla
    [0x08, 0x04, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0xE8 e grave
    [0x02, 0x04, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0xE9 e acute
    [0x04, 0x0A, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0xEA e circumflex
    [0x0A, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0xEB e diaeresis
    [0x08, 0x04, 0x00, 0x0C, 0x04, 0x04, 0x0E, 0x00], // 0xEC i grave
    [0x02, 0x04, 0x00, 0x0C, 0x04, 0x04, 0x0E, 0x00], // 0xED i acute
    [0x04, 0x0A, 0x00, 0x0C, 0x04, 0x04, 0x0E, 0x00], // 0xEE i circumflex
    [0x0A, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0xEF i diaeresis
    [0x0A, 0x04, 0x0A, 0x01, 0x0F, 0x11, 0x0E, 0x00], // 0xF0 eth
    [0x0E, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0xF1 n tilde
    [0x08, 0x04, 0x00, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0xF2 o grave
    [0x02, 0x04, 0x00, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0xF3 o acute
    [0x04, 0x0A, 0x00, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0xF4 o circumflex
    [0x0D, 0x12, 0x00, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0xF5 o tilde
    [0x0A, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xF6 o umlaut
    [0x00, 0x04, 0x00, 0x1F, 0x00, 0x04, 0x00, 0x00], // 0xF7 division
    [0x00, 0x00, 0x0E, 0x13, 0x15, 0x19, 0x0E, 0x00], // 0xF8 o stroke
    [0x08, 0x04, 0x00, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0xF9 u grave
    [0x02, 0x04, 0x00, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0xFA u acute
    [0x04, 0x0A, 0x00, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0xFB u circumflex
    [0x0A, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0xFC u umlaut
    [0x02, 0x04, 0x11, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0xFD y acute
    [0x00, 0x10, 0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10], // 0xFE thorn
    [0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // 0xFF full block
];
