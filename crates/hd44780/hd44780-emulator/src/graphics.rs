//! Graphics RAM for the bitmap mode of extended-instruction parts
//!
//! One line per text row, `columns × 5` bytes per line. Each byte is a
//! vertical strip of 8 dots with bit 0 at the top.

use crate::address::Direction;
use crate::glyph_store::GLYPH_WIDTH;

/// Bitmap memory plus its column/line address registers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsRam {
    width: u8,
    lines: u8,
    data: Vec<u8>,
    column: u8,
    line: u8,
}

impl GraphicsRam {
    /// Zeroed bitmap for a display of `columns` × `rows` characters
    pub fn new(columns: u8, rows: u8) -> Self {
        let width = columns.saturating_mul(GLYPH_WIDTH).max(1);
        let lines = rows.max(1);
        Self {
            width,
            lines,
            data: vec![0; usize::from(width).saturating_mul(usize::from(lines))],
            column: 0,
            line: 0,
        }
    }

    /// Bytes (dot columns) per line
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Number of lines
    pub const fn lines(&self) -> u8 {
        self.lines
    }

    /// Current column register
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// Current line register
    pub const fn line(&self) -> u8 {
        self.line
    }

    /// Raw bitmap, line-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Load the column register, wrapping at the line width
    ///
    /// SET_DRAM_ADDR carries 7 bits, so on lines wider than 128 bytes
    /// (displays over 25 columns) the columns from 128 up are reached only
    /// by auto-increment or cursor shift from a lower column.
    pub fn set_column(&mut self, column: u8) {
        self.column = column.checked_rem(self.width).unwrap_or(0);
    }

    /// Load the line register, wrapping at the line count
    pub fn set_line(&mut self, line: u8) {
        self.line = line.checked_rem(self.lines).unwrap_or(0);
    }

    /// Step the column register, wrapping inside the current line
    pub fn advance(&mut self, direction: Direction) {
        let next = i16::from(self.column).wrapping_add(i16::from(direction.step()));
        let wrapped = next.checked_rem_euclid(i16::from(self.width)).unwrap_or(0);
        self.column = u8::try_from(wrapped).unwrap_or(0);
    }

    /// Store a byte at the current line/column
    pub fn write(&mut self, value: u8) {
        let index = self.index(self.line, self.column);
        if let Some(byte) = self.data.get_mut(index) {
            *byte = value;
        }
    }

    /// Byte at the current line/column
    pub fn read(&self) -> u8 {
        self.byte_at(self.line, self.column)
    }

    /// Byte at an arbitrary line/column, 0 when out of range
    pub fn byte_at(&self, line: u8, column: u8) -> u8 {
        if line >= self.lines || column >= self.width {
            return 0;
        }
        self.data.get(self.index(line, column)).copied().unwrap_or(0)
    }

    /// Zero the bitmap and both registers
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.column = 0;
        self.line = 0;
    }

    fn index(&self, line: u8, column: u8) -> usize {
        usize::from(line)
            .saturating_mul(usize::from(self.width))
            .saturating_add(usize::from(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        let gram = GraphicsRam::new(16, 2);
        assert_eq!(gram.width(), 80);
        assert_eq!(gram.lines(), 2);
        assert_eq!(gram.data().len(), 160);
    }

    #[test]
    fn test_registers_wrap() {
        let mut gram = GraphicsRam::new(16, 2);
        gram.set_column(85);
        assert_eq!(gram.column(), 5);
        gram.set_line(3);
        assert_eq!(gram.line(), 1);
    }

    #[test]
    fn test_advance_wraps_in_line() {
        let mut gram = GraphicsRam::new(8, 1);
        gram.set_column(39);
        gram.advance(Direction::Right);
        assert_eq!(gram.column(), 0);
        gram.advance(Direction::Left);
        assert_eq!(gram.column(), 39);
    }

    #[test]
    fn test_high_columns_reached_by_advance() {
        let mut gram = GraphicsRam::new(40, 2);
        assert_eq!(gram.width(), 200);
        // 7-bit address register tops out at 127.
        gram.set_column(0x7F);
        assert_eq!(gram.column(), 127);
        for _ in 0..72 {
            gram.advance(Direction::Right);
        }
        assert_eq!(gram.column(), 199);
        gram.write(0x81);
        assert_eq!(gram.byte_at(0, 199), 0x81);
        gram.advance(Direction::Right);
        assert_eq!(gram.column(), 0);
    }

    #[test]
    fn test_write_read() {
        let mut gram = GraphicsRam::new(16, 2);
        gram.set_line(1);
        gram.set_column(7);
        gram.write(0xA5);
        assert_eq!(gram.read(), 0xA5);
        assert_eq!(gram.byte_at(1, 7), 0xA5);
        assert_eq!(gram.byte_at(0, 7), 0);
        assert_eq!(gram.byte_at(2, 7), 0);

        gram.clear();
        assert_eq!(gram.byte_at(1, 7), 0);
        assert_eq!(gram.line(), 0);
    }
}
