//! Memory & address unit
//!
//! DDRAM, the address counter and the display shift register. DDRAM is kept
//! as a flat 128-byte array indexed by the 7-bit address, but every address
//! computation goes through a [`Segment`]: the controller's address counter
//! wraps inside the segment it is in and never walks into the other one.

/// Bytes of DDRAM address space (7-bit counter)
pub const DDRAM_SIZE: usize = 128;

/// Character code written by CLEAR
pub const BLANK: u8 = 0x20;

/// Mask for DDRAM addresses
pub const DDRAM_ADDR_BITS: u8 = 0x7F;

/// Mask for CGRAM addresses
pub const CGRAM_ADDR_BITS: u8 = 0x3F;

/// Address bit that selects the second segment in two-line layout
const SECOND_SEGMENT_BIT: u8 = 0x40;

/// Which RAM the address counter points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Display data RAM
    #[default]
    Ddram,
    /// Character generator RAM
    Cgram,
}

/// Movement direction for the address counter and display window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward lower addresses
    Left,
    /// Toward higher addresses
    Right,
}

impl Direction {
    /// Address delta for one step in this direction
    pub const fn step(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A contiguous block of DDRAM addresses backing one or more display rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// First address of the segment
    pub start: u8,
    /// Number of addresses in the segment
    pub len: u8,
}

impl Segment {
    /// Fold an arbitrary position (relative to `start`) into the segment
    pub fn at(self, position: i32) -> u8 {
        let offset = position
            .checked_rem_euclid(i32::from(self.len))
            .unwrap_or(0);
        // rem_euclid result lies in 0..len, and start + len <= DDRAM_SIZE.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = offset as u8;
        self.start.wrapping_add(offset)
    }

    /// Fold a raw address into the segment
    ///
    /// Addresses past the segment end (e.g. 0x30 in two-line layout) land
    /// back inside it.
    pub fn fold(self, address: u8) -> u8 {
        self.at(i32::from(address.wrapping_sub(self.start)))
    }

    /// Whether `address` lies inside the segment without folding
    pub const fn contains(self, address: u8) -> bool {
        address >= self.start && address.wrapping_sub(self.start) < self.len
    }

    /// Position of an in-segment address relative to `start`
    fn position(self, address: u8) -> i32 {
        i32::from(self.fold(address).wrapping_sub(self.start))
    }
}

/// DDRAM organisation selected by the line count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DdramLayout {
    /// A single 80-byte segment, 0x00-0x4F
    #[default]
    OneLine,
    /// Two 40-byte segments, 0x00-0x27 and 0x40-0x67
    TwoLine,
}

impl DdramLayout {
    const ONE_LINE: Segment = Segment { start: 0x00, len: 80 };
    const LINE_1: Segment = Segment { start: 0x00, len: 40 };
    const LINE_2: Segment = Segment { start: 0x40, len: 40 };

    /// Segment at `index` (0 or 1); one-line layout has only segment 0
    pub const fn segment(self, index: u8) -> Segment {
        match (self, index & 1) {
            (DdramLayout::OneLine, _) => Self::ONE_LINE,
            (DdramLayout::TwoLine, 0) => Self::LINE_1,
            (DdramLayout::TwoLine, _) => Self::LINE_2,
        }
    }

    /// Segment an address belongs to
    pub const fn segment_of(self, address: u8) -> Segment {
        match self {
            DdramLayout::OneLine => Self::ONE_LINE,
            DdramLayout::TwoLine if address & SECOND_SEGMENT_BIT != 0 => Self::LINE_2,
            DdramLayout::TwoLine => Self::LINE_1,
        }
    }
}

/// DDRAM plus the address counter and display shift register
#[derive(Debug, Clone)]
pub struct AddressUnit {
    columns: u8,
    rows: u8,
    ddram: [u8; DDRAM_SIZE],
    address: u8,
    mode: AddressMode,
    layout: DdramLayout,
    display_shift: i32,
}

impl AddressUnit {
    /// Blank DDRAM for a display of the given geometry
    ///
    /// Displays with more than one row use the two-line layout from the
    /// start; a single-row display starts in one-line layout.
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            ddram: [BLANK; DDRAM_SIZE],
            address: 0,
            mode: AddressMode::Ddram,
            layout: if rows > 1 {
                DdramLayout::TwoLine
            } else {
                DdramLayout::OneLine
            },
            display_shift: 0,
        }
    }

    /// Current DDRAM layout
    pub const fn layout(&self) -> DdramLayout {
        self.layout
    }

    /// Select the two-line layout, or one-line on single-row displays
    ///
    /// Multi-row displays are wired for two segments and stay there.
    pub fn set_two_line(&mut self, two_line: bool) {
        self.layout = if two_line || self.rows > 1 {
            DdramLayout::TwoLine
        } else {
            DdramLayout::OneLine
        };
    }

    /// Raw address counter, as last loaded or advanced
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// RAM the address counter points into
    pub const fn mode(&self) -> AddressMode {
        self.mode
    }

    /// Accumulated display shift (positive = text moved left)
    pub const fn display_shift(&self) -> i32 {
        self.display_shift
    }

    /// Raw DDRAM contents, indexed by address
    pub const fn ddram(&self) -> &[u8; DDRAM_SIZE] {
        &self.ddram
    }

    /// The DDRAM address the counter actually selects
    pub fn ddram_address(&self) -> u8 {
        self.layout.segment_of(self.address).fold(self.address)
    }

    /// Load the address counter and select its RAM
    pub fn set_address(&mut self, mode: AddressMode, address: u8) {
        self.mode = mode;
        self.address = match mode {
            AddressMode::Ddram => address & DDRAM_ADDR_BITS,
            AddressMode::Cgram => address & CGRAM_ADDR_BITS,
        };
    }

    /// Step the address counter once
    ///
    /// DDRAM wraps inside the current segment; CGRAM wraps at 64.
    pub fn advance(&mut self, direction: Direction) {
        self.address = match self.mode {
            AddressMode::Ddram => {
                let segment = self.layout.segment_of(self.address);
                let position = segment.position(self.address);
                segment.at(position.wrapping_add(i32::from(direction.step())))
            }
            AddressMode::Cgram => {
                self.address.wrapping_add_signed(direction.step()) & CGRAM_ADDR_BITS
            }
        };
    }

    /// Move the cursor without touching memory
    pub fn shift_cursor(&mut self, direction: Direction) {
        self.advance(direction);
    }

    /// Move the visible window over DDRAM
    ///
    /// A left shift moves the text left, i.e. the window one address right.
    pub fn shift_display(&mut self, direction: Direction) {
        self.display_shift = self
            .display_shift
            .wrapping_sub(i32::from(direction.step()));
    }

    /// Address counter to 0 in DDRAM, shift undone
    pub fn home(&mut self) {
        self.address = 0;
        self.mode = AddressMode::Ddram;
        self.display_shift = 0;
    }

    /// Blank all of DDRAM and home
    pub fn clear(&mut self) {
        self.ddram.fill(BLANK);
        self.home();
    }

    /// Byte at the selected DDRAM address
    pub fn read_ddram(&self) -> u8 {
        self.ddram
            .get(usize::from(self.ddram_address()))
            .copied()
            .unwrap_or(BLANK)
    }

    /// Store a byte at the selected DDRAM address
    pub fn write_ddram(&mut self, value: u8) {
        let index = usize::from(self.ddram_address());
        if let Some(cell) = self.ddram.get_mut(index) {
            *cell = value;
        }
    }

    /// DDRAM address shown at screen cell (`row`, `col`)
    ///
    /// Row and column are clamped to the display. Row 2 and 3 of a four-row
    /// display continue rows 0 and 1 `columns` bytes into their segment. The
    /// current display shift is applied with the same segment-local wrap as
    /// the address counter.
    pub fn data_offset(&self, row: u8, col: u8) -> u8 {
        let row = row.min(self.rows.saturating_sub(1));
        let col = col.min(self.columns.saturating_sub(1));
        let segment = self.layout.segment(row);
        let base = if row >= 2 { self.columns } else { 0 };
        let position = i32::from(base)
            .wrapping_add(i32::from(col))
            .wrapping_add(self.display_shift);
        segment.at(position)
    }

    /// Screen cell currently showing DDRAM `address`, if any
    pub fn cell_of(&self, address: u8) -> Option<(u8, u8)> {
        (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| (row, col)))
            .find(|&(row, col)| self.data_offset(row, col) == address)
    }

    /// Row-major list of addresses the display shows
    pub fn visible_row(&self, row: u8) -> impl Iterator<Item = u8> + '_ {
        (0..self.columns).map(move |col| self.data_offset(row, col))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn test_two_line_segments() {
        let layout = DdramLayout::TwoLine;
        assert_eq!(layout.segment_of(0x00), Segment { start: 0, len: 40 });
        assert_eq!(layout.segment_of(0x27), Segment { start: 0, len: 40 });
        assert_eq!(layout.segment_of(0x40), Segment { start: 0x40, len: 40 });
        assert_eq!(layout.segment_of(0x7F), Segment { start: 0x40, len: 40 });
    }

    #[test]
    fn test_fold_out_of_segment_address() {
        let segment = DdramLayout::TwoLine.segment_of(0x30);
        assert_eq!(segment.fold(0x30), 0x08);
        let segment = DdramLayout::TwoLine.segment_of(0x70);
        assert_eq!(segment.fold(0x70), 0x48);
        assert!(!segment.contains(0x70));
        assert!(segment.contains(0x67));
    }

    #[test]
    fn test_increment_wraps_inside_segment() {
        let mut unit = AddressUnit::new(40, 2);
        unit.set_address(AddressMode::Ddram, 0x27);
        unit.advance(Direction::Right);
        assert_eq!(unit.address(), 0x00);

        unit.set_address(AddressMode::Ddram, 0x67);
        unit.advance(Direction::Right);
        assert_eq!(unit.address(), 0x40);
    }

    #[test]
    fn test_decrement_wraps_inside_segment() {
        let mut unit = AddressUnit::new(16, 2);
        unit.advance(Direction::Left);
        assert_eq!(unit.address(), 0x27);

        unit.set_address(AddressMode::Ddram, 0x40);
        unit.advance(Direction::Left);
        assert_eq!(unit.address(), 0x67);
    }

    #[test]
    fn test_one_line_layout_is_eighty_bytes() {
        let mut unit = AddressUnit::new(16, 1);
        assert_eq!(unit.layout(), DdramLayout::OneLine);
        unit.set_address(AddressMode::Ddram, 0x4F);
        unit.advance(Direction::Right);
        assert_eq!(unit.address(), 0x00);

        unit.set_two_line(true);
        assert_eq!(unit.layout(), DdramLayout::TwoLine);
        unit.set_two_line(false);
        assert_eq!(unit.layout(), DdramLayout::OneLine);
    }

    #[test]
    fn test_multi_row_stays_two_line() {
        let mut unit = AddressUnit::new(20, 4);
        unit.set_two_line(false);
        assert_eq!(unit.layout(), DdramLayout::TwoLine);
    }

    #[test]
    fn test_cgram_wraps_at_64() {
        let mut unit = AddressUnit::new(16, 2);
        unit.set_address(AddressMode::Cgram, 0x3F);
        unit.advance(Direction::Right);
        assert_eq!(unit.address(), 0);
        unit.advance(Direction::Left);
        assert_eq!(unit.address(), 0x3F);
    }

    #[test]
    fn test_set_address_masks() {
        let mut unit = AddressUnit::new(16, 2);
        unit.set_address(AddressMode::Cgram, 0xFF);
        assert_eq!(unit.address(), 0x3F);
        unit.set_address(AddressMode::Ddram, 0xFF);
        assert_eq!(unit.address(), 0x7F);
    }

    #[test]
    fn test_data_offset_four_rows() {
        let unit = AddressUnit::new(20, 4);
        assert_eq!(unit.data_offset(0, 0), 0x00);
        assert_eq!(unit.data_offset(1, 0), 0x40);
        assert_eq!(unit.data_offset(2, 0), 0x14);
        assert_eq!(unit.data_offset(3, 0), 0x54);
        assert_eq!(unit.data_offset(3, 19), 0x67);
    }

    #[test]
    fn test_data_offset_clamps() {
        let unit = AddressUnit::new(16, 2);
        assert_eq!(unit.data_offset(9, 99), 0x4F);
    }

    #[test]
    fn test_data_offset_follows_display_shift() {
        let mut unit = AddressUnit::new(16, 2);
        unit.shift_display(Direction::Left);
        assert_eq!(unit.display_shift(), 1);
        assert_eq!(unit.data_offset(0, 0), 0x01);

        unit.shift_display(Direction::Right);
        unit.shift_display(Direction::Right);
        assert_eq!(unit.display_shift(), -1);
        assert_eq!(unit.data_offset(0, 0), 0x27);
        assert_eq!(unit.data_offset(1, 0), 0x67);
    }

    #[test]
    fn test_write_and_read_through_folded_address() {
        let mut unit = AddressUnit::new(16, 2);
        unit.set_address(AddressMode::Ddram, 0x30);
        unit.write_ddram(b'X');
        assert_eq!(unit.ddram()[0x08], b'X');
        assert_eq!(unit.read_ddram(), b'X');
        // Raw value is reported until the counter moves.
        assert_eq!(unit.address(), 0x30);
        unit.advance(Direction::Right);
        assert_eq!(unit.address(), 0x09);
    }

    #[test]
    fn test_write_ddram_lands_at_counter() {
        let mut unit = AddressUnit::new(40, 2);
        for (address, value) in [(0x00, b'a'), (0x27, b'b'), (0x40, b'c'), (0x67, b'd')] {
            unit.set_address(AddressMode::Ddram, address);
            unit.write_ddram(value);
            assert_eq!(unit.ddram()[usize::from(address)], value);
            assert_eq!(unit.read_ddram(), value);
        }
        assert_eq!(unit.ddram().iter().filter(|&&b| b != BLANK).count(), 4);
    }

    #[test]
    fn test_clear_and_home() {
        let mut unit = AddressUnit::new(16, 2);
        unit.set_address(AddressMode::Ddram, 0x05);
        unit.write_ddram(b'A');
        unit.shift_display(Direction::Left);

        unit.home();
        assert_eq!(unit.address(), 0);
        assert_eq!(unit.display_shift(), 0);
        assert_eq!(unit.ddram()[5], b'A');

        unit.clear();
        assert!(unit.ddram().iter().all(|&b| b == BLANK));
    }

    #[test]
    fn test_cell_of() {
        let unit = AddressUnit::new(16, 2);
        assert_eq!(unit.cell_of(0x41), Some((1, 1)));
        assert_eq!(unit.cell_of(0x20), None);
    }
}
