//! Pixel renderer
//!
//! Turns controller state into a [`PixelSnapshot`]. Every character cell is
//! 5 dots wide and `cell_rows` dots tall, with a one-pixel border column to
//! the right of each cell and a one-pixel border row below each text row.
//! The last cell in a row or column has no trailing border.

use crate::address::AddressUnit;
use crate::command::DisplayControl;
use crate::glyph_store::{FontSize, GlyphStore, GLYPH_WIDTH};
use crate::graphics::GraphicsRam;
use crate::pixel_state::{PixelSnapshot, PixelState};

/// Pixel rows per cell in graphics mode (one GDRAM byte)
pub const GRAPHICS_CELL_ROWS: u8 = 8;

/// Horizontal distance between the left edges of neighbouring cells
pub const CELL_PITCH_X: u8 = GLYPH_WIDTH + 1;

/// Grid size in pixels for a display of `columns` × `rows` cells
// SAFETY: columns ≤ 40, rows ≤ 4 and cell_rows ≤ 11, so both results are far below u16::MAX.
#[allow(clippy::arithmetic_side_effects)]
pub fn grid_size(columns: u8, rows: u8, cell_rows: u8) -> (u16, u16) {
    let width = (u16::from(columns) * u16::from(CELL_PITCH_X)).saturating_sub(1);
    let height = (u16::from(rows) * (u16::from(cell_rows) + 1)).saturating_sub(1);
    (width, height)
}

/// Top-left pixel of character cell (`row`, `col`)
// SAFETY: row/col are display cell indices (≤ 40), products stay tiny.
#[allow(clippy::arithmetic_side_effects)]
pub fn cell_origin(row: u8, col: u8, cell_rows: u8) -> (i32, i32) {
    (
        i32::from(col) * i32::from(CELL_PITCH_X),
        i32::from(row) * (i32::from(cell_rows) + 1),
    )
}

/// Everything a render pass reads
pub(crate) struct Frame<'a> {
    pub columns: u8,
    pub rows: u8,
    pub font: FontSize,
    pub display: DisplayControl,
    pub graphics_mode: bool,
    /// Cell the cursor sits on, already filtered for visibility
    pub cursor: Option<(u8, u8)>,
    pub blink_phase: bool,
    pub memory: &'a AddressUnit,
    pub glyphs: &'a GlyphStore,
    pub gdram: &'a GraphicsRam,
}

impl Frame<'_> {
    /// Pixel rows per cell for the current mode
    pub fn cell_rows(&self) -> u8 {
        if self.graphics_mode {
            GRAPHICS_CELL_ROWS
        } else {
            self.font.cell_rows()
        }
    }

    /// Build a complete snapshot
    pub fn render(&self) -> PixelSnapshot {
        let cell_rows = self.cell_rows();
        let (width, height) = grid_size(self.columns, self.rows, cell_rows);
        let mut snapshot = PixelSnapshot::new(width, height);

        for row in 0..self.rows {
            for col in 0..self.columns {
                let (x0, y0) = cell_origin(row, col, cell_rows);
                let cell = self.cell(row, col, cell_rows);
                for (dy, dots) in (0..cell_rows).zip(cell.iter()) {
                    for dx in 0..GLYPH_WIDTH {
                        let lit = self.display.on && dot(*dots, dx);
                        snapshot.set(
                            x0.saturating_add(i32::from(dx)),
                            y0.saturating_add(i32::from(dy)),
                            PixelState::from_lit(lit),
                        );
                    }
                }
            }
        }
        snapshot
    }

    /// Dot rows for one cell, bit 4 leftmost, including cursor overlay
    fn cell(&self, row: u8, col: u8, cell_rows: u8) -> [u8; MAX_CELL_ROWS] {
        let mut dots = [0u8; MAX_CELL_ROWS];
        if self.graphics_mode {
            self.graphics_cell(row, col, &mut dots);
            return dots;
        }

        let code = self
            .memory
            .ddram()
            .get(usize::from(self.memory.data_offset(row, col)))
            .copied()
            .unwrap_or(0);
        let glyph = self.glyphs.glyph_bits(code, self.font);
        for (dst, src) in dots.iter_mut().zip(glyph.rows()) {
            *dst = *src;
        }

        if self.cursor == Some((row, col)) {
            if self.display.blink && self.blink_phase {
                dots.iter_mut()
                    .take(usize::from(cell_rows))
                    .for_each(|line| *line = FULL_ROW);
            }
            if self.display.cursor {
                if let Some(line) = dots.get_mut(usize::from(cell_rows.saturating_sub(1))) {
                    *line = FULL_ROW;
                }
            }
        }
        dots
    }

    /// Transpose five GDRAM column bytes into dot rows
    fn graphics_cell(&self, row: u8, col: u8, dots: &mut [u8; MAX_CELL_ROWS]) {
        let first = col.saturating_mul(GLYPH_WIDTH);
        for dx in 0..GLYPH_WIDTH {
            let strip = self.gdram.byte_at(row, first.saturating_add(dx));
            let mask = 0x10_u8.checked_shr(u32::from(dx)).unwrap_or(0);
            for (dy, line) in dots.iter_mut().take(usize::from(GRAPHICS_CELL_ROWS)).enumerate() {
                let set = u32::try_from(dy)
                    .ok()
                    .and_then(|dy| strip.checked_shr(dy))
                    .is_some_and(|bits| bits & 1 != 0);
                if set {
                    *line |= mask;
                }
            }
        }
    }
}

const MAX_CELL_ROWS: usize = crate::glyph_store::MAX_GLYPH_ROWS;

const FULL_ROW: u8 = 0x1F;

const LAST_DOT: u8 = GLYPH_WIDTH - 1;

/// Whether dot column `dx` (0 = left) is set in a row byte
fn dot(row: u8, dx: u8) -> bool {
    LAST_DOT
        .checked_sub(dx)
        .and_then(|shift| row.checked_shr(u32::from(shift)))
        .is_some_and(|bits| bits & 1 != 0)
}
