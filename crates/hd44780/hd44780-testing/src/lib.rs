//! HD44780U Testing Utilities
//!
//! Headless assertions over the emulator's rendered pixel grid, for code that
//! drives a character LCD and wants to check what would appear on the glass.
//!
//! # Quick start
//!
//! ```
//! use hd44780_testing::TestLcd;
//! use hd44780_specs::displays::LCD_16X2;
//!
//! let mut t = TestLcd::with_spec(&LCD_16X2).unwrap();
//! t.init_standard();
//! t.write_string("Hello");
//! t.update_pixels();
//!
//! t.assert_row_text(0, "Hello           ").unwrap();
//! t.assert_cell_glyph(0, 0, b'H').unwrap();
//! t.assert_cell_blank(0, 5).unwrap();
//! t.assert_borders_intact().unwrap();
//! ```
//!
//! # Golden screenshot testing
//!
//! ```no_run
//! # use hd44780_testing::TestLcd;
//! # use hd44780_emulator::CharacterRom;
//! # let t = TestLcd::new(16, 2, CharacterRom::A00).unwrap();
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! t.assert_matches_golden("tests/golden/hello.png", 0).unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
// Pixel coordinates here are bounded by the 40×4 grid limit.
#![allow(clippy::arithmetic_side_effects)]

use std::path::Path;

use embedded_graphics::primitives::Rectangle;
use hd44780_emulator::command::{
    CMD_CLEAR, CMD_DISPLAY, CMD_DISPLAY_ON, CMD_FUNCTION, CMD_FUNCTION_2LINE, CMD_FUNCTION_8BIT,
};
use hd44780_emulator::render::{cell_origin, CELL_PITCH_X};
use hd44780_emulator::{CharacterRom, ColorScheme, Lcd, LcdError, PixelState};
use hd44780_specs::DisplaySpec;

// ─────────────────────────────────────────────────────────────────────────────
// TestLcd
// ─────────────────────────────────────────────────────────────────────────────

/// Headless LCD with assertion helpers.
///
/// Derefs to [`Lcd`], so commands and data go straight to the controller:
///
/// ```
/// # use hd44780_testing::TestLcd;
/// # use hd44780_emulator::CharacterRom;
/// let mut t = TestLcd::new(8, 1, CharacterRom::A02).unwrap();
/// t.init_standard();
/// t.write_string("ok");
/// assert_eq!(t.row_text(0), "ok      ");
/// ```
///
/// All `assert_*` methods read the last rendered snapshot; call
/// [`Lcd::update_pixels`] before asserting on pixels.
#[derive(Debug, Clone)]
pub struct TestLcd {
    inner: Lcd,
    scheme: ColorScheme,
}

impl TestLcd {
    /// Create a headless LCD with the given geometry.
    pub fn new(columns: u8, rows: u8, rom: CharacterRom) -> Result<Self, LcdError> {
        Ok(Self {
            inner: Lcd::new(columns, rows, rom)?,
            scheme: ColorScheme::default(),
        })
    }

    /// Create a headless LCD from a display preset.
    pub fn with_spec(spec: &DisplaySpec) -> Result<Self, LcdError> {
        Ok(Self {
            inner: Lcd::with_spec(spec)?,
            scheme: ColorScheme::default(),
        })
    }

    /// Colours used for screenshots and golden comparisons.
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Usual driver bring-up: 8-bit two-line function set, clear, display on.
    pub fn init_standard(&mut self) {
        self.inner
            .send_command(CMD_FUNCTION | CMD_FUNCTION_8BIT | CMD_FUNCTION_2LINE);
        self.inner.send_command(CMD_CLEAR);
        self.inner.send_command(CMD_DISPLAY | CMD_DISPLAY_ON);
    }

    // ── Text inspection ──────────────────────────────────────────────────────

    /// Visible characters of `row`, with non-printable codes shown as `?`.
    pub fn row_text(&self, row: u8) -> String {
        self.inner
            .visible_row(row)
            .map(|code| {
                if (0x20..0x7F).contains(&code) {
                    char::from(code)
                } else {
                    '?'
                }
            })
            .collect()
    }

    /// Last snapshot as text, one line per pixel row.
    pub fn ascii_dump(&self) -> String {
        self.inner.snapshot().to_ascii()
    }

    /// Assert the visible text of `row`.
    pub fn assert_row_text(&self, row: u8, expected: &str) -> Result<(), String> {
        let actual = self.row_text(row);
        if actual == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_row_text({row}): expected {expected:?}, got {actual:?}"
            ))
        }
    }

    // ── Cell geometry ────────────────────────────────────────────────────────

    /// Pixel rows per cell in the last snapshot.
    ///
    /// Derived from the snapshot height rather than the current mode, so it
    /// stays consistent with the pixels being inspected.
    pub fn snapshot_cell_rows(&self) -> u8 {
        let height = u16::from(self.inner.num_pixels_y()) + 1;
        let rows = u16::from(self.inner.rows()).max(1);
        u8::try_from((height / rows).saturating_sub(1)).unwrap_or(0)
    }

    /// Top-left pixel of cell (`row`, `col`) in the last snapshot.
    pub fn cell_origin(&self, row: u8, col: u8) -> (i32, i32) {
        cell_origin(row, col, self.snapshot_cell_rows())
    }

    /// Lit pixels in the last snapshot.
    pub fn count_lit(&self) -> usize {
        self.inner.snapshot().count(PixelState::On)
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected state.
    pub fn assert_pixel(&self, x: i32, y: i32, expected: PixelState) -> Result<(), String> {
        let actual = self.inner.pixel_state(x, y);
        if actual == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_pixel({x}, {y}): expected {}, got {}",
                expected.as_i8(),
                actual.as_i8()
            ))
        }
    }

    /// Assert that every pixel inside `rect` has the given state.
    pub fn assert_region_uniform(&self, rect: Rectangle, state: PixelState) -> Result<(), String> {
        let tl = rect.top_left;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = tl.x.wrapping_add_unsigned(dx);
                let y = tl.y.wrapping_add_unsigned(dy);
                self.assert_pixel(x, y, state).map_err(|e| {
                    format!(
                        "assert_region_uniform failed in {}x{} at ({}, {}): {e}",
                        rect.size.width, rect.size.height, tl.x, tl.y
                    )
                })?;
            }
        }
        Ok(())
    }

    /// Assert that cell (`row`, `col`) shows exactly the glyph for `code`.
    ///
    /// The glyph is drawn top-aligned; rows below its height must be dark.
    /// An overlaid cursor makes this fail, which is usually what you want.
    pub fn assert_cell_glyph(&self, row: u8, col: u8, code: u8) -> Result<(), String> {
        let glyph = self.inner.char_bits(code);
        let (ox, oy) = self.cell_origin(row, col);
        for y in 0..self.snapshot_cell_rows() {
            for x in 0..CELL_PITCH_X - 1 {
                let lit = y < glyph.height() && glyph.pixel(x, y);
                self.assert_pixel(
                    ox + i32::from(x),
                    oy + i32::from(y),
                    PixelState::from_lit(lit),
                )
                .map_err(|e| format!("assert_cell_glyph({row}, {col}, {code:#04x}): {e}"))?;
            }
        }
        Ok(())
    }

    /// Assert that cell (`row`, `col`) has no lit dots.
    pub fn assert_cell_blank(&self, row: u8, col: u8) -> Result<(), String> {
        let (ox, oy) = self.cell_origin(row, col);
        for y in 0..self.snapshot_cell_rows() {
            for x in 0..CELL_PITCH_X - 1 {
                self.assert_pixel(ox + i32::from(x), oy + i32::from(y), PixelState::Off)
                    .map_err(|e| format!("assert_cell_blank({row}, {col}): {e}"))?;
            }
        }
        Ok(())
    }

    /// Assert that every gap between cells reports [`PixelState::NoPixel`]
    /// and every dot inside a cell does not.
    pub fn assert_borders_intact(&self) -> Result<(), String> {
        let pitch_y = i32::from(self.snapshot_cell_rows()) + 1;
        let pitch_x = i32::from(CELL_PITCH_X);
        for (x, y, state) in self.inner.snapshot().iter() {
            let border = x % pitch_x == pitch_x - 1 || y % pitch_y == pitch_y - 1;
            if border != (state == PixelState::NoPixel) {
                return Err(format!(
                    "assert_borders_intact: pixel ({x}, {y}) is {} but border={border}",
                    state.as_i8()
                ));
            }
        }
        Ok(())
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// Save the last snapshot as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        self.inner.screenshot(path, &self.scheme)
    }

    /// Save the last snapshot as the golden reference PNG.
    ///
    /// Parent directories are created automatically.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.screenshot(p)
    }

    /// Assert the last snapshot matches a golden reference PNG.
    ///
    /// `threshold` is the maximum per-channel difference still considered
    /// equal. Set `UPDATE_GOLDEN=1` to rewrite the golden file instead:
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(
        &self,
        golden_path: impl AsRef<Path>,
        threshold: u8,
    ) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self.save_golden(golden_path).map_err(|e| {
                format!(
                    "Failed to save golden '{p}': {e}",
                    p = golden_path.display()
                )
            });
        }

        let golden = image::open(golden_path)
            .map_err(|e| {
                format!(
                    "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                    golden_path.display()
                )
            })?
            .to_rgb8();

        let snapshot = self.inner.snapshot();
        let (width, height) = (u32::from(snapshot.width()), u32::from(snapshot.height()));
        if golden.dimensions() != (width, height) {
            let (gw, gh) = golden.dimensions();
            return Err(format!(
                "Dimension mismatch: snapshot is {width}×{height}, golden is {gw}×{gh}"
            ));
        }

        let mut diff_pixels: u64 = 0;
        for (x, y, state) in snapshot.iter() {
            let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            let expected = ColorScheme::rgb(self.scheme.color(state));
            let differs = golden
                .get_pixel(x, y)
                .0
                .iter()
                .zip(expected.iter())
                .any(|(&a, &b)| a.abs_diff(b) > threshold);
            if differs {
                diff_pixels += 1;
            }
        }

        if diff_pixels > 0 {
            Err(format!(
                "{diff_pixels} pixels differ from golden '{}' (threshold={threshold})",
                golden_path.display()
            ))
        } else {
            Ok(())
        }
    }

    // ── Emulator access ──────────────────────────────────────────────────────

    /// The wrapped controller.
    pub fn lcd(&self) -> &Lcd {
        &self.inner
    }

    /// The wrapped controller, mutably.
    pub fn lcd_mut(&mut self) -> &mut Lcd {
        &mut self.inner
    }
}

impl std::ops::Deref for TestLcd {
    type Target = Lcd;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for TestLcd {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
