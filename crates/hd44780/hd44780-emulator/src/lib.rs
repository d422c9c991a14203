//! HD44780U Character LCD Emulator
//!
//! Logical emulation of the HD44780U controller and its extended-instruction
//! relatives. The emulator accepts the byte stream a microcontroller would
//! put on the parallel bus and keeps DDRAM, CGRAM, the address counter and
//! every flag exactly as the chip would. A pixel grid is produced on request.
//!
//! - Command decoding, entry mode, cursor and display shift
//! - Segment-local DDRAM addressing for 1, 2 and 4 row modules
//! - CGRAM user glyphs in 5×8 and 5×10 fonts
//! - Graphics RAM for bitmap-capable variants
//! - Tri-state pixel snapshots, PNG screenshots, embedded-graphics drawing
//!
//! There is no timing model: every byte takes effect immediately and the
//! busy flag always reads clear.
//!
//! # Example
//!
//! ```
//! use hd44780_emulator::{Lcd, PixelState};
//! use hd44780_emulator::command::*;
//! use hd44780_specs::CharacterRom;
//!
//! let mut lcd = Lcd::new(16, 2, CharacterRom::A00).unwrap();
//! lcd.send_command(CMD_FUNCTION | CMD_FUNCTION_2LINE);
//! lcd.send_command(CMD_CLEAR);
//! lcd.send_command(CMD_DISPLAY | CMD_DISPLAY_ON);
//! lcd.write_string("Hello world!");
//! lcd.update_pixels();
//!
//! assert_eq!(lcd.num_pixels_x(), 95);
//! assert_eq!(lcd.num_pixels_y(), 17);
//! assert_eq!(lcd.pixel_state(5, 0), PixelState::NoPixel);
//! ```

pub mod address;
pub mod color;
pub mod command;
pub mod config;
mod error;
pub mod glyph_store;
pub mod graphics;
mod interface;
mod pixel_state;
pub mod render;

pub use address::{AddressMode, Direction};
pub use color::{ColorScheme, Palette};
pub use command::{Command, DisplayControl, EntryMode, FunctionFlags, LineMode};
pub use config::LcdConfig;
pub use error::{ConfigError, LcdError};
pub use glyph_store::{FontSize, Glyph};
pub use interface::{LcdInterface, RegisterSelect, BUSY_FLAG};
pub use pixel_state::{PixelSnapshot, PixelState};

pub use hd44780_specs::{CharacterRom, DisplaySpec};

use address::{AddressUnit, DDRAM_SIZE};
use command::{ExtMode, ShiftTarget};
use glyph_store::{GlyphStore, CGRAM_SIZE};
use graphics::GraphicsRam;
use render::Frame;

/// HD44780U controller with its DDRAM, CGRAM and rendered pixel grid
#[derive(Debug, Clone)]
pub struct Lcd {
    columns: u8,
    rows: u8,
    entry: EntryMode,
    display: DisplayControl,
    function: FunctionFlags,
    memory: AddressUnit,
    glyphs: GlyphStore,
    gdram: GraphicsRam,
    snapshot: PixelSnapshot,
    blink_phase: bool,
}

impl Lcd {
    /// Create a controller for a `columns` × `rows` module
    ///
    /// Columns must be 8-40 and rows 1, 2 or 4. The controller starts in its
    /// power-on state: display off, increment without shift, one line, 5×8
    /// font, DDRAM blank.
    pub fn new(columns: u8, rows: u8, rom: CharacterRom) -> Result<Self, LcdError> {
        LcdError::check_geometry(columns, rows)?;
        tracing::debug!(columns, rows, rom = rom.name(), "lcd created");
        Ok(Self::power_on(columns, rows, rom))
    }

    /// Create a controller for a preset module
    pub fn with_spec(spec: &DisplaySpec) -> Result<Self, LcdError> {
        Self::new(spec.columns, spec.rows, spec.rom)
    }

    /// Create a controller from a configuration
    pub fn from_config(config: &LcdConfig) -> Result<Self, LcdError> {
        Self::new(config.columns, config.rows, config.rom)
    }

    fn power_on(columns: u8, rows: u8, rom: CharacterRom) -> Self {
        let mut lcd = Self {
            columns,
            rows,
            entry: EntryMode::POWER_ON,
            display: DisplayControl::default(),
            function: FunctionFlags::POWER_ON,
            memory: AddressUnit::new(columns, rows),
            glyphs: GlyphStore::new(rom),
            gdram: GraphicsRam::new(columns, rows),
            snapshot: PixelSnapshot::new(0, 0),
            blink_phase: false,
        };
        lcd.snapshot = lcd.frame().render();
        lcd
    }

    /// Return to the power-on state, keeping geometry and ROM
    pub fn reset(&mut self) {
        tracing::debug!("lcd reset");
        *self = Self::power_on(self.columns, self.rows, self.glyphs.rom());
    }

    // ── Bus operations ──────────────────────────────────────────────────────

    /// Write to the instruction register (RS low)
    ///
    /// Bytes that select no instruction (0x00) are ignored.
    pub fn send_command(&mut self, byte: u8) {
        match Command::decode(byte) {
            Some(command) => {
                tracing::trace!(byte, command = command.name(), "command");
                self.execute(command);
            }
            None => tracing::trace!(byte, "ignored command byte"),
        }
    }

    /// Apply an already decoded instruction
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Clear => {
                self.memory.clear();
                self.gdram.clear();
                self.entry.increment = true;
                tracing::debug!("display cleared");
            }
            Command::Home => self.memory.home(),
            Command::EntryMode(entry) => self.entry = entry,
            Command::Display(display) => self.display = display,
            Command::Shift { target, direction } => match target {
                ShiftTarget::Cursor if self.function.graphics => self.gdram.advance(direction),
                ShiftTarget::Cursor => self.memory.shift_cursor(direction),
                ShiftTarget::Display => self.memory.shift_display(direction),
            },
            Command::Function { lines } => {
                self.set_function(FunctionFlags {
                    lines,
                    extended: false,
                    graphics: self.function.graphics,
                });
            }
            Command::ExtFunction { lines, mode } => {
                self.set_function(FunctionFlags {
                    lines,
                    extended: true,
                    graphics: mode == ExtMode::Graphics,
                });
            }
            Command::SetCgramAddr(address) if self.function.graphics => {
                self.gdram.set_line(address);
            }
            Command::SetCgramAddr(address) => {
                self.memory.set_address(AddressMode::Cgram, address);
            }
            Command::SetDramAddr(address) if self.function.graphics => {
                self.gdram.set_column(address);
            }
            Command::SetDramAddr(address) => {
                self.memory.set_address(AddressMode::Ddram, address);
            }
        }
    }

    fn set_function(&mut self, function: FunctionFlags) {
        if function != self.function {
            tracing::debug!(
                two_line = function.lines == LineMode::Two,
                extended = function.extended,
                graphics = function.graphics,
                "function set"
            );
        }
        self.function = function;
        self.memory.set_two_line(function.lines == LineMode::Two);
    }

    /// Write to the data register (RS high)
    ///
    /// The byte lands in whichever RAM the address counter selects, then the
    /// counter moves per entry mode. DDRAM writes also shift the display when
    /// entry shift is on.
    pub fn write_byte(&mut self, value: u8) {
        let direction = self.entry.direction();
        if self.function.graphics {
            self.gdram.write(value);
            self.gdram.advance(direction);
            return;
        }

        match self.memory.mode() {
            AddressMode::Cgram => {
                self.glyphs.write_cgram(self.memory.address(), value);
                self.memory.advance(direction);
            }
            AddressMode::Ddram => {
                tracing::trace!(address = self.memory.ddram_address(), value, "ddram write");
                self.memory.write_ddram(value);
                self.memory.advance(direction);
                if self.entry.shift {
                    // Incrementing entry scrolls text left to keep the cursor still.
                    let shift = match direction {
                        Direction::Right => Direction::Left,
                        Direction::Left => Direction::Right,
                    };
                    self.memory.shift_display(shift);
                }
            }
        }
    }

    /// Write each byte of `text` in order
    pub fn write_string(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Write each byte in order
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Read the data register and advance the address counter
    pub fn read_byte(&mut self) -> u8 {
        let value = self.read_byte_no_inc();
        let direction = self.entry.direction();
        if self.function.graphics {
            self.gdram.advance(direction);
        } else {
            self.memory.advance(direction);
        }
        value
    }

    /// Read the data register without touching the address counter
    pub fn read_byte_no_inc(&self) -> u8 {
        if self.function.graphics {
            return self.gdram.read();
        }
        match self.memory.mode() {
            AddressMode::Cgram => self.glyphs.read_cgram(self.memory.address()),
            AddressMode::Ddram => self.memory.read_ddram(),
        }
    }

    /// Current address counter (graphics column in graphics mode)
    pub fn read_address(&self) -> u8 {
        if self.function.graphics {
            self.gdram.column()
        } else {
            self.memory.address()
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// DDRAM address visible at screen cell (`row`, `col`)
    ///
    /// Out-of-range rows and columns are clamped. The result includes the
    /// current display shift, so it can be loaded with SET_DRAM_ADDR to write
    /// to that cell.
    pub fn data_offset(&self, row: u8, col: u8) -> u8 {
        self.memory.data_offset(row, col)
    }

    /// Dot rows for character `code` in the current font
    pub fn char_bits(&self, code: u8) -> Glyph {
        self.glyphs.glyph_bits(code, self.function.font())
    }

    /// Character codes currently visible on `row`, left to right
    pub fn visible_row(&self, row: u8) -> impl Iterator<Item = u8> + '_ {
        let ddram = self.memory.ddram();
        self.memory
            .visible_row(row)
            .map(|address| ddram.get(usize::from(address)).copied().unwrap_or(0))
    }

    /// Screen cell under the cursor, if the cursor can be shown there
    pub fn cursor_cell(&self) -> Option<(u8, u8)> {
        let visible = self.display.on
            && !self.function.graphics
            && self.memory.mode() == AddressMode::Ddram;
        if !visible {
            return None;
        }
        self.memory.cell_of(self.memory.ddram_address())
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    /// Rebuild the pixel snapshot from current state
    ///
    /// Each call also flips the cursor blink phase, so a host calling this at
    /// its refresh rate gets a blinking block cursor.
    pub fn update_pixels(&mut self) {
        self.blink_phase = !self.blink_phase;
        self.snapshot = self.frame().render();
        tracing::trace!(
            width = self.snapshot.width(),
            height = self.snapshot.height(),
            "pixels updated"
        );
    }

    fn frame(&self) -> Frame<'_> {
        Frame {
            columns: self.columns,
            rows: self.rows,
            font: self.function.font(),
            display: self.display,
            graphics_mode: self.function.graphics,
            cursor: self.cursor_cell(),
            blink_phase: self.blink_phase,
            memory: &self.memory,
            glyphs: &self.glyphs,
            gdram: &self.gdram,
        }
    }

    /// Pixel rows per character cell in the current mode
    pub fn cell_rows(&self) -> u8 {
        self.frame().cell_rows()
    }

    /// Positions in the last rendered snapshot
    pub fn num_pixels(&self) -> usize {
        self.snapshot.len()
    }

    /// Width of the last rendered snapshot
    pub fn num_pixels_x(&self) -> u16 {
        self.snapshot.width()
    }

    /// Height of the last rendered snapshot
    pub fn num_pixels_y(&self) -> u16 {
        self.snapshot.height()
    }

    /// State of one pixel in the last rendered snapshot
    ///
    /// Out-of-range positions report [`PixelState::NoPixel`].
    pub fn pixel_state(&self, x: i32, y: i32) -> PixelState {
        self.snapshot.get(x, y)
    }

    /// The last rendered snapshot
    pub fn snapshot(&self) -> &PixelSnapshot {
        &self.snapshot
    }

    /// Save the last rendered snapshot as a PNG
    pub fn screenshot(
        &self,
        path: impl AsRef<std::path::Path>,
        scheme: &ColorScheme,
    ) -> Result<(), Box<dyn std::error::Error>> {
        use image::{Rgb, RgbImage};

        let mut img = RgbImage::new(
            u32::from(self.snapshot.width()),
            u32::from(self.snapshot.height()),
        );
        for (x, y, state) in self.snapshot.iter() {
            let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            img.put_pixel(x, y, Rgb(ColorScheme::rgb(scheme.color(state))));
        }

        img.save(path)?;
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// Characters per row
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Text rows
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Character ROM fitted to this controller
    pub const fn rom(&self) -> CharacterRom {
        self.glyphs.rom()
    }

    /// Entry mode flags
    pub const fn entry_mode(&self) -> EntryMode {
        self.entry
    }

    /// Display on/cursor/blink flags
    pub const fn display_control(&self) -> DisplayControl {
        self.display
    }

    /// Function set flags
    pub const fn function_flags(&self) -> FunctionFlags {
        self.function
    }

    /// RAM the address counter points into
    pub const fn address_mode(&self) -> AddressMode {
        self.memory.mode()
    }

    /// Accumulated display shift; positive values move text left
    pub const fn display_shift(&self) -> i32 {
        self.memory.display_shift()
    }

    /// Cursor blink phase used by the last render
    pub const fn blink_phase(&self) -> bool {
        self.blink_phase
    }

    /// Raw DDRAM, indexed by address
    pub const fn ddram(&self) -> &[u8; DDRAM_SIZE] {
        self.memory.ddram()
    }

    /// Raw CGRAM
    pub const fn cgram(&self) -> &[u8; CGRAM_SIZE] {
        self.glyphs.cgram()
    }

    /// Graphics RAM
    pub const fn gdram(&self) -> &GraphicsRam {
        &self.gdram
    }
}
