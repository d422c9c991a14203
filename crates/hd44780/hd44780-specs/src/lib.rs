//! HD44780U Character LCD Specifications
//!
//! Static data describing HD44780U-family character modules: the supported
//! geometries, the two character generator ROM variants, and presets for the
//! common module sizes sold by most vendors.
//!
//! # Features
//!
//! - **no_std compatible** - Pure data, no allocation
//! - **ROM tables** - A00 (Japanese) and A02 (European) glyph sets as immutable statics
//! - **Module templates** - 8×1 through 40×2 presets
//! - **Serde support** - Optional serialization for config files
//!
//! # Example
//!
//! ```
//! use hd44780_specs::displays::LCD_16X2;
//! use hd44780_specs::CharacterRom;
//!
//! let spec = LCD_16X2;
//! assert_eq!(spec.cells(), 32);
//!
//! let h = CharacterRom::A00.glyph(b'H').unwrap();
//! assert_eq!(h[0], 0b10001);
//! ```
//!
//! # Custom Modules
//!
//! ```
//! use hd44780_specs::{CharacterRom, DisplaySpec};
//!
//! const MY_MODULE: DisplaySpec = DisplaySpec {
//!     name: "Custom 12×2",
//!     columns: 12,
//!     rows: 2,
//!     rom: CharacterRom::A02,
//! };
//! assert!(MY_MODULE.is_supported());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod display_spec;
pub mod displays;
pub mod rom;

pub use display_spec::{
    is_supported_geometry, CharacterRom, DisplaySpec, MAX_COLUMNS, MIN_COLUMNS, SUPPORTED_ROWS,
};
pub use rom::{GlyphRows, RomTable, ROM_FIRST_CODE, ROM_GLYPH_COUNT};
