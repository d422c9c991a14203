//! Emulator configuration
//!
//! A serialisable description of the module being emulated. JSON example:
//!
//! ```json
//! { "columns": 20, "rows": 4, "rom": "A02", "scheme": "BlackOnGreen" }
//! ```

use std::path::Path;

use hd44780_specs::{displays, CharacterRom, DisplaySpec};
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::{ConfigError, LcdError};

/// Module geometry, ROM and panel colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcdConfig {
    /// Characters per row (8-40)
    pub columns: u8,
    /// Rows (1, 2 or 4)
    pub rows: u8,
    /// Character generator ROM
    #[serde(default)]
    pub rom: CharacterRom,
    /// Panel colours used for screenshots
    #[serde(default)]
    pub scheme: Palette,
}

impl LcdConfig {
    /// 16×2, A00 ROM, white on blue
    pub const LCD_16X2: Self = Self::from_spec(&displays::LCD_16X2);

    /// 20×4, A00 ROM, white on blue
    pub const LCD_20X4: Self = Self::from_spec(&displays::LCD_20X4);

    /// 40×2, A02 ROM, white on blue
    pub const LCD_40X2: Self = Self::from_spec(&displays::LCD_40X2);

    /// Default configuration: the common 16×2 module
    pub const DEFAULT: Self = Self::LCD_16X2;

    /// Configuration for a preset module with the default palette
    pub const fn from_spec(spec: &DisplaySpec) -> Self {
        Self {
            columns: spec.columns,
            rows: spec.rows,
            rom: spec.rom,
            scheme: Palette::WhiteOnBlue,
        }
    }

    /// Same module, different palette
    pub const fn with_scheme(self, scheme: Palette) -> Self {
        Self { scheme, ..self }
    }

    /// Check the geometry against what the controller supports
    pub fn validate(&self) -> Result<(), LcdError> {
        LcdError::check_geometry(self.columns, self.rows)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            columns = config.columns,
            rows = config.rows,
            rom = config.rom.name(),
            "config parsed"
        );
        Ok(config)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_json(&json)
    }

    /// Write the configuration as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
