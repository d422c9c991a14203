//! Panel colour schemes
//!
//! Character modules come in a handful of backlight/liquid-crystal
//! combinations. A [`ColorScheme`] holds the three colours needed to paint a
//! [`PixelSnapshot`](crate::PixelSnapshot): the glass behind the cells, lit
//! dots and unlit dots.

use serde::{Deserialize, Serialize};

use crate::pixel_state::PixelState;

/// Colours for one panel type, each 0xAARRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Glass between character cells
    pub back: u32,
    /// Dot driven on
    pub pixel_on: u32,
    /// Dot driven off
    pub pixel_off: u32,
}

impl ColorScheme {
    /// Colour for a pixel state; borders use the back colour
    pub const fn color(&self, state: PixelState) -> u32 {
        match state {
            PixelState::NoPixel => self.back,
            PixelState::Off => self.pixel_off,
            PixelState::On => self.pixel_on,
        }
    }

    /// Red, green and blue bytes of an 0xAARRGGBB colour
    pub const fn rgb(argb: u32) -> [u8; 3] {
        let [_, r, g, b] = argb.to_be_bytes();
        [r, g, b]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Palette::default().scheme()
    }
}

/// Stock panel types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Palette {
    /// Blue backlight, white characters
    #[default]
    WhiteOnBlue,
    /// Blue backlight, dark characters
    BlackOnBlue,
    /// Yellow-green backlight, black characters
    BlackOnGreen,
    /// Negative panel, red characters
    RedOnBlack,
    /// Negative panel, ice-blue characters
    BlueOnBlack,
}

impl Palette {
    /// Every stock palette
    pub const ALL: [Palette; 5] = [
        Palette::WhiteOnBlue,
        Palette::BlackOnBlue,
        Palette::BlackOnGreen,
        Palette::RedOnBlack,
        Palette::BlueOnBlack,
    ];

    /// The palette's colours
    pub const fn scheme(self) -> ColorScheme {
        match self {
            Palette::WhiteOnBlue => ColorScheme {
                back: 0xFF1F_1FFF,
                pixel_on: 0xFFF0_F0FF,
                pixel_off: 0xFF00_00E0,
            },
            Palette::BlackOnBlue => ColorScheme {
                back: 0xFF5C_AAEA,
                pixel_on: 0xFF00_0941,
                pixel_off: 0xFF51_8BCA,
            },
            Palette::BlackOnGreen => ColorScheme {
                back: 0xFF7D_BE00,
                pixel_on: 0xFF00_0000,
                pixel_off: 0xFF6F_B900,
            },
            Palette::RedOnBlack => ColorScheme {
                back: 0xFF21_2225,
                pixel_on: 0xFFFB_3349,
                pixel_off: 0xFF20_2729,
            },
            Palette::BlueOnBlack => ColorScheme {
                back: 0xFF21_2225,
                pixel_on: 0xFFB0_F7FE,
                pixel_off: 0xFF20_2729,
            },
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Palette::WhiteOnBlue => "white on blue",
            Palette::BlackOnBlue => "black on blue",
            Palette::BlackOnGreen => "black on green",
            Palette::RedOnBlack => "red on black",
            Palette::BlueOnBlack => "blue on black",
        }
    }
}

impl From<Palette> for ColorScheme {
    fn from(palette: Palette) -> Self {
        palette.scheme()
    }
}
