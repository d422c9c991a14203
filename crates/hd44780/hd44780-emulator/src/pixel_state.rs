//! Rendered pixel grid
//!
//! A [`PixelSnapshot`] is the output of one render pass. It is replaced as a
//! whole on every render and is never patched in place.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, Point};
use embedded_graphics::Pixel;

use crate::color::ColorScheme;

/// State of one position in the pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum PixelState {
    /// Gap between character cells; there is no dot here
    #[default]
    NoPixel = -1,
    /// Dot present and off
    Off = 0,
    /// Dot present and on
    On = 1,
}

impl PixelState {
    /// Tri-state value as -1 / 0 / 1
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// `On` for `true`, `Off` for `false`
    pub const fn from_lit(lit: bool) -> Self {
        if lit {
            PixelState::On
        } else {
            PixelState::Off
        }
    }

    /// Console character: ' ' border, '.' off, '#' on
    pub const fn as_char(self) -> char {
        match self {
            PixelState::NoPixel => ' ',
            PixelState::Off => '.',
            PixelState::On => '#',
        }
    }
}

impl From<PixelState> for i8 {
    fn from(state: PixelState) -> Self {
        state.as_i8()
    }
}

/// Width × height grid of pixel states, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSnapshot {
    width: u16,
    height: u16,
    pixels: Vec<PixelState>,
}

impl PixelSnapshot {
    /// A grid of the given size with every position a border
    // SAFETY: u16 × u16 fits in usize on 32-bit+ targets.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![PixelState::NoPixel; usize::from(width) * usize::from(height)],
        }
    }

    /// Grid width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of positions
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid has no positions
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixel states
    pub fn pixels(&self) -> &[PixelState] {
        &self.pixels
    }

    /// State at (`x`, `y`); out-of-range positions are borders
    pub fn get(&self, x: i32, y: i32) -> PixelState {
        self.index(x, y)
            .and_then(|index| self.pixels.get(index))
            .copied()
            .unwrap_or(PixelState::NoPixel)
    }

    /// Overwrite the state at (`x`, `y`); ignored out of range
    pub fn set(&mut self, x: i32, y: i32, state: PixelState) {
        if let Some(pixel) = self.index(x, y).and_then(|index| self.pixels.get_mut(index)) {
            *pixel = state;
        }
    }

    /// Number of positions in `state`
    pub fn count(&self, state: PixelState) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == state).count()
    }

    /// Iterate `(x, y, state)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, PixelState)> + '_ {
        let width = usize::from(self.width).max(1);
        self.pixels.iter().enumerate().map(move |(index, &state)| {
            // Both quotients are bounded by u16::MAX.
            #[allow(
                clippy::arithmetic_side_effects,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap
            )]
            let (x, y) = ((index % width) as i32, (index / width) as i32);
            (x, y, state)
        })
    }

    /// Paint with a colour scheme, 0xAARRGGBB per pixel
    pub fn to_rgba(&self, scheme: &ColorScheme) -> Vec<u32> {
        self.pixels.iter().map(|&state| scheme.color(state)).collect()
    }

    /// Text rendering, one line per pixel row
    pub fn to_ascii(&self) -> String {
        let width = usize::from(self.width).max(1);
        let capacity = self.pixels.len().saturating_add(usize::from(self.height));
        let mut out = String::with_capacity(capacity);
        for row in self.pixels.chunks(width) {
            out.extend(row.iter().map(|state| state.as_char()));
            out.push('\n');
        }
        out
    }

    /// Draw dots as `BinaryColor` with the grid's top-left at `origin`
    ///
    /// Border positions are skipped so the target's background shows through.
    pub fn draw<D>(&self, target: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.draw_iter(self.iter().filter_map(|(x, y, state)| {
            let color = match state {
                PixelState::NoPixel => return None,
                PixelState::Off => BinaryColor::Off,
                PixelState::On => BinaryColor::On,
            };
            let point = Point::new(origin.x.saturating_add(x), origin.y.saturating_add(y));
            Some(Pixel(point, color))
        }))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u16::try_from(y).ok().filter(|&y| y < self.height)?;
        // SAFETY: x < width and y < height, so y * width + x < width * height.
        #[allow(clippy::arithmetic_side_effects)]
        let index = usize::from(y) * usize::from(self.width) + usize::from(x);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing, clippy::unwrap_used)]

    use super::*;
    use crate::color::Palette;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_tri_state_values() {
        assert_eq!(i8::from(PixelState::NoPixel), -1);
        assert_eq!(i8::from(PixelState::Off), 0);
        assert_eq!(i8::from(PixelState::On), 1);
    }

    #[test]
    fn test_out_of_range_is_border() {
        let mut snapshot = PixelSnapshot::new(3, 2);
        snapshot.set(1, 1, PixelState::On);
        assert_eq!(snapshot.get(1, 1), PixelState::On);
        assert_eq!(snapshot.get(-1, 0), PixelState::NoPixel);
        assert_eq!(snapshot.get(3, 0), PixelState::NoPixel);
        assert_eq!(snapshot.get(0, 2), PixelState::NoPixel);
        snapshot.set(7, 7, PixelState::On); // Should not panic
        assert_eq!(snapshot.count(PixelState::On), 1);
    }

    #[test]
    fn test_ascii() {
        let mut snapshot = PixelSnapshot::new(3, 2);
        snapshot.set(0, 0, PixelState::Off);
        snapshot.set(2, 1, PixelState::On);
        assert_eq!(snapshot.to_ascii(), ".  \n  #\n");
    }

    #[test]
    fn test_rgba_uses_back_for_borders() {
        let mut snapshot = PixelSnapshot::new(2, 1);
        snapshot.set(1, 0, PixelState::On);
        let scheme = Palette::WhiteOnBlue.scheme();
        assert_eq!(snapshot.to_rgba(&scheme), vec![scheme.back, scheme.pixel_on]);
    }

    #[test]
    fn test_iter_coordinates() {
        let snapshot = PixelSnapshot::new(4, 3);
        let last = snapshot.iter().last();
        assert_eq!(last, Some((3, 2, PixelState::NoPixel)));
        assert_eq!(snapshot.iter().count(), 12);
    }

    #[test]
    fn test_draw_skips_borders() {
        let mut snapshot = PixelSnapshot::new(3, 1);
        snapshot.set(0, 0, PixelState::On);
        snapshot.set(1, 0, PixelState::Off);

        let mut display = MockDisplay::<BinaryColor>::new();
        snapshot.draw(&mut display, Point::new(2, 1)).unwrap();
        assert_eq!(display.get_pixel(Point::new(2, 1)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 1)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(4, 1)), None);
    }
}
