#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use hd44780_emulator::command::*;
use hd44780_emulator::{CharacterRom, Palette, PixelState};
use hd44780_specs::displays::{ALL, LCD_20X4, LCD_40X2};
use hd44780_testing::TestLcd;

#[test]
fn every_preset_renders_clean_borders() {
    for spec in ALL {
        let mut t = TestLcd::with_spec(spec).unwrap();
        t.init_standard();
        t.write_string("The quick brown fox jumps over the lazy dog");
        t.update_pixels();
        assert!(t.assert_borders_intact().is_ok(), "{}", spec.name);
    }
}

#[test]
fn four_row_text_lands_on_expected_rows() {
    let mut t = TestLcd::with_spec(&LCD_20X4).unwrap();
    t.init_standard();
    for row in 0..4u8 {
        let address = t.data_offset(row, 0);
        t.send_command(CMD_SET_DRAM_ADDR | address);
        t.write_string(&format!("row {row}"));
    }
    t.update_pixels();
    for row in 0..4u8 {
        t.assert_row_text(row, &format!("{:<20}", format!("row {row}")))
            .unwrap();
    }
    t.assert_cell_glyph(3, 4, b'3').unwrap();
}

#[test]
fn custom_glyph_shows_in_cell() {
    let mut t = TestLcd::with_spec(&LCD_40X2).unwrap();
    t.init_standard();
    t.send_command(CMD_SET_CGRAM_ADDR | 8);
    t.write_bytes(&[0x1F; 8]);
    t.send_command(CMD_SET_DRAM_ADDR);
    t.write_byte(1);
    t.update_pixels();

    let cell = Rectangle::new(Point::zero(), Size::new(5, 8));
    t.assert_region_uniform(cell, PixelState::On).unwrap();
    t.assert_cell_glyph(0, 0, 1).unwrap();
    t.assert_cell_glyph(0, 0, 9).unwrap();
    assert_eq!(t.count_lit(), 40);
}

#[test]
fn underline_cursor_breaks_blank_cell() {
    let mut t = TestLcd::new(16, 2, CharacterRom::A00).unwrap();
    t.init_standard();
    t.send_command(CMD_DISPLAY | CMD_DISPLAY_ON | CMD_DISPLAY_CURSOR);
    t.update_pixels();

    assert!(t.assert_cell_blank(0, 0).is_err());
    let bottom = Rectangle::new(Point::new(0, 7), Size::new(5, 1));
    t.assert_region_uniform(bottom, PixelState::On).unwrap();
    t.assert_cell_blank(0, 1).unwrap();
}

#[test]
fn ascii_dump_has_one_line_per_pixel_row() {
    let mut t = TestLcd::new(8, 1, CharacterRom::A02).unwrap();
    t.init_standard();
    t.update_pixels();
    let dump = t.ascii_dump();
    assert_eq!(dump.lines().count(), usize::from(t.num_pixels_y()));
    assert!(dump.lines().all(|line| line.chars().count() == 47));
}

#[test]
fn golden_honours_scheme() {
    let mut t = TestLcd::new(8, 1, CharacterRom::A00)
        .unwrap()
        .with_scheme(Palette::RedOnBlack.scheme());
    t.init_standard();
    t.write_string("golden");
    t.update_pixels();

    let path = std::env::temp_dir().join(format!("hd44780_basic_{}.png", std::process::id()));
    t.save_golden(&path).unwrap();
    t.assert_matches_golden(&path, 0).unwrap();

    let blue = t.clone().with_scheme(Palette::BlackOnBlue.scheme());
    assert!(blue.assert_matches_golden(&path, 0).is_err());
    let _ = std::fs::remove_file(&path);
}
