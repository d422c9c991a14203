//! End-to-end controller scenarios driven through the public byte interface.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use hd44780_emulator::command::*;
use hd44780_emulator::{AddressMode, CharacterRom, Lcd, PixelState};

fn init(columns: u8, rows: u8) -> Lcd {
    let mut lcd = Lcd::new(columns, rows, CharacterRom::A00).unwrap();
    lcd.send_command(CMD_FUNCTION | CMD_FUNCTION_2LINE | CMD_FUNCTION_8BIT);
    lcd.send_command(CMD_CLEAR);
    lcd.send_command(CMD_HOME);
    lcd.send_command(CMD_DISPLAY | CMD_DISPLAY_ON);
    lcd
}

fn row_text(lcd: &Lcd, row: u8) -> String {
    lcd.visible_row(row).map(char::from).collect()
}

/// Lit dots inside one character cell
fn lit_in_cell(lcd: &Lcd, row: u8, col: u8) -> usize {
    let cell_rows = i32::from(lcd.cell_rows());
    let x0 = i32::from(col) * 6;
    let y0 = i32::from(row) * (cell_rows + 1);
    (0..cell_rows)
        .flat_map(|dy| (0..5).map(move |dx| (x0 + dx, y0 + dy)))
        .filter(|&(x, y)| lcd.pixel_state(x, y) == PixelState::On)
        .count()
}

#[test]
fn test_hello_world_16x2() {
    let mut lcd = init(16, 2);
    for &byte in b"Hello" {
        lcd.write_byte(byte);
    }
    lcd.write_string(" world!");
    lcd.update_pixels();

    assert_eq!(row_text(&lcd, 0), "Hello world!    ");
    assert_eq!(row_text(&lcd, 1), " ".repeat(16));
    assert_eq!(lcd.num_pixels_x(), 95);
    assert_eq!(lcd.num_pixels_y(), 17);
    assert_eq!(lcd.num_pixels(), 95 * 17);

    // 'H': vertical bars on both edges, crossbar on row 3.
    assert_eq!(lcd.pixel_state(0, 0), PixelState::On);
    assert_eq!(lcd.pixel_state(1, 0), PixelState::Off);
    assert_eq!(lcd.pixel_state(4, 0), PixelState::On);
    for x in 0..5 {
        assert_eq!(lcd.pixel_state(x, 3), PixelState::On);
    }
    assert_eq!(lcd.pixel_state(0, 7), PixelState::Off);

    // 'e' in the second cell: full bar on row 4.
    for x in 6..11 {
        assert_eq!(lcd.pixel_state(x, 4), PixelState::On);
    }

    // Borders between characters and between rows.
    for y in 0..17 {
        assert_eq!(lcd.pixel_state(5, y), PixelState::NoPixel);
        assert_eq!(lcd.pixel_state(89, y), PixelState::NoPixel);
    }
    for x in 0..95 {
        assert_eq!(lcd.pixel_state(x, 8), PixelState::NoPixel);
    }

    // Outside the grid.
    assert_eq!(lcd.pixel_state(-1, 0), PixelState::NoPixel);
    assert_eq!(lcd.pixel_state(95, 0), PixelState::NoPixel);
    assert_eq!(lcd.pixel_state(0, 17), PixelState::NoPixel);

    // Space renders nothing.
    assert_eq!(lit_in_cell(&lcd, 0, 5), 0);
}

#[test]
fn test_row_wraps_within_segment_40x2() {
    let mut lcd = init(40, 2);
    let text: Vec<u8> = (0..40).map(|i| b'0' + (i % 10)).collect();
    lcd.write_bytes(&text);
    assert_eq!(lcd.read_address(), 0x00);

    lcd.write_byte(b'Z');
    assert_eq!(lcd.ddram()[0x00], b'Z');
    assert_eq!(lcd.ddram()[0x01], b'1');
    assert_eq!(lcd.ddram()[0x40], b' ');
    assert_eq!(lcd.read_address(), 0x01);
}

#[test]
fn test_second_row_wraps_to_its_own_start() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_SET_DRAM_ADDR | 0x67);
    lcd.write_string("ab");
    assert_eq!(lcd.ddram()[0x67], b'a');
    assert_eq!(lcd.ddram()[0x40], b'b');
    assert_eq!(lcd.ddram()[0x00], b' ');
}

#[test]
fn test_fill_display_row_major() {
    let mut lcd = init(16, 2);
    for row in 0..2 {
        lcd.send_command(CMD_SET_DRAM_ADDR | lcd.data_offset(row, 0));
        let line: String = (0..16).map(|c| char::from(b'A' + row * 16 + c)).collect();
        lcd.write_string(&line);
    }
    assert_eq!(row_text(&lcd, 0), "ABCDEFGHIJKLMNOP");
    assert_eq!(row_text(&lcd, 1), "QRSTUVWXYZ[\\]^_`");
}

#[test]
fn test_decrement_with_shift() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_SET_DRAM_ADDR | 5);
    lcd.send_command(CMD_ENTRY_MODE | CMD_ENTRY_MODE_DECREMENT | CMD_ENTRY_MODE_SHIFT);
    let shift_before = lcd.display_shift();

    lcd.write_byte(b'x');
    assert_eq!(lcd.read_address(), 4);
    assert_eq!(lcd.display_shift(), shift_before - 1);
    assert_eq!(lcd.ddram()[5], b'x');

    lcd.write_byte(b'y');
    assert_eq!(lcd.read_address(), 3);
    assert_eq!(lcd.display_shift(), shift_before - 2);
}

#[test]
fn test_increment_with_shift_keeps_cursor_column() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_ENTRY_MODE | CMD_ENTRY_MODE_INCREMENT | CMD_ENTRY_MODE_SHIFT);
    lcd.write_string("abc");
    assert_eq!(lcd.display_shift(), 3);
    // Text scrolled left; the first visible cell now shows address 3.
    assert_eq!(lcd.data_offset(0, 0), 3);
}

#[test]
fn test_display_shift_moves_window() {
    let mut lcd = init(16, 2);
    lcd.write_string("AB");
    lcd.send_command(CMD_SHIFT | CMD_SHIFT_DISPLAY | CMD_SHIFT_LEFT);
    assert_eq!(row_text(&lcd, 0).chars().next(), Some('B'));

    lcd.send_command(CMD_SHIFT | CMD_SHIFT_DISPLAY | CMD_SHIFT_RIGHT);
    lcd.send_command(CMD_SHIFT | CMD_SHIFT_DISPLAY | CMD_SHIFT_RIGHT);
    // Window now starts at the last byte of the segment.
    assert_eq!(lcd.data_offset(0, 0), 0x27);
    assert_eq!(&row_text(&lcd, 0)[..3], " AB");
}

#[test]
fn test_clear_turns_all_pixels_off() {
    let mut lcd = init(16, 2);
    lcd.write_string("################");
    lcd.update_pixels();
    assert!(lcd.snapshot().count(PixelState::On) > 0);

    lcd.send_command(CMD_CLEAR);
    lcd.update_pixels();
    assert_eq!(lcd.snapshot().count(PixelState::On), 0);
    assert_eq!(lcd.snapshot().count(PixelState::Off), 16 * 2 * 40);
}

#[test]
fn test_display_off_blanks_data_keeps_borders() {
    let mut lcd = init(16, 2);
    lcd.write_string("Hello");
    lcd.update_pixels();
    let borders_on = lcd.snapshot().count(PixelState::NoPixel);

    lcd.send_command(CMD_DISPLAY);
    lcd.update_pixels();
    assert_eq!(lcd.snapshot().count(PixelState::On), 0);
    assert_eq!(lcd.snapshot().count(PixelState::NoPixel), borders_on);
    // Memory untouched.
    assert_eq!(&row_text(&lcd, 0)[..5], "Hello");
}

#[test]
fn test_cgram_glyph_round_trip() {
    const SMILEY: [u8; 8] = [0x00, 0x0A, 0x0A, 0x00, 0x11, 0x0E, 0x00, 0x00];

    let mut lcd = init(16, 2);
    lcd.send_command(CMD_SET_CGRAM_ADDR | (2 * 8));
    assert_eq!(lcd.address_mode(), AddressMode::Cgram);
    lcd.write_bytes(&SMILEY);
    assert_eq!(lcd.read_address(), 3 * 8);

    lcd.send_command(CMD_SET_DRAM_ADDR);
    lcd.write_bytes(&[2, 10]);
    lcd.update_pixels();

    for col in 0..2u8 {
        let x0 = i32::from(col) * 6;
        for (y, row) in SMILEY.iter().enumerate() {
            for dx in 0..5 {
                let lit = row & (0x10 >> dx) != 0;
                let expected = if lit { PixelState::On } else { PixelState::Off };
                assert_eq!(
                    lcd.pixel_state(x0 + dx, y as i32),
                    expected,
                    "cell {col} dot ({dx}, {y})"
                );
            }
        }
    }
    assert_eq!(lcd.char_bits(2).rows(), &SMILEY);
}

#[test]
fn test_cgram_read_back() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_SET_CGRAM_ADDR | 0x3F);
    lcd.write_byte(0x15);
    lcd.write_byte(0x0A);
    // Address counter wrapped from 0x3F to 0x00 and on to 0x01.
    assert_eq!(lcd.read_address(), 0x01);
    lcd.send_command(CMD_SET_CGRAM_ADDR | 0x3F);
    assert_eq!(lcd.read_byte(), 0x15);
    assert_eq!(lcd.read_byte(), 0x0A);
    assert_eq!(lcd.cgram()[0x3F], 0x15);
}

#[test]
fn test_four_row_mapping() {
    let mut lcd = init(20, 4);
    assert_eq!(lcd.data_offset(0, 0), 0x00);
    assert_eq!(lcd.data_offset(1, 0), 0x40);
    assert_eq!(lcd.data_offset(2, 0), 0x14);
    assert_eq!(lcd.data_offset(3, 0), 0x54);

    for row in 0..4u8 {
        lcd.send_command(CMD_SET_DRAM_ADDR | lcd.data_offset(row, 0));
        lcd.write_byte(b'0' + row);
    }
    for row in 0..4u8 {
        assert_eq!(row_text(&lcd, row).as_bytes()[0], b'0' + row);
    }

    // Row 0 runs straight on into row 2.
    lcd.send_command(CMD_SET_DRAM_ADDR | 0x13);
    lcd.write_string("ab");
    assert_eq!(row_text(&lcd, 0).as_bytes()[19], b'a');
    assert_eq!(row_text(&lcd, 2).as_bytes()[0], b'b');
}

#[test]
fn test_one_line_module_uses_eighty_bytes() {
    let mut lcd = Lcd::new(16, 1, CharacterRom::A02).unwrap();
    lcd.send_command(CMD_SET_DRAM_ADDR | 0x4F);
    lcd.write_string("xy");
    assert_eq!(lcd.ddram()[0x4F], b'x');
    assert_eq!(lcd.ddram()[0x00], b'y');
}

#[test]
fn test_out_of_segment_address_folds() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_SET_DRAM_ADDR | 0x30);
    assert_eq!(lcd.read_address(), 0x30);
    lcd.write_byte(b'Q');
    assert_eq!(lcd.ddram()[0x08], b'Q');
    assert_eq!(lcd.read_address(), 0x09);
}

#[test]
fn test_extended_font_cell_height() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_FUNCTION | CMD_FUNCTION_2LINE | CMD_FUNCTION_EXT_MODE);
    lcd.update_pixels();
    assert_eq!(lcd.cell_rows(), 11);
    assert_eq!(lcd.num_pixels_y(), 23);
    assert_eq!(lcd.char_bits(b'A').height(), 11);

    // Tall user glyphs: 16 bytes each, code bit 0 ignored.
    lcd.send_command(CMD_SET_CGRAM_ADDR | 16);
    lcd.write_bytes(&[0x1F; 11]);
    lcd.send_command(CMD_SET_DRAM_ADDR);
    lcd.write_bytes(&[2, 3]);
    lcd.update_pixels();
    assert_eq!(lit_in_cell(&lcd, 0, 0), 55);
    assert_eq!(lit_in_cell(&lcd, 0, 1), 55);
}

#[test]
fn test_graphics_mode() {
    let mut lcd = init(16, 2);
    lcd.send_command(
        CMD_FUNCTION | CMD_FUNCTION_2LINE | CMD_FUNCTION_EXT_MODE | CMD_EXT_FUNCTION_GFX,
    );
    lcd.send_command(CMD_SET_CGRAM_ADDR | 1);
    lcd.send_command(CMD_SET_DRAM_ADDR | 5);
    lcd.write_bytes(&[0xFF, 0x01, 0x80]);
    assert_eq!(lcd.read_address(), 8);
    lcd.update_pixels();

    assert_eq!(lcd.cell_rows(), 8);
    assert_eq!(lcd.num_pixels_y(), 17);

    // Column 5 is the first dot column of cell (1, 1).
    let (x0, y0) = (6, 9);
    for y in 0..8 {
        assert_eq!(lcd.pixel_state(x0, y0 + y), PixelState::On);
    }
    assert_eq!(lcd.pixel_state(x0 + 1, y0), PixelState::On);
    assert_eq!(lcd.pixel_state(x0 + 1, y0 + 1), PixelState::Off);
    assert_eq!(lcd.pixel_state(x0 + 2, y0 + 7), PixelState::On);
    assert_eq!(lcd.pixel_state(x0 + 2, y0), PixelState::Off);
    assert_eq!(lit_in_cell(&lcd, 1, 1), 10);

    // Text underneath is ignored while graphics are shown.
    assert_eq!(lit_in_cell(&lcd, 0, 0), 0);

    lcd.send_command(CMD_SET_DRAM_ADDR | 5);
    assert_eq!(lcd.read_byte(), 0xFF);
    assert_eq!(lcd.read_byte_no_inc(), 0x01);
}

#[test]
fn test_underline_cursor() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_DISPLAY | CMD_DISPLAY_ON | CMD_DISPLAY_CURSOR);
    lcd.send_command(CMD_SET_DRAM_ADDR | 0x41);
    lcd.update_pixels();
    // Cell (1, 1): bottom row at y = 9 + 7.
    for x in 6..11 {
        assert_eq!(lcd.pixel_state(x, 16), PixelState::On);
    }
    assert_eq!(lit_in_cell(&lcd, 1, 1), 5);
    assert_eq!(lcd.snapshot().count(PixelState::On), 5);
}

#[test]
fn test_blinking_cursor_alternates() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_DISPLAY | CMD_DISPLAY_ON | CMD_DISPLAY_CURSOR_BLINK);
    lcd.update_pixels();
    assert_eq!(lit_in_cell(&lcd, 0, 0), 40);
    lcd.update_pixels();
    assert_eq!(lit_in_cell(&lcd, 0, 0), 0);
    lcd.update_pixels();
    assert_eq!(lit_in_cell(&lcd, 0, 0), 40);
}

#[test]
fn test_cursor_hidden_in_cgram_mode() {
    let mut lcd = init(16, 2);
    lcd.send_command(CMD_DISPLAY | CMD_DISPLAY_ON | CMD_DISPLAY_CURSOR);
    lcd.send_command(CMD_SET_CGRAM_ADDR);
    lcd.update_pixels();
    assert_eq!(lcd.snapshot().count(PixelState::On), 0);
}

#[test]
fn test_snapshot_not_updated_until_requested() {
    let mut lcd = init(16, 2);
    lcd.update_pixels();
    lcd.write_string("X");
    assert_eq!(lcd.snapshot().count(PixelState::On), 0);
    lcd.update_pixels();
    assert!(lcd.snapshot().count(PixelState::On) > 0);
}

#[test]
fn test_upper_rom_codes_render_per_mask() {
    let mut a00 = init(16, 2);
    let mut a02 = Lcd::new(16, 2, CharacterRom::A02).unwrap();
    a02.send_command(CMD_FUNCTION | CMD_FUNCTION_2LINE | CMD_FUNCTION_8BIT);
    a02.send_command(CMD_CLEAR);
    a02.send_command(CMD_DISPLAY | CMD_DISPLAY_ON);

    for lcd in [&mut a00, &mut a02] {
        lcd.write_bytes(&[0xB1, 0xC4, 0xE4, 0x80]);
        lcd.update_pixels();
    }

    // Katakana on A00, Latin-1 on A02; both masks fill these codes.
    for col in 0..3 {
        assert!(lit_in_cell(&a00, 0, col) > 0);
        assert!(lit_in_cell(&a02, 0, col) > 0);
    }
    assert_ne!(a00.char_bits(0xC4).rows(), a02.char_bits(0xC4).rows());

    // 0x80 is empty on A00 and Cyrillic on A02.
    assert_eq!(lit_in_cell(&a00, 0, 3), 0);
    assert!(lit_in_cell(&a02, 0, 3) > 0);
}
