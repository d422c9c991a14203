//! Hello LCD Example
//!
//! Drives a 16×2 module through the same byte sequence a microcontroller
//! would send, then prints the rendered pixel grid to the console:
//! ' ' for cell borders, '.' for unlit dots, '#' for lit dots.
//!
//! Pass a path to also save a PNG screenshot.
//!
//! Run with: cargo run --example hello_lcd [-- out.png]
//! Set RUST_LOG=hd44780_emulator=trace to watch every byte.

#![allow(clippy::unwrap_used)]

use hd44780_emulator::command::*;
use hd44780_emulator::{CharacterRom, Lcd, Palette};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut lcd = Lcd::new(16, 2, CharacterRom::A00).unwrap();

    // Send it commands
    lcd.send_command(CMD_FUNCTION | CMD_FUNCTION_2LINE | CMD_FUNCTION_8BIT);
    lcd.send_command(CMD_CLEAR);
    lcd.send_command(CMD_HOME);
    lcd.send_command(CMD_DISPLAY | CMD_DISPLAY_ON);

    // Send it data
    for &byte in b"Hello" {
        lcd.write_byte(byte);
    }
    lcd.write_string(" world!");

    // Second line, via the row/column mapping
    lcd.send_command(CMD_SET_DRAM_ADDR | lcd.data_offset(1, 2));
    lcd.write_string("HD44780U");

    // Then periodically, render it
    lcd.update_pixels();

    for y in 0..i32::from(lcd.num_pixels_y()) {
        let line: String = (0..i32::from(lcd.num_pixels_x()))
            .map(|x| lcd.pixel_state(x, y).as_char())
            .collect();
        println!("{line}");
    }

    if let Some(path) = std::env::args().nth(1) {
        lcd.screenshot(&path, &Palette::WhiteOnBlue.scheme()).unwrap();
        println!("\nSaved {path}");
    }
}
