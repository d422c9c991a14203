//! Parallel bus view of the controller
//!
//! A CPU talks to an HD44780U through the RS and R/W lines plus an 8-bit
//! data bus. [`LcdInterface`] exposes exactly that surface so a machine
//! emulator can map the controller into its I/O space without knowing about
//! commands or DDRAM.
//!
//! | RS | R/W | Operation |
//! |----|-----|-----------|
//! | 0  | 0   | write instruction |
//! | 0  | 1   | read busy flag and address counter |
//! | 1  | 0   | write data |
//! | 1  | 1   | read data |

use crate::Lcd;

/// Busy flag bit in the status byte; never set, there is no timing model
pub const BUSY_FLAG: u8 = 0x80;

/// Register select line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterSelect {
    /// RS low: instruction register / status
    Instruction,
    /// RS high: DDRAM, CGRAM or graphics RAM data
    Data,
}

/// Bus-level access to a character LCD controller
///
/// # Example
///
/// ```
/// use hd44780_emulator::{Lcd, LcdInterface, RegisterSelect};
/// use hd44780_specs::CharacterRom;
///
/// let mut lcd = Lcd::new(16, 2, CharacterRom::A00).unwrap();
/// lcd.write(RegisterSelect::Instruction, 0x80 | 0x40);
/// lcd.write(RegisterSelect::Data, b'A');
/// assert_eq!(lcd.read(RegisterSelect::Instruction), 0x41);
/// ```
pub trait LcdInterface {
    /// Drive a byte onto the bus with R/W low
    fn write(&mut self, register: RegisterSelect, value: u8);

    /// Latch a byte from the bus with R/W high
    fn read(&mut self, register: RegisterSelect) -> u8;
}

impl LcdInterface for Lcd {
    fn write(&mut self, register: RegisterSelect, value: u8) {
        match register {
            RegisterSelect::Instruction => self.send_command(value),
            RegisterSelect::Data => self.write_byte(value),
        }
    }

    fn read(&mut self, register: RegisterSelect) -> u8 {
        match register {
            RegisterSelect::Instruction => self.read_address() & !BUSY_FLAG,
            RegisterSelect::Data => self.read_byte(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use hd44780_specs::CharacterRom;

    fn bus() -> Lcd {
        Lcd::new(16, 2, CharacterRom::A00).unwrap()
    }

    #[test]
    fn test_status_read_reports_address() {
        let mut lcd = bus();
        lcd.write(RegisterSelect::Instruction, 0x80 | 0x05);
        assert_eq!(lcd.read(RegisterSelect::Instruction), 0x05);
    }

    #[test]
    fn test_busy_flag_never_set() {
        let mut lcd = bus();
        lcd.write(RegisterSelect::Instruction, 0xFF);
        assert_eq!(lcd.read(RegisterSelect::Instruction) & BUSY_FLAG, 0);
    }

    #[test]
    fn test_data_round_trip_over_bus() {
        let mut lcd = bus();
        for &byte in b"bus" {
            lcd.write(RegisterSelect::Data, byte);
        }
        lcd.write(RegisterSelect::Instruction, 0x80);
        let read: Vec<u8> = (0..3).map(|_| lcd.read(RegisterSelect::Data)).collect();
        assert_eq!(read, b"bus");
    }
}
