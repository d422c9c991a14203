//! Instruction register decoding
//!
//! Command bytes are decoded the way the controller's instruction decoder
//! does it: the most significant set bit selects the instruction and the bits
//! below it are its parameters. A byte is decoded once into a [`Command`] and
//! the controller dispatches on that.

use crate::address::Direction;
use crate::glyph_store::FontSize;

// ── Command bit layout ───────────────────────────────────────────────────────

/// Clear display: blank DDRAM, home cursor
pub const CMD_CLEAR: u8 = 0b0000_0001;

/// Return home: cursor and display shift to origin
pub const CMD_HOME: u8 = 0b0000_0010;

/// Entry mode set
pub const CMD_ENTRY_MODE: u8 = 0b0000_0100;
/// Entry mode: move the address forward after each access
pub const CMD_ENTRY_MODE_INCREMENT: u8 = 0b0000_0010;
/// Entry mode: move the address backward after each access
pub const CMD_ENTRY_MODE_DECREMENT: u8 = 0b0000_0000;
/// Entry mode: shift the display with every DDRAM write
pub const CMD_ENTRY_MODE_SHIFT: u8 = 0b0000_0001;

/// Display on/off control
pub const CMD_DISPLAY: u8 = 0b0000_1000;
/// Display control: panel on
pub const CMD_DISPLAY_ON: u8 = 0b0000_0100;
/// Display control: underline cursor
pub const CMD_DISPLAY_CURSOR: u8 = 0b0000_0010;
/// Display control: blinking block cursor
pub const CMD_DISPLAY_CURSOR_BLINK: u8 = 0b0000_0001;

/// Cursor or display shift
pub const CMD_SHIFT: u8 = 0b0001_0000;
/// Shift: move the cursor
pub const CMD_SHIFT_CURSOR: u8 = 0b0000_0000;
/// Shift: move the whole display
pub const CMD_SHIFT_DISPLAY: u8 = 0b0000_1000;
/// Shift direction: left
pub const CMD_SHIFT_LEFT: u8 = 0b0000_0000;
/// Shift direction: right
pub const CMD_SHIFT_RIGHT: u8 = 0b0000_0100;

/// Function set
pub const CMD_FUNCTION: u8 = 0b0010_0000;
/// Function set: 8-bit interface (accepted, no effect on the logical model)
pub const CMD_FUNCTION_8BIT: u8 = 0b0001_0000;
/// Function set: one display line
pub const CMD_FUNCTION_1LINE: u8 = 0b0000_0000;
/// Function set: two display lines
pub const CMD_FUNCTION_2LINE: u8 = 0b0000_1000;
/// Function set: standard instruction set (5×8 font)
pub const CMD_FUNCTION_STD_MODE: u8 = 0b0000_0000;
/// Function set: extended instruction set (5×10 font, graphics bit live)
pub const CMD_FUNCTION_EXT_MODE: u8 = 0b0000_0100;

/// Extended function: text rendering
pub const CMD_EXT_FUNCTION_STD: u8 = 0b0000_0000;
/// Extended function: graphics RAM rendering
pub const CMD_EXT_FUNCTION_GFX: u8 = 0b0000_0010;

/// Set CGRAM address (OR with a 6-bit address)
pub const CMD_SET_CGRAM_ADDR: u8 = 0b0100_0000;

/// Set DDRAM address (OR with a 7-bit address)
pub const CMD_SET_DRAM_ADDR: u8 = 0b1000_0000;

/// Address bits carried by SET_CGRAM_ADDR
pub const CGRAM_ADDR_MASK: u8 = 0x3F;

/// Address bits carried by SET_DRAM_ADDR
pub const DDRAM_ADDR_MASK: u8 = 0x7F;

// ── Decoded command parameters ───────────────────────────────────────────────

/// Entry mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMode {
    /// Address moves forward (`true`) or backward after each access
    pub increment: bool,
    /// Display shifts along with every DDRAM write
    pub shift: bool,
}

impl EntryMode {
    /// Power-on entry mode: increment, no shift
    pub const POWER_ON: Self = Self {
        increment: true,
        shift: false,
    };

    /// Direction the address counter moves after a data access
    pub const fn direction(self) -> Direction {
        if self.increment {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

impl Default for EntryMode {
    fn default() -> Self {
        Self::POWER_ON
    }
}

/// Display on/off control flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayControl {
    /// Panel shows data
    pub on: bool,
    /// Underline cursor visible
    pub cursor: bool,
    /// Block cursor blinks
    pub blink: bool,
}

/// What a shift instruction moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftTarget {
    /// Move the address counter only
    Cursor,
    /// Move the visible window over DDRAM
    Display,
}

/// Number of display lines selected by function set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// One line, one 80-byte DDRAM segment
    #[default]
    One,
    /// Two lines, two 40-byte DDRAM segments
    Two,
}

/// Rendering mode selected by the extended function set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtMode {
    /// Characters from DDRAM through the glyph store
    #[default]
    Text,
    /// Raw bitmap from graphics RAM
    Graphics,
}

/// Function set state held by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionFlags {
    /// One or two DDRAM lines
    pub lines: LineMode,
    /// Extended instruction set (5×10 font)
    pub extended: bool,
    /// Graphics RAM rendering
    pub graphics: bool,
}

impl FunctionFlags {
    /// Power-on function set: one line, 5×8 font, text
    pub const POWER_ON: Self = Self {
        lines: LineMode::One,
        extended: false,
        graphics: false,
    };

    /// Character font implied by the instruction set
    pub const fn font(self) -> FontSize {
        if self.extended {
            FontSize::Dots5x10
        } else {
            FontSize::Dots5x8
        }
    }
}

/// A decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Blank DDRAM and home the cursor
    Clear,
    /// Home the cursor and undo display shift
    Home,
    /// Entry mode set
    EntryMode(EntryMode),
    /// Display on/off control
    Display(DisplayControl),
    /// Cursor or display shift
    Shift {
        /// What moves
        target: ShiftTarget,
        /// Which way
        direction: Direction,
    },
    /// Function set with the standard instruction set
    Function {
        /// Line count
        lines: LineMode,
    },
    /// Function set with the extended instruction set
    ExtFunction {
        /// Line count
        lines: LineMode,
        /// Text or graphics rendering
        mode: ExtMode,
    },
    /// Select CGRAM and load the address counter
    SetCgramAddr(u8),
    /// Select DDRAM and load the address counter
    SetDramAddr(u8),
}

impl Command {
    /// Decode a command byte, highest set bit first
    ///
    /// Returns `None` for `0x00`, which selects no instruction.
    pub const fn decode(byte: u8) -> Option<Self> {
        const fn bit(byte: u8, bits: u8) -> bool {
            byte & bits != 0
        }

        let command = if bit(byte, CMD_SET_DRAM_ADDR) {
            Command::SetDramAddr(byte & DDRAM_ADDR_MASK)
        } else if bit(byte, CMD_SET_CGRAM_ADDR) {
            Command::SetCgramAddr(byte & CGRAM_ADDR_MASK)
        } else if bit(byte, CMD_FUNCTION) {
            let lines = if bit(byte, CMD_FUNCTION_2LINE) {
                LineMode::Two
            } else {
                LineMode::One
            };
            if bit(byte, CMD_FUNCTION_EXT_MODE) {
                let mode = if bit(byte, CMD_EXT_FUNCTION_GFX) {
                    ExtMode::Graphics
                } else {
                    ExtMode::Text
                };
                Command::ExtFunction { lines, mode }
            } else {
                Command::Function { lines }
            }
        } else if bit(byte, CMD_SHIFT) {
            Command::Shift {
                target: if bit(byte, CMD_SHIFT_DISPLAY) {
                    ShiftTarget::Display
                } else {
                    ShiftTarget::Cursor
                },
                direction: if bit(byte, CMD_SHIFT_RIGHT) {
                    Direction::Right
                } else {
                    Direction::Left
                },
            }
        } else if bit(byte, CMD_DISPLAY) {
            Command::Display(DisplayControl {
                on: bit(byte, CMD_DISPLAY_ON),
                cursor: bit(byte, CMD_DISPLAY_CURSOR),
                blink: bit(byte, CMD_DISPLAY_CURSOR_BLINK),
            })
        } else if bit(byte, CMD_ENTRY_MODE) {
            Command::EntryMode(EntryMode {
                increment: bit(byte, CMD_ENTRY_MODE_INCREMENT),
                shift: bit(byte, CMD_ENTRY_MODE_SHIFT),
            })
        } else if bit(byte, CMD_HOME) {
            Command::Home
        } else if bit(byte, CMD_CLEAR) {
            Command::Clear
        } else {
            return None;
        };
        Some(command)
    }

    /// Encode back to the canonical command byte
    ///
    /// Bits the decoder ignores (e.g. the interface width) come back as zero.
    pub const fn encode(self) -> u8 {
        const fn flag(on: bool, bits: u8) -> u8 {
            if on {
                bits
            } else {
                0
            }
        }

        match self {
            Command::Clear => CMD_CLEAR,
            Command::Home => CMD_HOME,
            Command::EntryMode(entry) => {
                CMD_ENTRY_MODE
                    | flag(entry.increment, CMD_ENTRY_MODE_INCREMENT)
                    | flag(entry.shift, CMD_ENTRY_MODE_SHIFT)
            }
            Command::Display(display) => {
                CMD_DISPLAY
                    | flag(display.on, CMD_DISPLAY_ON)
                    | flag(display.cursor, CMD_DISPLAY_CURSOR)
                    | flag(display.blink, CMD_DISPLAY_CURSOR_BLINK)
            }
            Command::Shift { target, direction } => {
                CMD_SHIFT
                    | flag(matches!(target, ShiftTarget::Display), CMD_SHIFT_DISPLAY)
                    | flag(matches!(direction, Direction::Right), CMD_SHIFT_RIGHT)
            }
            Command::Function { lines } => {
                CMD_FUNCTION | flag(matches!(lines, LineMode::Two), CMD_FUNCTION_2LINE)
            }
            Command::ExtFunction { lines, mode } => {
                CMD_FUNCTION
                    | CMD_FUNCTION_EXT_MODE
                    | flag(matches!(lines, LineMode::Two), CMD_FUNCTION_2LINE)
                    | flag(matches!(mode, ExtMode::Graphics), CMD_EXT_FUNCTION_GFX)
            }
            Command::SetCgramAddr(address) => CMD_SET_CGRAM_ADDR | (address & CGRAM_ADDR_MASK),
            Command::SetDramAddr(address) => CMD_SET_DRAM_ADDR | (address & DDRAM_ADDR_MASK),
        }
    }

    /// Instruction name as printed in the datasheet's instruction table
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Clear => "Clear display",
            Command::Home => "Return home",
            Command::EntryMode(_) => "Entry mode set",
            Command::Display(_) => "Display on/off control",
            Command::Shift { .. } => "Cursor or display shift",
            Command::Function { .. } => "Function set",
            Command::ExtFunction { .. } => "Extended function set",
            Command::SetCgramAddr(_) => "Set CGRAM address",
            Command::SetDramAddr(_) => "Set DDRAM address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_a_command() {
        assert_eq!(Command::decode(0x00), None);
    }

    #[test]
    fn test_single_bit_commands() {
        assert_eq!(Command::decode(CMD_CLEAR), Some(Command::Clear));
        assert_eq!(Command::decode(CMD_HOME), Some(Command::Home));
        // Bit 0 is don't-care for return home.
        assert_eq!(Command::decode(CMD_HOME | 0x01), Some(Command::Home));
    }

    #[test]
    fn test_highest_bit_wins() {
        // 0xFF selects SET_DRAM_ADDR; everything below is its address.
        assert_eq!(Command::decode(0xFF), Some(Command::SetDramAddr(0x7F)));
        assert_eq!(Command::decode(0x7F), Some(Command::SetCgramAddr(0x3F)));
        assert_eq!(
            Command::decode(0x3F),
            Some(Command::ExtFunction {
                lines: LineMode::Two,
                mode: ExtMode::Graphics,
            })
        );
    }

    #[test]
    fn test_function_set_ignores_interface_width() {
        let byte = CMD_FUNCTION | CMD_FUNCTION_2LINE | CMD_FUNCTION_8BIT;
        assert_eq!(
            Command::decode(byte),
            Some(Command::Function {
                lines: LineMode::Two
            })
        );
    }

    #[test]
    fn test_graphics_bit_needs_ext_mode() {
        let byte = CMD_FUNCTION | CMD_EXT_FUNCTION_GFX;
        assert_eq!(
            Command::decode(byte),
            Some(Command::Function {
                lines: LineMode::One
            })
        );
    }

    #[test]
    fn test_shift_fields() {
        let byte = CMD_SHIFT | CMD_SHIFT_DISPLAY | CMD_SHIFT_RIGHT;
        assert_eq!(
            Command::decode(byte),
            Some(Command::Shift {
                target: ShiftTarget::Display,
                direction: Direction::Right,
            })
        );
        assert_eq!(
            Command::decode(CMD_SHIFT | CMD_SHIFT_CURSOR | CMD_SHIFT_LEFT),
            Some(Command::Shift {
                target: ShiftTarget::Cursor,
                direction: Direction::Left,
            })
        );
    }

    #[test]
    fn test_display_and_entry_flags() {
        assert_eq!(
            Command::decode(CMD_DISPLAY | CMD_DISPLAY_ON | CMD_DISPLAY_CURSOR_BLINK),
            Some(Command::Display(DisplayControl {
                on: true,
                cursor: false,
                blink: true,
            }))
        );
        assert_eq!(
            Command::decode(CMD_ENTRY_MODE | CMD_ENTRY_MODE_DECREMENT | CMD_ENTRY_MODE_SHIFT),
            Some(Command::EntryMode(EntryMode {
                increment: false,
                shift: true,
            }))
        );
    }

    #[test]
    fn test_every_byte_reencodes_to_same_command() {
        for byte in 0..=u8::MAX {
            if let Some(command) = Command::decode(byte) {
                assert_eq!(
                    Command::decode(command.encode()),
                    Some(command),
                    "byte {byte:#04x}"
                );
            }
        }
    }

    #[test]
    fn test_function_flags_font() {
        assert_eq!(FunctionFlags::POWER_ON.font(), FontSize::Dots5x8);
        let ext = FunctionFlags {
            extended: true,
            ..FunctionFlags::POWER_ON
        };
        assert_eq!(ext.font(), FontSize::Dots5x10);
        assert_eq!(FunctionFlags::default(), FunctionFlags::POWER_ON);
    }

    #[test]
    fn test_entry_direction() {
        assert_eq!(EntryMode::POWER_ON.direction(), Direction::Right);
        let dec = EntryMode {
            increment: false,
            shift: false,
        };
        assert_eq!(dec.direction(), Direction::Left);
    }
}
