//! Register map and command words of the MAX7219 matrix driver
//!
//! Every transfer to the driver is a single 16-bit word sent MSB-first: the
//! register address in the high byte, the value in the low byte.

use core::convert::TryFrom;

/// Registers of the driver that are reachable over the serial lines
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Register {
    /// Used when cascading drivers, ignored by a single one
    NoOp,
    /// Row data, `Digit(0)` holds the top row and lives at address 0x01
    Digit(u8),
    /// BCD decoding of digit registers, 0 for raw bit addressing
    DecodeMode,
    /// Segment current, 0 (dimmest) to 15 (brightest)
    Intensity,
    /// Number of scanned digits minus one
    ScanLimit,
    /// 0 shuts the display down, 1 is normal operation
    Shutdown,
    /// 1 lights every LED regardless of the digit registers
    DisplayTest,
}

impl Register {
    pub fn address(self) -> u8 {
        match self {
            Register::NoOp => 0x00,
            Register::Digit(row) => 0x01 + (row & 0x07),
            Register::DecodeMode => 0x09,
            Register::Intensity => 0x0A,
            Register::ScanLimit => 0x0B,
            Register::Shutdown => 0x0C,
            Register::DisplayTest => 0x0F,
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = &'static str;

    fn try_from(address: u8) -> Result<Self, Self::Error> {
        match address {
            0x00 => Ok(Register::NoOp),
            0x01..=0x08 => Ok(Register::Digit(address - 0x01)),
            0x09 => Ok(Register::DecodeMode),
            0x0A => Ok(Register::Intensity),
            0x0B => Ok(Register::ScanLimit),
            0x0C => Ok(Register::Shutdown),
            0x0F => Ok(Register::DisplayTest),
            _ => Err("Unknown register address"),
        }
    }
}

/// A single write to one register of the driver
///
/// Examples:
/// ```
/// use core::convert::TryFrom;
/// use dot8::command::{Command, Register};
///
/// let command = Command::new(Register::Digit(3), 0b0000_0101);
/// assert_eq!(command.raw(), 0x0405);
/// assert_eq!(Command::try_from(0x0405), Ok(command));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Command {
    pub register: Register,
    pub data: u8,
}

impl Command {
    pub const fn new(register: Register, data: u8) -> Self {
        Self { register, data }
    }

    pub fn address(&self) -> u8 {
        self.register.address()
    }

    /// Word as it travels over the data line
    pub fn raw(&self) -> u16 {
        (self.address() as u16) << 8 | self.data as u16
    }

    fn read_address(raw: u16) -> u8 {
        (raw >> 8 & 0x00FFu16) as u8
    }

    fn read_data(raw: u16) -> u8 {
        (raw & 0x00FFu16) as u8
    }
}

impl TryFrom<u16> for Command {
    type Error = &'static str;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Register::try_from(Self::read_address(raw))
            .map(|register| Command::new(register, Self::read_data(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_address() {
        assert_eq!(0xBEu8, Command::read_address(0xBEEFu16));
    }

    #[test]
    fn should_read_data() {
        assert_eq!(0xEFu8, Command::read_data(0xBEEFu16));
    }

    #[test]
    fn digits_are_one_indexed() {
        assert_eq!(Register::Digit(0).address(), 0x01);
        assert_eq!(Register::Digit(7).address(), 0x08);
        assert_eq!(Register::try_from(0x01), Ok(Register::Digit(0)));
        assert_eq!(Register::try_from(0x08), Ok(Register::Digit(7)));
    }

    #[test]
    #[rustfmt::skip]
    fn should_decode_all_registers() {
        use super::Register::*;
        let words = [
            (0x0000u16, Command::new(NoOp, 0x00)),
            (0x0105u16, Command::new(Digit(0), 0x05)),
            (0x08FFu16, Command::new(Digit(7), 0xFF)),
            (0x0900u16, Command::new(DecodeMode, 0x00)),
            (0x0A08u16, Command::new(Intensity, 0x08)),
            (0x0B07u16, Command::new(ScanLimit, 0x07)),
            (0x0C01u16, Command::new(Shutdown, 0x01)),
            (0x0F00u16, Command::new(DisplayTest, 0x00)),
        ];

        for &(raw, expected) in &words {
            assert_eq!(Ok(expected), Command::try_from(raw));
            assert_eq!(raw, expected.raw());
        }
    }

    #[test]
    fn should_reject_unknown_registers() {
        assert_eq!(Command::try_from(0x0D00), Err("Unknown register address"));
        assert_eq!(Command::try_from(0x0E00), Err("Unknown register address"));
        assert_eq!(Command::try_from(0x1000), Err("Unknown register address"));
    }
}
