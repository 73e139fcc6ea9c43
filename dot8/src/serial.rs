use crate::command::Command;
use crate::context::{Context, Line};

/// Bit-banged, write-only link to the matrix driver
///
/// Holds the context mutably for as long as it lives, so nothing else can
/// touch the lines in the middle of a command.
///
/// There is no acknowledgement from the driver: a disconnected or noisy line
/// goes unnoticed and simply leaves the display stale.
pub struct SerialChannel<'a, C: Context> {
    ctx: &'a mut C,
}

impl<'a, C: Context> SerialChannel<'a, C> {
    pub fn new(ctx: &'a mut C) -> Self {
        Self { ctx }
    }

    /// Shift a byte out MSB-first
    ///
    /// Each bit is put on the data line while the clock is low and latched by
    /// the following rising edge.
    pub fn send_byte(&mut self, byte: u8) {
        for i in (0..8).rev() {
            self.ctx.set_line(Line::Clock, false);
            self.ctx.set_line(Line::Data, byte >> i & 1 == 1);
            self.ctx.set_line(Line::Clock, true);
        }
    }

    /// Frame `addr` and `data` in one chip select window
    pub fn send_cmd(&mut self, addr: u8, data: u8) {
        self.ctx.set_line(Line::ChipSelect, false);
        self.send_byte(addr);
        self.send_byte(data);
        self.ctx.set_line(Line::ChipSelect, true);
    }

    pub fn send(&mut self, command: Command) {
        self.send_cmd(command.address(), command.data);
    }
}
