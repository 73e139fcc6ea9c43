use log::{debug, trace};

use crate::command::{Command, Register};
use crate::context::Context;
use crate::frame::{Frame, HEIGHT};
use crate::serial::SerialChannel;

pub const MAX_BRIGHTNESS: u8 = 15;
pub const DEFAULT_BRIGHTNESS: u8 = 8;

/// 8x8 matrix behind a MAX7219 driver
///
/// Owns the frame the game draws into. Nothing reaches the LEDs until `show`
/// pushes it. The driver's control registers are write-only and are not
/// mirrored here.
pub struct Display {
    frame: Frame,
    brightness: u8,
}

impl Display {
    pub fn new() -> Self {
        Self::with_brightness(DEFAULT_BRIGHTNESS)
    }

    /// Display whose `begin` programs `brightness` instead of the default
    pub fn with_brightness(brightness: u8) -> Self {
        Self {
            frame: Frame::new(),
            brightness: brightness.min(MAX_BRIGHTNESS),
        }
    }

    /// Bring the driver out of shutdown with a blank screen
    ///
    /// Shutdown is left last so the driver becomes active only once decoding,
    /// scan limit and intensity are already valid.
    pub fn begin<C: Context>(&mut self, ctx: &mut C) {
        debug!("initializing matrix, brightness: {}", self.brightness);
        let mut channel = SerialChannel::new(ctx);
        [
            Command::new(Register::DisplayTest, 0x00),
            Command::new(Register::DecodeMode, 0x00),
            Command::new(Register::ScanLimit, (HEIGHT - 1) as u8),
            Command::new(Register::Intensity, self.brightness),
            Command::new(Register::Shutdown, 0x01),
        ]
        .iter()
        .for_each(|&command| channel.send(command));

        self.frame.clear();
        self.show(ctx);
    }

    /// Push every row of the frame to its digit register
    pub fn show<C: Context>(&self, ctx: &mut C) {
        trace!("pushing frame {:02x?}", self.frame.rows());
        let mut channel = SerialChannel::new(ctx);
        self.frame
            .rows()
            .iter()
            .enumerate()
            .for_each(|(row, &bits)| channel.send(Command::new(Register::Digit(row as u8), bits)));
    }

    /// Set LED intensity, levels above 15 are clamped
    ///
    /// Takes effect immediately on what the driver currently shows, the frame
    /// does not need to be pushed again.
    pub fn set_brightness<C: Context>(&mut self, ctx: &mut C, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
        trace!("brightness: {} (requested {})", self.brightness, level);
        SerialChannel::new(ctx).send(Command::new(Register::Intensity, self.brightness));
    }

    /// Last brightness sent or configured
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
