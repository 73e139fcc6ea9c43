//! Context for accessing functionalities of the device that `DotPlatform`
//! runs on.
//!
//! The core never touches hardware directly. Pins, the millisecond clock and
//! blocking delays are all reached through this trait, so the same code drives
//! the real board and the recording context used by the tests.

/// Serial lines between the microcontroller and the matrix driver
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Line {
    /// DIN, sampled by the driver on the rising edge of the clock
    Data,
    /// CLK
    Clock,
    /// CS (LOAD), active low, latches the shifted word on its rising edge
    ChipSelect,
}

/// Trait aggregating platform functionalities
pub trait Context {
    /// Drive one of the serial lines high or low
    ///
    /// Called by the display for every bit it shifts out
    fn set_line(&mut self, line: Line, high: bool);
    /// Get the state of `(left, right)` buttons, `true` meaning pressed
    ///
    /// Buttons are wired active low; implementors invert the pin level.
    /// Called by `DotPlatform::update` once per frame
    fn read_buttons(&mut self) -> (bool, bool);
    /// Monotonic millisecond counter, wrapping at `u32::MAX`
    fn millis(&mut self) -> u32;
    /// Block the calling thread for `ms` milliseconds
    ///
    /// Called by `DotPlatform::wait_frame` when a frame finished early
    fn delay_ms(&mut self, ms: u32);
}
