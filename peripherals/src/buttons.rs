use stm32f3xx_hal as stm32f303;

use stm32f303::hal::digital::v2::InputPin;

/// The two buttons of the handheld
///
/// Both are wired between the pin and ground with the internal pull-up
/// enabled, so a pressed button reads low. A pin that fails to read counts as
/// released.
pub struct Buttons<L, R> {
    left: L,
    right: R,
}

impl<L, R> Buttons<L, R>
where
    L: InputPin,
    R: InputPin,
{
    /// Pins must already be configured as pull-up inputs
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// `(left, right)`, `true` when pressed
    pub fn read(&self) -> (bool, bool) {
        (
            self.left.is_low().unwrap_or(false),
            self.right.is_low().unwrap_or(false),
        )
    }
}
