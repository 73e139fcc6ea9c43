use stm32f3xx_hal as stm32f303;

use stm32f303::hal::digital::v2::OutputPin;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Push-pull pins wired to DIN, CLK and CS of the matrix driver
///
/// Chip select idles high and the clock idles low, so the first rising edge
/// seen by the driver is the one clocking the first bit in.
pub struct MatrixPins<DIN, CLK, CS> {
    din: DIN,
    clk: CLK,
    cs: CS,
}

impl<DIN, CLK, CS> MatrixPins<DIN, CLK, CS>
where
    DIN: OutputPin,
    CLK: OutputPin,
    CS: OutputPin,
{
    pub fn new(din: DIN, clk: CLK, cs: CS) -> Self {
        let mut pins = Self { din, clk, cs };
        pins.chip_select(true);
        pins.clock(false);
        pins.data(false);
        debug!("matrix lines idle");
        pins
    }

    pub fn data(&mut self, high: bool) {
        drive(&mut self.din, high);
    }

    pub fn clock(&mut self, high: bool) {
        drive(&mut self.clk, high);
    }

    pub fn chip_select(&mut self, high: bool) {
        drive(&mut self.cs, high);
    }
}

/// GPIO writes on this chip are infallible
fn drive<P: OutputPin>(pin: &mut P, high: bool) {
    let _ = if high { pin.set_high() } else { pin.set_low() };
}
