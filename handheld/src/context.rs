use stm32f3xx_hal::hal::digital::v2::{InputPin, OutputPin};

use dot8::{Context, Line};
use peripherals::{Buttons, MatrixPins, Millis};

pub(crate) struct BoardContext<DIN, CLK, CS, L, R> {
    pub pins: MatrixPins<DIN, CLK, CS>,
    pub buttons: Buttons<L, R>,
    pub clock: Millis,
}

impl<DIN, CLK, CS, L, R> Context for BoardContext<DIN, CLK, CS, L, R>
where
    DIN: OutputPin,
    CLK: OutputPin,
    CS: OutputPin,
    L: InputPin,
    R: InputPin,
{
    fn set_line(&mut self, line: Line, high: bool) {
        match line {
            Line::Data => self.pins.data(high),
            Line::Clock => self.pins.clock(high),
            Line::ChipSelect => self.pins.chip_select(high),
        }
    }

    fn read_buttons(&mut self) -> (bool, bool) {
        self.buttons.read()
    }

    fn millis(&mut self) -> u32 {
        self.clock.now()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.delay_ms(ms)
    }
}
