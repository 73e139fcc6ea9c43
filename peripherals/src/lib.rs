//! Board support for the handheld on an STM32F303: matrix lines, buttons,
//! the millisecond clock and logging.
#![no_std]

use stm32f3xx_hal as stm32f303;

use stm32f303::{flash, pac, rcc, time::MegaHertz};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub mod buttons;
pub mod clock;
pub mod lines;
pub mod logger;

pub use buttons::Buttons;
pub use clock::Millis;
pub use lines::MatrixPins;

/// Freeze the clock tree with `sysclk` as the core frequency
pub fn freeze_clocks(sysclk: MegaHertz, cfgr: rcc::CFGR, flash: &mut flash::Parts) -> rcc::Clocks {
    let clocks = cfgr.sysclk(sysclk).freeze(&mut flash.acr);
    debug!("sysclk: {}hz", clocks.sysclk().0);
    clocks
}

/// tpiu is a bridge for ITM, it's asynchronous clock prescaller
/// has to be updated, otherwise logging through ITM won't work
pub trait ClocksExt {
    fn set_tpiu_async_cpr(self, baud_rate: MegaHertz) -> Self;
}

impl ClocksExt for rcc::Clocks {
    fn set_tpiu_async_cpr(self, baud_rate: MegaHertz) -> Self {
        let prescaler = self.hclk().0 / (baud_rate.0 * 1_000_000) - 1;
        unsafe { (*pac::TPIU::ptr()).acpr.write(prescaler) }
        trace!("tpiu async prescaler: {} at {}mhz", prescaler, baud_rate.0);
        self
    }
}
