//! Millisecond time base driven by the SysTick exception
//!
//! The firmware must forward its `SysTick` handler to [`tick`]:
//!
//! ```ignore
//! #[exception]
//! fn SysTick() {
//!     peripherals::clock::tick();
//! }
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::{syst::SystClkSource, SYST};
use stm32f3xx_hal as stm32f303;

use stm32f303::rcc;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

static MILLIS: AtomicU32 = AtomicU32::new(0);

/// Count one millisecond, called from the SysTick handler
#[inline]
pub fn tick() {
    MILLIS.fetch_add(1, Ordering::Relaxed);
}

/// Owner of the SysTick timer while it is generating millisecond ticks
pub struct Millis {
    _syst: SYST,
}

impl Millis {
    /// Configure SysTick to interrupt once per millisecond of core clock
    pub fn start(mut syst: SYST, clocks: rcc::Clocks) -> Self {
        let reload = clocks.sysclk().0 / 1_000 - 1;
        trace!("systick reload: {}", reload);
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(reload);
        syst.clear_current();
        syst.enable_counter();
        syst.enable_interrupt();
        Self { _syst: syst }
    }

    /// Milliseconds since `start`, wrapping at `u32::MAX`
    pub fn now(&self) -> u32 {
        MILLIS.load(Ordering::Relaxed)
    }

    /// Sleep between ticks until `ms` milliseconds passed
    pub fn delay_ms(&self, ms: u32) {
        let started = self.now();
        while self.now().wrapping_sub(started) < ms {
            cortex_m::asm::wfi();
        }
    }
}
