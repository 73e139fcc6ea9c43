//! `log` facade backends for the board, built on `cortex_m_log`
//!
//! - ITM, read with `itmdump` through openocd
//! - semihosting stdout, slow but needs no extra wiring
//!
//! ```no_run
//! # use peripherals::logger::*;
//! # use log::info;
//! let p = cortex_m::Peripherals::take().unwrap();
//!
//! let logger = create_itm_logger::<InterruptFree>(LevelFilter::Info, p.ITM);
//! unsafe { init(&logger) }
//!
//! info!("matrix up");
//! ```

use core::marker::{Send, Sync};
use cortex_m::peripheral::ITM;
use cortex_m_log::{
    destination,
    log::{trick_init, Logger},
    modes::InterruptModer,
    printer::{
        itm::ItmSync,
        semihosting::{hio::HStdout, Semihosting},
        Printer,
    },
};

pub use log::LevelFilter;

pub use cortex_m_log::modes::{InterruptFree, InterruptOk};

/// Logger writing to ITM stimulus port 0
///
/// openocd:
/// ```gdb
/// monitor tpiu config internal itm.out uart off 36000000
/// monitor itm port 0 on
/// ```
pub fn create_itm_logger<M>(level: LevelFilter, itm_reg: ITM) -> Logger<ItmSync<M>>
where
    M: InterruptModer + Send + Sync + 'static,
{
    Logger {
        level,
        inner: ItmSync::<M>::new(destination::Itm::new(itm_reg)),
    }
}

/// Logger writing to the debugger's stdout, requires
/// `monitor arm semihosting enable`
///
/// Used by the firmware when built with its `semihosting` feature. Fails
/// when no debugger answers the stdout request.
pub fn create_semihosting_logger<M>(
    level: LevelFilter,
) -> Result<Logger<Semihosting<M, HStdout>>, &'static str>
where
    M: InterruptModer + Send + Sync + 'static,
{
    let inner = Semihosting::<M, _>::stdout().map_err(|_| "Semihosting stdout unavailable")?;
    Ok(Logger { level, inner })
}

/// Install `logger` into the `log` facade
///
/// # Safety
///
/// Call once. The logger is treated as `'static`; it must outlive every
/// logging call, which holds when it lives in a never-returning `main`.
pub unsafe fn init<P>(logger: &Logger<P>)
where
    P: Printer + Send + Sync + 'static,
{
    trick_init(logger).expect("Failed to initialize logger");
}
