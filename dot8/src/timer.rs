use core::convert::Infallible;

use crate::context::Context;

pub mod racy {
    #[derive(Debug, Default)]
    pub struct FrameCounter(u32);

    impl FrameCounter {
        pub fn new() -> Self {
            Self(0)
        }

        #[inline]
        pub fn reset(&mut self) {
            self.0 = 0;
        }

        #[inline]
        pub fn load(&self) -> u32 {
            self.0
        }

        #[inline]
        pub fn increment(&mut self) {
            self.0 = self.0.wrapping_add(1);
        }
    }
}

/// Frame counter backed by an `AtomicU32`
///
/// Only the owning `FrameScheduler` reaches it; `increment` and `reset` still
/// take `&mut self`.
#[cfg(feature = "atomic")]
pub mod atomic {
    use core::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, Default)]
    pub struct FrameCounter(AtomicU32);

    impl FrameCounter {
        pub fn new() -> Self {
            Self(AtomicU32::new(0))
        }

        #[inline]
        pub fn reset(&mut self) {
            self.0.store(0, Ordering::Release);
        }

        #[inline]
        pub fn load(&self) -> u32 {
            self.0.load(Ordering::Acquire)
        }

        #[inline]
        pub fn increment(&mut self) {
            self.0.fetch_add(1, Ordering::AcqRel);
        }
    }
}

#[cfg(feature = "atomic")]
use atomic::FrameCounter;
#[cfg(not(feature = "atomic"))]
use racy::FrameCounter;

/// Frame length in milliseconds, `None` for an unpaced loop
pub fn frame_period(fps: u8) -> Option<u32> {
    if fps == 0 {
        None
    } else {
        Some(1000 / fps as u32)
    }
}

/// Paces the game loop to a target frame rate
///
/// The reference point is restamped at the end of every wait, whether the
/// frame was early or late, so a slow frame never triggers a burst of short
/// ones to catch up.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    last_frame: u32,
    frames: FrameCounter,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            last_frame: 0,
            frames: FrameCounter::new(),
        }
    }

    /// Start counting frames from `now`
    pub fn start(&mut self, now: u32) {
        self.last_frame = now;
        self.frames.reset();
    }

    /// Count one more frame
    pub fn advance(&mut self) {
        self.frames.increment();
    }

    /// Frames advanced since `start`, wrapping at `u32::MAX`
    pub fn frame_count(&self) -> u32 {
        self.frames.load()
    }

    /// Milliseconds left until the frame started at the reference point ends
    pub fn remaining(&self, now: u32, fps: u8) -> u32 {
        frame_period(fps)
            .map(|period| period.saturating_sub(now.wrapping_sub(self.last_frame)))
            .unwrap_or(0)
    }

    /// Block until the current frame has lasted `1000 / fps` milliseconds
    ///
    /// Returns immediately when the frame already overran. `fps == 0` never
    /// blocks.
    pub fn wait_frame<C: Context>(&mut self, ctx: &mut C, fps: u8) {
        let remaining = self.remaining(ctx.millis(), fps);
        if remaining > 0 {
            ctx.delay_ms(remaining);
        }
        self.last_frame = ctx.millis();
    }

    /// Non-blocking `wait_frame`
    ///
    /// `WouldBlock` while the frame is still running, otherwise restamps the
    /// reference point to `now`.
    pub fn poll_frame(&mut self, now: u32, fps: u8) -> nb::Result<(), Infallible> {
        if self.remaining(now, fps) > 0 {
            Err(nb::Error::WouldBlock)
        } else {
            self.last_frame = now;
            Ok(())
        }
    }
}
