use core::convert::Infallible;

use log::debug;

use crate::context::Context;
use crate::display::Display;
use crate::frame::Frame;
use crate::input::Input;
use crate::timer::FrameScheduler;

pub const DEFAULT_FPS: u8 = 60;

/// The handheld: matrix, buttons and frame pacing behind one `Context`
///
/// A game loop owns exactly one of these and drives it once per frame:
///
/// ```ignore
/// dot.begin();
/// loop {
///     dot.update();
///     if dot.input().pressed(Button::Left) { /* ... */ }
///     dot.frame_mut().set_pixel(x, y, true);
///     dot.show();
///     dot.wait_next_frame();
/// }
/// ```
pub struct DotPlatform<C: Context> {
    ctx: C,
    display: Display,
    input: Input,
    scheduler: FrameScheduler,
    fps: u8,
}

impl<C: Context> DotPlatform<C> {
    pub fn new(ctx: C) -> Self {
        Self::with_display(ctx, Display::new(), DEFAULT_FPS)
    }

    pub(crate) fn with_display(ctx: C, display: Display, fps: u8) -> Self {
        Self {
            ctx,
            display,
            input: Input::new(),
            scheduler: FrameScheduler::new(),
            fps,
        }
    }

    /// Initialize the matrix, take a priming input sample and start the
    /// frame clock
    pub fn begin(&mut self) {
        self.display.begin(&mut self.ctx);
        let (left, right) = self.ctx.read_buttons();
        let now = self.ctx.millis();
        self.input.prime(left, right, now);
        self.scheduler.start(now);
        debug!("platform started at {}ms, target {}fps", now, self.fps);
    }

    /// Sample the buttons and count the frame
    ///
    /// Call once at the top of every frame, before querying `input`.
    pub fn update(&mut self) {
        let (left, right) = self.ctx.read_buttons();
        let now = self.ctx.millis();
        self.input.update(left, right, now);
        self.scheduler.advance();
    }

    pub fn wait_frame(&mut self, fps: u8) {
        self.scheduler.wait_frame(&mut self.ctx, fps);
    }

    /// `wait_frame` at the configured frame rate
    pub fn wait_next_frame(&mut self) {
        let fps = self.fps;
        self.wait_frame(fps);
    }

    /// Non-blocking `wait_next_frame`
    pub fn poll_frame(&mut self) -> nb::Result<(), Infallible> {
        let now = self.ctx.millis();
        self.scheduler.poll_frame(now, self.fps)
    }

    pub fn frame_count(&self) -> u32 {
        self.scheduler.frame_count()
    }

    pub fn target_fps(&self) -> u8 {
        self.fps
    }

    pub fn show(&mut self) {
        self.display.show(&mut self.ctx);
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.display.set_brightness(&mut self.ctx, level);
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn frame(&self) -> &Frame {
        self.display.frame()
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        self.display.frame_mut()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn ctx(&self) -> &C {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }
}
