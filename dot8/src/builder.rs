use log::debug;

use crate::context::Context;
use crate::display::{Display, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
use crate::platform::{DotPlatform, DEFAULT_FPS};

pub struct Builder<C: Context> {
    context: Option<C>,
    brightness: u8,
    fps: u8,
}

impl<C: Context> Builder<C> {
    pub fn new() -> Self {
        Self {
            context: None,
            brightness: DEFAULT_BRIGHTNESS,
            fps: DEFAULT_FPS,
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Intensity programmed by `begin`, clamped to 15
    pub fn with_brightness(mut self, level: u8) -> Self {
        self.brightness = level.min(MAX_BRIGHTNESS);
        self
    }

    /// Rate used by `wait_next_frame`, 0 for an unpaced loop
    pub fn with_fps(mut self, fps: u8) -> Self {
        self.fps = fps;
        self
    }

    pub fn build(self) -> Result<DotPlatform<C>, &'static str> {
        let context = self.context.ok_or("Context not provided")?;
        debug!(
            "building platform, brightness: {}, fps: {}",
            self.brightness, self.fps
        );
        Ok(DotPlatform::with_display(
            context,
            Display::with_brightness(self.brightness),
            self.fps,
        ))
    }
}

impl<C: Context> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}
