//! Core of an 8x8 LED handheld: a MAX7219 driven matrix and two buttons
//! giving three inputs (left, right and both at once).
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod builder;
pub mod command;
pub mod context;
pub mod display;
pub mod frame;
pub mod input;
pub mod platform;
pub mod serial;
pub mod timer;

pub use builder::Builder;
pub use context::{Context, Line};
pub use display::Display;
pub use frame::Frame;
pub use input::{Button, Event, Input};
pub use platform::DotPlatform;
pub use timer::FrameScheduler;

#[cfg(feature = "embedded-graphics")]
pub use embedded_graphics;
