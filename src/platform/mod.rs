//! Platform abstraction layer
//!
//! Turns host events into simulation inputs:
//! - Keyboard/pointer events into `TickInput`
//! - Frame timestamps into a capped `dt`

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputState, Key};
