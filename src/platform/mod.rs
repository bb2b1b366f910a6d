//! Platform abstraction layer
//!
//! Host-facing plumbing that sits between the window/event loop and the
//! simulation:
//! - Input events accumulated into per-tick commands
//! - Monotonic frame clock

pub mod input;
pub mod time;

pub use input::{InputState, Key};
pub use time::FrameClock;
