//! Utility Module
//!
//! - [`time`]: frame clock and the [`FrameTime`] passed to per-frame tasks

pub mod time;

pub use time::{FrameTime, Timer};
