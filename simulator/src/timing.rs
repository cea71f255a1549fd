//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, so they live here rather than in the
//! `no_std` common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
