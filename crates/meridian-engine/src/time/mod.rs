//! Frame timing.
//!
//! One [`FrameClock`] per render loop. Hosts with a real display use
//! [`FrameClock::realtime`]; headless runs and tests use
//! [`FrameClock::fixed`] so animation outcomes are reproducible.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
