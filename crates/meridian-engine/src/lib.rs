//! Meridian engine crate.
//!
//! This crate owns the host-independent pieces used by the widget layer:
//! geometry, shape paths, animation timelines and the recorded draw stream.

pub mod anim;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shape;
pub mod time;
