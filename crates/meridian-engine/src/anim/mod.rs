//! Animation timelines.
//!
//! The engine never drives animations on its own. A host owns an
//! [`Animator`], calls [`Animator::tick`] once per frame, and forwards the
//! returned completions to whatever began those animations. Completions are
//! identified by [`AnimationHandle`]s, which are never reused, so a consumer
//! can tell a stale completion from the one it is waiting for.

mod animator;
mod easing;

pub use animator::{AnimationHandle, Animator};
pub use easing::Easing;

/// Linear interpolation between `from` and `to`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
