//! Press feedback: the ripple state machine and an animated layer that
//! drives it.
//!
//! [`Ripple`] is host-agnostic: it reads the element size, begins and stops
//! animations, and reacts to their completions through [`RippleHost`].
//! [`RippleLayer`] is the host most widgets want, backed by its own
//! [`Animator`](meridian_engine::anim::Animator).

mod config;
mod layer;
mod machine;

pub use config::{ReleaseMode, RippleConfig, TriggerMode};
pub use layer::RippleLayer;
pub use machine::{Ripple, RippleAnimation, RippleHost, RipplePhase, RippleSession, RippleVisual};
