//! Shape geometry shared by every surface.
//!
//! Two steps, both pure:
//! 1. resolve per-corner radii for a box ([`from_style`], [`clamp_override`])
//! 2. emit the closed outline ([`build_path`])
//!
//! Widgets call both whenever their bounds, border thickness, or shape
//! configuration change, and keep the result (see [`PathCache`]) until the
//! next change.

mod cache;
mod path;
mod radius;
mod style;

pub use cache::PathCache;
pub use path::{ArcSegment, ClosedPath, PathSegment, PathVertex, build_path};
pub use radius::{clamp_override, from_style, inset_for_stroke};
pub use style::{ShapeCorner, ShapeFamily, ShapeStyle};
