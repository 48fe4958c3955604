//! Recorded draw stream.
//!
//! Widgets record renderer-agnostic commands into a [`DrawList`]; the host
//! renderer replays them in paint order. Ordering is z-layer first, then
//! insertion order, so equal-z commands keep the order they were painted in.

mod cmd;
mod list;
mod order;

pub use cmd::{Border, CircleCmd, DrawCmd, FillPathCmd, StrokePathCmd};
pub use list::{ClipId, DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
