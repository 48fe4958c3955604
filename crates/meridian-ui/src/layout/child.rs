use std::str::FromStr;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::error::ConfigError;

use crate::constraints::LayoutCtx;

/// Primary axis of a sequential panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Extent along the primary axis.
    #[inline]
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Orientation::Horizontal => v.x,
            Orientation::Vertical => v.y,
        }
    }

    /// Extent along the secondary (cross) axis.
    #[inline]
    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Orientation::Horizontal => v.y,
            Orientation::Vertical => v.x,
        }
    }

    /// Builds a vector from primary / secondary components.
    #[inline]
    pub fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Orientation::Horizontal => Vec2::new(main, cross),
            Orientation::Vertical => Vec2::new(cross, main),
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ConfigError::new("orientation", s)),
        }
    }
}

/// Whether a child absorbs leftover space, per axis.
///
/// A sequential panel only looks at the flag matching its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stretch {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Stretch {
    pub const NONE: Stretch = Stretch { horizontal: false, vertical: false };
    pub const HORIZONTAL: Stretch = Stretch { horizontal: true, vertical: false };
    pub const VERTICAL: Stretch = Stretch { horizontal: false, vertical: true };
    pub const BOTH: Stretch = Stretch { horizontal: true, vertical: true };

    #[inline]
    pub fn along(self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Occupies space but is not painted and receives no events.
    Hidden,
    /// Occupies no space and is skipped by layout entirely.
    Collapsed,
}

/// Per-child layout record read by the panel engines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutProps {
    pub stretch: Stretch,
    pub visibility: Visibility,
    /// Lower bound applied to the measured size.
    pub min_size: Option<Vec2>,
}

impl LayoutProps {
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.visibility == Visibility::Collapsed
    }
}

/// A participant in a panel layout pass.
///
/// `measure` must record its result so `desired_size` can return it during
/// the following `arrange`.
pub trait LayoutChild {
    fn props(&self) -> LayoutProps;

    /// Measures against `available` (loose) and returns the desired size,
    /// with any minimum-size override already applied.
    fn measure(&mut self, available: Vec2, ctx: &LayoutCtx) -> Vec2;

    /// Result of the most recent `measure`.
    fn desired_size(&self) -> Vec2;

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx);
}
