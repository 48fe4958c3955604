use std::cell::RefCell;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::shape::PathCache;

use crate::theme::Theme;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.h(), self.v())
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Size range a parent offers a child during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::new(f32::INFINITY, f32::INFINITY))
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Shrink max inward by `edges`. Min becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self::loose(Vec2::new(
            (self.max.x - edges.h()).max(0.0),
            (self.max.y - edges.v()).max(0.0),
        ))
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources threaded through measure, arrange and event routing.
///
/// The theme is passed explicitly rather than looked up globally, so two
/// trees with different themes can live side by side.
pub struct LayoutCtx<'a> {
    pub theme: &'a Theme,
    /// Shared outline memo. Single-threaded; borrowed only for the duration
    /// of one lookup.
    pub paths: &'a RefCell<PathCache>,
}

impl<'a> LayoutCtx<'a> {
    #[inline]
    pub fn new(theme: &'a Theme, paths: &'a RefCell<PathCache>) -> Self {
        Self { theme, paths }
    }
}

// ── rect helper ──────────────────────────────────────────────────────────

/// Shrink a rect by `edges`.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

/// A rect of `size` (clamped to `outer`) centered inside `outer`.
#[inline]
pub fn center_rect(outer: Rect, size: Vec2) -> Rect {
    let w = size.x.min(outer.size.x).max(0.0);
    let h = size.y.min(outer.size.y).max(0.0);
    Rect::new(
        outer.origin.x + (outer.size.x - w) * 0.5,
        outer.origin.y + (outer.size.y - h) * 0.5,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_into_range() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(50.0, 50.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 80.0)), Vec2::new(10.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(20.0, 30.0)), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn shrink_keeps_infinity() {
        let s = Constraints::unbounded().shrink(Edges::all(10.0));
        assert!(s.max.x.is_infinite());
        let s = Constraints::loose(Vec2::new(5.0, 5.0)).shrink(Edges::all(20.0));
        assert_eq!(s.max, Vec2::zero());
    }

    #[test]
    fn inset_rect_asymmetric_padding() {
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        let inner = inset_rect(Rect::new(5.0, 5.0, 100.0, 60.0), edges);
        assert_eq!(inner, Rect::new(11.0, 9.0, 84.0, 48.0));
    }

    #[test]
    fn center_rect_clamps_oversized_content() {
        let outer = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(center_rect(outer, Vec2::new(10.0, 10.0)), Rect::new(15.0, 5.0, 10.0, 10.0));
        assert_eq!(center_rect(outer, Vec2::new(80.0, 10.0)), Rect::new(0.0, 5.0, 40.0, 10.0));
    }
}
