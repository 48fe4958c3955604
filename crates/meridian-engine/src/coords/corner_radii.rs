/// Per-corner radii of a shape outline (logical pixels).
///
/// Corners follow CSS convention for the constructor: top-left, top-right,
/// bottom-right, bottom-left. Radii resolved by the `shape` module are
/// always within `[0, min(width, height) / 2]` of the box they were resolved
/// for.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Applies `f` to every corner.
    #[inline]
    #[must_use]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }

    /// Largest of the four radii.
    #[inline]
    pub fn max_radius(self) -> f32 {
        self.top_left.max(self.top_right).max(self.bottom_right).max(self.bottom_left)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.max_radius() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_touches_every_corner() {
        let r = CornerRadii::new(1.0, 2.0, 3.0, 4.0).map(|v| v * 2.0);
        assert_eq!(r, CornerRadii::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn max_radius_and_zero() {
        assert_eq!(CornerRadii::new(1.0, 7.0, 3.0, 4.0).max_radius(), 7.0);
        assert!(CornerRadii::zero().is_zero());
        assert!(!CornerRadii::all(0.5).is_zero());
    }
}
