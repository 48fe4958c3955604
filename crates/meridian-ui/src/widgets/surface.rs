use std::cell::RefCell;
use std::time::Duration;

use meridian_engine::coords::{CornerRadii, Rect, Vec2};
use meridian_engine::paint::Color;
use meridian_engine::scene::Border;
use meridian_engine::shape::{
    ClosedPath, PathCache, ShapeCorner, ShapeFamily, ShapeStyle, clamp_override, from_style,
    inset_for_stroke,
};

use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── ShapeConfig ───────────────────────────────────────────────────────────

/// How a surface's outline is shaped.
///
/// Without a custom radius every corner in `corners` gets the style radius.
/// With one, corners in `corners` take the custom value and the rest take
/// the style radius (or the custom value too when `use_style_fallback` is
/// off).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    pub family: ShapeFamily,
    pub style: ShapeStyle,
    pub corners: ShapeCorner,
    pub custom_radius: Option<CornerRadii>,
    pub use_style_fallback: bool,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self::new(ShapeStyle::None)
    }
}

impl ShapeConfig {
    pub fn new(style: ShapeStyle) -> Self {
        Self {
            family: ShapeFamily::Rounded,
            style,
            corners: ShapeCorner::ALL,
            custom_radius: None,
            use_style_fallback: true,
        }
    }

    pub fn family(mut self, family: ShapeFamily) -> Self {
        self.family = family;
        self
    }

    pub fn corners(mut self, corners: ShapeCorner) -> Self {
        self.corners = corners;
        self
    }

    /// Custom per-corner radius for the corners in `override_corners`.
    pub fn custom(mut self, radius: CornerRadii, override_corners: ShapeCorner) -> Self {
        self.custom_radius = Some(radius);
        self.corners = override_corners;
        self
    }

    pub fn style_fallback(mut self, enabled: bool) -> Self {
        self.use_style_fallback = enabled;
        self
    }

    /// Per-corner radii for a box of `size`.
    pub fn resolve(&self, size: Vec2) -> CornerRadii {
        match self.custom_radius {
            Some(custom) => clamp_override(
                custom,
                self.style,
                size.x,
                size.y,
                self.use_style_fallback,
                self.corners,
            ),
            None => from_style(self.style, self.corners, size.x, size.y),
        }
    }
}

// ── SurfaceGeometry ───────────────────────────────────────────────────────

/// Outline paths for one arranged surface.
///
/// Rebuilt only when the bounds, border width or shape change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceGeometry {
    shape: ShapeConfig,
    bounds: Rect,
    border_width: f32,
    radii: CornerRadii,
    fill: ClosedPath,
    stroke: ClosedPath,
}

impl SurfaceGeometry {
    /// Brings the paths up to date. Returns `true` if they were rebuilt.
    pub fn update(
        &mut self,
        shape: &ShapeConfig,
        bounds: Rect,
        border_width: f32,
        paths: &RefCell<PathCache>,
    ) -> bool {
        let current = self.shape == *shape
            && self.bounds == bounds
            && self.border_width == border_width
            && (!self.fill.is_empty() || bounds.is_empty());
        if current {
            return false;
        }

        let radii = shape.resolve(bounds.size);
        let mut cache = paths.borrow_mut();
        self.fill = cache.get_or_build(shape.family, bounds, radii, true, false).clone();
        self.stroke = if border_width > 0.0 {
            let (inner, inner_radii) = inset_for_stroke(bounds, radii, border_width);
            cache.get_or_build(shape.family, inner, inner_radii, false, true).clone()
        } else {
            ClosedPath::empty()
        };

        self.shape = *shape;
        self.bounds = bounds;
        self.border_width = border_width;
        self.radii = radii;
        true
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    #[inline]
    pub fn fill(&self) -> &ClosedPath {
        &self.fill
    }

    /// Stroke centerline, inset so the stroke stays inside the bounds. Empty
    /// without a border.
    #[inline]
    pub fn stroke(&self) -> &ClosedPath {
        &self.stroke
    }

    /// Hit test against the outline.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.fill.contains(p)
    }

    pub fn paint(&self, painter: &mut Painter, fill: Option<Color>, border: Option<Border>) {
        if let Some(color) = fill {
            painter.fill_path(&self.fill, color);
        }
        if let Some(border) = border {
            painter.stroke_path(&self.stroke, border);
        }
    }
}

// ── Surface ───────────────────────────────────────────────────────────────

/// A shaped container: fill, optional border, padding around one child.
///
/// # Example
/// ```rust,ignore
/// Surface::new(SizedBox::new(120.0, 80.0))
///     .shape(ShapeConfig::new(ShapeStyle::Large).family(ShapeFamily::Cut))
///     .border(Border::new(1.0, theme.colors.outline))
///     .padding(Edges::all(12.0))
/// ```
pub struct Surface {
    child: Element,
    shape: ShapeConfig,
    background: Option<Color>,
    border: Option<Border>,
    padding: Edges,
    geometry: SurfaceGeometry,
}

impl Surface {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            shape: ShapeConfig::new(ShapeStyle::Medium),
            background: None,
            border: None,
            padding: Edges::default(),
            geometry: SurfaceGeometry::default(),
        }
    }

    pub fn shape(mut self, shape: ShapeConfig) -> Self {
        self.shape = shape;
        self
    }

    /// Fill color. Defaults to the theme's surface color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    #[inline]
    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }
}

impl Widget for Surface {
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self.child.measure(constraints.shrink(self.padding), ctx);
        constraints.constrain(child + self.padding.size())
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        let border = self.border.map_or(0.0, |b| b.width);
        self.geometry.update(&self.shape, rect, border, ctx.paths);
        self.child.arrange(inset_rect(rect, self.padding), ctx);
    }

    fn paint(&self, painter: &mut Painter, _rect: Rect) {
        let fill = self.background.unwrap_or(painter.theme().colors.surface);
        self.geometry.paint(painter, Some(fill), self.border);
        self.child.paint(painter);
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.child.on_event(event, ctx)
    }

    fn tick(&mut self, dt: Duration) -> bool {
        self.child.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::with_ctx;

    #[test]
    fn custom_radius_mixes_with_style() {
        let shape = ShapeConfig::new(ShapeStyle::Medium)
            .custom(CornerRadii::new(20.0, 0.0, 0.0, 0.0), ShapeCorner::TOP_LEFT);
        let r = shape.resolve(Vec2::new(100.0, 40.0));
        assert_eq!(r, CornerRadii::new(20.0, 12.0, 12.0, 12.0));

        let r = shape.style_fallback(false).resolve(Vec2::new(100.0, 40.0));
        assert_eq!(r, CornerRadii::new(20.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn geometry_rebuilds_only_on_change() {
        let shape = ShapeConfig::new(ShapeStyle::Small);
        let bounds = Rect::new(0.0, 0.0, 50.0, 30.0);
        let mut geo = SurfaceGeometry::default();

        with_ctx(|ctx| {
            assert!(geo.update(&shape, bounds, 0.0, ctx.paths));
            assert!(!geo.update(&shape, bounds, 0.0, ctx.paths));
            assert!(geo.update(&shape, bounds, 2.0, ctx.paths));
            assert!(geo.update(&shape.family(ShapeFamily::Cut), bounds, 2.0, ctx.paths));
        });
        assert_eq!(geo.radii(), CornerRadii::all(8.0));
        assert_eq!(geo.fill().line_count(), 8);
    }

    #[test]
    fn stroke_path_sits_inside_fill() {
        let shape = ShapeConfig::new(ShapeStyle::Medium);
        let mut geo = SurfaceGeometry::default();
        with_ctx(|ctx| geo.update(&shape, Rect::new(10.0, 10.0, 100.0, 40.0), 4.0, ctx.paths));

        assert!(!geo.stroke().is_filled());
        for v in geo.stroke().vertices() {
            assert!(v.x >= 12.0 - 1e-3 && v.x <= 108.0 + 1e-3);
            assert!(v.y >= 12.0 - 1e-3 && v.y <= 48.0 + 1e-3);
        }
    }

    #[test]
    fn no_border_means_no_stroke() {
        let mut geo = SurfaceGeometry::default();
        with_ctx(|ctx| geo.update(&ShapeConfig::default(), Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, ctx.paths));
        assert!(geo.stroke().is_empty());
        assert!(geo.contains(Vec2::new(5.0, 5.0)));
    }
}
