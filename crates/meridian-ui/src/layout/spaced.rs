use meridian_engine::coords::{Rect, Vec2};

use crate::constraints::LayoutCtx;

use super::{LayoutChild, Orientation};

/// Settings for a [`SpacedLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacedParams {
    pub orientation: Orientation,
    /// Gap between consecutive non-collapsed children. Never negative.
    pub spacing: f32,
    /// Overlap adjacent children by `border_thickness` so their borders merge.
    /// Only takes effect while `spacing` is zero.
    pub join_borders: bool,
    pub border_thickness: f32,
}

impl Default for SpacedParams {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            spacing: 0.0,
            join_borders: false,
            border_thickness: 0.0,
        }
    }
}

impl SpacedParams {
    /// Non-negative, finite copy of these settings.
    fn sanitized(mut self) -> Self {
        self.spacing = if self.spacing.is_finite() { self.spacing.max(0.0) } else { 0.0 };
        self.border_thickness =
            if self.border_thickness.is_finite() { self.border_thickness.max(0.0) } else { 0.0 };
        self
    }

    #[inline]
    fn joins(&self) -> bool {
        self.join_borders && self.spacing == 0.0
    }

    /// Space consumed between `n` children: spacing gaps minus merged borders.
    fn gaps(&self, n: usize) -> f32 {
        let between = n.saturating_sub(1) as f32;
        let joined = if self.joins() { self.border_thickness * between } else { 0.0 };
        self.spacing * between - joined
    }
}

/// Aggregates recorded by `measure` for the following `arrange`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SpacedPass {
    visible: usize,
    stretch_count: usize,
    total_non_stretched: f32,
}

/// Sequential layout with fixed spacing and stretchable children.
///
/// Children are placed one after another along the primary axis. Fixed
/// children keep their measured extent; children stretchable along the
/// primary axis split whatever remains equally. Every child fills the cross
/// axis. Collapsed children take no space and no gap.
#[derive(Debug, Clone, Default)]
pub struct SpacedLayout {
    params: SpacedParams,
    pass: Option<SpacedPass>,
}

impl SpacedLayout {
    pub fn new(params: SpacedParams) -> Self {
        Self { params: params.sanitized(), pass: None }
    }

    #[inline]
    pub fn params(&self) -> SpacedParams {
        self.params
    }

    /// Replaces the settings. The next arrange needs a fresh measure.
    pub fn set_params(&mut self, params: SpacedParams) {
        self.params = params.sanitized();
        self.pass = None;
    }

    pub fn measure<C: LayoutChild>(&mut self, children: &mut [C], available: Vec2, ctx: &LayoutCtx) -> Vec2 {
        let o = self.params.orientation;

        let mut pass = SpacedPass::default();
        let mut max_main: f32 = 0.0;
        let mut max_cross: f32 = 0.0;

        for child in children.iter_mut() {
            if child.props().is_collapsed() {
                continue;
            }
            let size = child.measure(available, ctx);
            pass.visible += 1;
            max_main = max_main.max(o.main(size));
            max_cross = max_cross.max(o.cross(size));

            if child.props().stretch.along(o) {
                pass.stretch_count += 1;
            } else {
                pass.total_non_stretched += o.main(size);
            }
        }

        self.pass = Some(pass);
        if pass.visible == 0 {
            return Vec2::zero();
        }

        let gaps = self.params.gaps(pass.visible);
        let content = pass.total_non_stretched + gaps;

        let main = if pass.stretch_count == pass.visible {
            // Nothing fixed to size the panel by: give every child the widest one.
            content.max(max_main * pass.visible as f32 + gaps)
        } else {
            content.min(o.main(available))
        };

        log::trace!(
            "spaced measure: {} children, {} stretch, fixed {} -> main {}",
            pass.visible,
            pass.stretch_count,
            pass.total_non_stretched,
            main
        );

        o.pack(main.max(0.0), max_cross)
    }

    /// Places children inside `bounds`. Returns `bounds.size`.
    ///
    /// Must follow a [`measure`](Self::measure) over the same children.
    pub fn arrange<C: LayoutChild>(&self, children: &mut [C], bounds: Rect, ctx: &LayoutCtx) -> Vec2 {
        let Some(pass) = self.pass else {
            log::warn!("spaced arrange without a preceding measure; skipping");
            return bounds.size;
        };

        let visible = children.iter().filter(|c| !c.props().is_collapsed()).count();
        if visible != pass.visible {
            log::warn!("spaced arrange saw {visible} children, measure saw {}", pass.visible);
        }

        let p = self.params;
        let o = p.orientation;
        let final_main = o.main(bounds.size);
        let cross = o.cross(bounds.size);

        let per_stretch = if pass.stretch_count > 0 {
            let remaining = final_main - pass.total_non_stretched - p.gaps(pass.visible);
            (remaining / pass.stretch_count as f32).max(0.0)
        } else {
            0.0
        };

        let mut offset = 0.0f32;
        let mut placed = 0usize;

        for child in children.iter_mut() {
            let origin = bounds.origin + o.pack(offset, 0.0);

            if child.props().is_collapsed() {
                child.arrange(Rect::from_origin_size(origin, Vec2::zero()), ctx);
                continue;
            }

            let main = if child.props().stretch.along(o) {
                per_stretch
            } else {
                o.main(child.desired_size())
            };
            child.arrange(Rect::from_origin_size(origin, o.pack(main, cross)), ctx);
            placed += 1;

            // Advance in whole pixels.
            offset += (main + p.spacing).round();
            if p.joins() && placed < visible {
                offset -= p.border_thickness;
            }
        }

        bounds.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Stretch;
    use crate::layout::testing::{TestBox, approx, with_ctx};

    fn horizontal(spacing: f32) -> SpacedLayout {
        SpacedLayout::new(SpacedParams { spacing, ..SpacedParams::default() })
    }

    fn layout(engine: &mut SpacedLayout, children: &mut [TestBox], available: Vec2, bounds: Rect) -> Vec2 {
        with_ctx(|ctx| {
            let desired = engine.measure(children, available, ctx);
            engine.arrange(children, bounds, ctx);
            desired
        })
    }

    #[test]
    fn one_stretch_child_takes_the_remainder() {
        let mut engine = horizontal(10.0);
        let mut kids = vec![
            TestBox::new(50.0, 20.0),
            TestBox::new(50.0, 20.0).stretch(Stretch::HORIZONTAL),
            TestBox::new(50.0, 20.0),
        ];
        layout(&mut engine, &mut kids, Vec2::new(300.0, 40.0), Rect::new(0.0, 0.0, 300.0, 40.0));

        assert_eq!(kids[1].rect(), Rect::new(60.0, 0.0, 180.0, 40.0));
        assert_eq!(kids[2].rect(), Rect::new(250.0, 0.0, 50.0, 40.0));
    }

    #[test]
    fn stretch_children_share_equally() {
        let mut engine = horizontal(4.0);
        let mut kids = vec![
            TestBox::new(10.0, 10.0).stretch(Stretch::HORIZONTAL),
            TestBox::new(30.0, 10.0),
            TestBox::new(99.0, 10.0).stretch(Stretch::BOTH),
            TestBox::new(20.0, 10.0),
            TestBox::new(1.0, 10.0).stretch(Stretch::HORIZONTAL),
        ];
        layout(&mut engine, &mut kids, Vec2::new(500.0, 10.0), Rect::new(0.0, 0.0, 500.0, 10.0));

        let expected = (500.0 - 50.0 - 16.0) / 3.0;
        for i in [0, 2, 4] {
            assert!(approx(kids[i].rect().size.x, expected), "child {i}: {:?}", kids[i].rect());
        }
    }

    #[test]
    fn fixed_children_pack_without_gap_or_overlap() {
        let mut engine = horizontal(5.0);
        let mut kids = vec![TestBox::new(30.0, 8.0), TestBox::new(40.0, 12.0), TestBox::new(50.0, 4.0)];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(1000.0, 100.0), ctx));
        assert_eq!(desired, Vec2::new(130.0, 12.0));

        with_ctx(|ctx| engine.arrange(&mut kids, Rect::from_origin_size(Vec2::new(7.0, 3.0), desired), ctx));
        let last = kids[2].rect();
        assert_eq!(last.origin.x + last.size.x, 7.0 + desired.x);
        assert_eq!(kids[1].rect(), Rect::new(42.0, 3.0, 40.0, 12.0));
    }

    #[test]
    fn fixed_children_never_demand_more_than_available() {
        let mut engine = horizontal(10.0);
        let mut kids = vec![TestBox::new(80.0, 10.0), TestBox::new(80.0, 10.0)];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(100.0, 50.0), ctx));
        assert_eq!(desired.x, 100.0);
    }

    #[test]
    fn all_stretch_guarantees_widest_child_each() {
        let mut engine = horizontal(2.0);
        let mut kids = vec![
            TestBox::new(10.0, 5.0).stretch(Stretch::HORIZONTAL),
            TestBox::new(25.0, 5.0).stretch(Stretch::HORIZONTAL),
        ];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(10.0, 5.0), ctx));
        assert_eq!(desired.x, 25.0 * 2.0 + 2.0);
    }

    #[test]
    fn collapsed_children_take_no_space_or_spacing() {
        let mut engine = horizontal(10.0);
        let mut kids = vec![TestBox::new(20.0, 10.0), TestBox::new(500.0, 10.0).collapsed(), TestBox::new(20.0, 10.0)];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(1000.0, 10.0), ctx));

        assert_eq!(desired.x, 50.0);
        assert!(kids[1].measured_with.is_none());

        with_ctx(|ctx| engine.arrange(&mut kids, Rect::new(0.0, 0.0, 50.0, 10.0), ctx));
        assert_eq!(kids[1].rect().size, Vec2::zero());
        assert_eq!(kids[2].rect().origin.x, 30.0);
    }

    #[test]
    fn joined_borders_overlap_by_thickness() {
        let mut engine = SpacedLayout::new(SpacedParams {
            join_borders: true,
            border_thickness: 1.0,
            ..SpacedParams::default()
        });
        let mut kids = vec![TestBox::new(40.0, 10.0), TestBox::new(40.0, 10.0), TestBox::new(40.0, 10.0)];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(500.0, 10.0), ctx));
        assert_eq!(desired.x, 118.0);

        with_ctx(|ctx| engine.arrange(&mut kids, Rect::from_origin_size(Vec2::zero(), desired), ctx));
        let xs: Vec<f32> = kids.iter().map(|k| k.rect().origin.x).collect();
        assert_eq!(xs, vec![0.0, 39.0, 78.0]);
        assert_eq!(kids[2].rect().max().x, 118.0);
    }

    #[test]
    fn joined_borders_give_the_overlap_to_stretch_children() {
        let mut engine = SpacedLayout::new(SpacedParams {
            join_borders: true,
            border_thickness: 1.0,
            ..SpacedParams::default()
        });
        let mut kids = vec![
            TestBox::new(40.0, 10.0),
            TestBox::new(10.0, 10.0).stretch(Stretch::HORIZONTAL),
            TestBox::new(40.0, 10.0),
        ];
        let desired = layout(&mut engine, &mut kids, Vec2::new(200.0, 10.0), Rect::new(0.0, 0.0, 200.0, 10.0));

        assert_eq!(desired.x, 78.0);
        assert_eq!(kids[1].rect(), Rect::new(39.0, 0.0, 122.0, 10.0));
        assert_eq!(kids[2].rect(), Rect::new(160.0, 0.0, 40.0, 10.0));
        assert_eq!(kids[2].rect().max().x, 200.0);
    }

    #[test]
    fn join_is_ignored_when_spacing_is_set() {
        let mut engine = SpacedLayout::new(SpacedParams {
            spacing: 4.0,
            join_borders: true,
            border_thickness: 1.0,
            ..SpacedParams::default()
        });
        let mut kids = vec![TestBox::new(10.0, 10.0), TestBox::new(10.0, 10.0)];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(100.0, 10.0), ctx));
        assert_eq!(desired.x, 24.0);
    }

    #[test]
    fn vertical_fills_cross_axis() {
        let mut engine = SpacedLayout::new(SpacedParams {
            orientation: Orientation::Vertical,
            spacing: 8.0,
            ..SpacedParams::default()
        });
        let mut kids = vec![TestBox::new(30.0, 20.0), TestBox::new(60.0, 20.0).stretch(Stretch::VERTICAL)];
        layout(&mut engine, &mut kids, Vec2::new(200.0, 200.0), Rect::new(0.0, 0.0, 80.0, 100.0));

        assert_eq!(kids[0].rect(), Rect::new(0.0, 0.0, 80.0, 20.0));
        assert_eq!(kids[1].rect(), Rect::new(0.0, 28.0, 80.0, 72.0));
    }

    #[test]
    fn children_are_measured_against_full_available_size() {
        let mut engine = horizontal(10.0);
        let mut kids = vec![TestBox::new(10.0, 10.0), TestBox::new(10.0, 10.0)];
        with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(123.0, 45.0), ctx));
        assert!(kids.iter().all(|k| k.measured_with == Some(Vec2::new(123.0, 45.0))));
    }

    #[test]
    fn min_size_override_counts_toward_extent() {
        let mut engine = horizontal(0.0);
        let mut kids = vec![TestBox::new(10.0, 10.0).min_size(Vec2::new(48.0, 48.0)), TestBox::new(10.0, 10.0)];
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(500.0, 500.0), ctx));
        assert_eq!(desired, Vec2::new(58.0, 48.0));
    }

    #[test]
    fn empty_panel_is_zero_and_arrange_is_noop() {
        let mut engine = horizontal(10.0);
        let mut kids: Vec<TestBox> = Vec::new();
        let desired = with_ctx(|ctx| engine.measure(&mut kids, Vec2::new(100.0, 100.0), ctx));
        assert_eq!(desired, Vec2::zero());
        let out = with_ctx(|ctx| engine.arrange(&mut kids, Rect::new(0.0, 0.0, 100.0, 100.0), ctx));
        assert_eq!(out, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn arrange_without_measure_places_nothing() {
        let engine = horizontal(10.0);
        let mut kids = vec![TestBox::new(10.0, 10.0)];
        with_ctx(|ctx| engine.arrange(&mut kids, Rect::new(0.0, 0.0, 100.0, 100.0), ctx));
        assert!(kids[0].arranged.is_none());
    }

    #[test]
    fn negative_spacing_is_coerced_to_zero() {
        let engine = horizontal(-5.0);
        assert_eq!(engine.params().spacing, 0.0);
        assert_eq!(horizontal(f32::NAN).params().spacing, 0.0);
    }
}
