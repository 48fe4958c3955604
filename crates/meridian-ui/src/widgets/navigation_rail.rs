use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::shape::ShapeStyle;

use crate::constraints::{Constraints, Edges, LayoutCtx, center_rect, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::layout::{LayoutChild, LayoutProps, Orientation, SpacedLayout, SpacedParams, Stretch};
use crate::painter::Painter;
use crate::ripple::RippleConfig;
use crate::widget::{Element, Widget};

use super::interaction::Interaction;
use super::surface::{ShapeConfig, SurfaceGeometry};

const RAIL_WIDTH: f32 = 80.0;
const DESTINATION_HEIGHT: f32 = 56.0;
const INDICATOR: Vec2 = Vec2::new(56.0, 32.0);

// ── RailDestination ───────────────────────────────────────────────────────

struct RailDestination {
    icon: Element,
    props: LayoutProps,
    desired: Vec2,
    rect: Rect,
    indicator: SurfaceGeometry,
    interaction: Interaction,
}

impl RailDestination {
    fn new(icon: Element) -> Self {
        Self {
            icon,
            props: LayoutProps { stretch: Stretch::HORIZONTAL, ..LayoutProps::default() },
            desired: Vec2::zero(),
            rect: Rect::default(),
            indicator: SurfaceGeometry::default(),
            interaction: Interaction::new(RippleConfig::default()),
        }
    }
}

impl LayoutChild for RailDestination {
    fn props(&self) -> LayoutProps {
        self.props
    }

    fn measure(&mut self, available: Vec2, ctx: &LayoutCtx) -> Vec2 {
        self.icon.measure(Constraints::loose(INDICATOR), ctx);
        self.desired = Vec2::new(RAIL_WIDTH.min(available.x), DESTINATION_HEIGHT);
        self.desired
    }

    fn desired_size(&self) -> Vec2 {
        self.desired
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        self.rect = rect;
        let indicator = center_rect(rect, INDICATOR);
        self.indicator.update(&ShapeConfig::new(ShapeStyle::Full), indicator, 0.0, ctx.paths);
        self.interaction.set_size(indicator.size);
        self.icon.arrange(center_rect(indicator, self.icon.desired_size()), ctx);
    }
}

// ── NavigationRail ────────────────────────────────────────────────────────

/// Vertical strip of destinations with a pill indicator behind the selected
/// one.
///
/// # Panics
/// Construction and [`select`](Self::select) panic if the selected index is
/// not one of the destinations: a rail always shows exactly one selection.
///
/// # Example
/// ```rust,ignore
/// NavigationRail::new([home_icon, search_icon, settings_icon], 0)
///     .on_select(|i| log::info!("destination {i}"))
/// ```
pub struct NavigationRail {
    destinations: Vec<RailDestination>,
    selected: usize,
    layout: SpacedLayout,
    padding: Edges,
    background: SurfaceGeometry,
    on_select: Option<Box<dyn FnMut(usize)>>,
}

impl NavigationRail {
    pub fn new(destinations: impl IntoIterator<Item = impl Into<Element>>, selected: usize) -> Self {
        let destinations: Vec<RailDestination> =
            destinations.into_iter().map(|d| RailDestination::new(d.into())).collect();
        assert!(
            selected < destinations.len(),
            "navigation rail selection {selected} out of range for {} destinations",
            destinations.len()
        );

        let params = SpacedParams { orientation: Orientation::Vertical, spacing: 12.0, ..SpacedParams::default() };
        Self {
            destinations,
            selected,
            layout: SpacedLayout::new(params),
            padding: Edges { top: 12.0, ..Edges::default() },
            background: SurfaceGeometry::default(),
            on_select: None,
        }
    }

    pub fn on_select(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        assert!(index < self.destinations.len(), "navigation rail selection {index} out of range");
        if index != self.selected {
            log::debug!("navigation rail: {} -> {index}", self.selected);
            self.selected = index;
        }
    }

    /// Rect of destination `index` from the last arrange.
    pub fn destination_rect(&self, index: usize) -> Option<Rect> {
        self.destinations.get(index).map(|d| d.rect)
    }
}

impl Widget for NavigationRail {
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = constraints.shrink(self.padding);
        let content = self.layout.measure(&mut self.destinations, inner.max, ctx);
        constraints.constrain(Vec2::new(content.x.max(RAIL_WIDTH), content.y) + self.padding.size())
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        self.background.update(&ShapeConfig::default(), rect, 0.0, ctx.paths);
        self.layout.arrange(&mut self.destinations, inset_rect(rect, self.padding), ctx);
    }

    fn paint(&self, painter: &mut Painter, _rect: Rect) {
        let colors = painter.theme().colors;
        self.background.paint(painter, Some(colors.surface), None);

        for (i, d) in self.destinations.iter().enumerate() {
            if i == self.selected {
                d.indicator.paint(painter, Some(colors.secondary_container), None);
            }
            d.interaction.paint(painter, d.indicator.bounds(), d.indicator.fill(), colors.on_surface);
            d.icon.paint(painter);
        }
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect, ctx: &LayoutCtx) -> EventResult {
        for i in 0..self.destinations.len() {
            let d = &mut self.destinations[i];
            if d.icon.on_event(event, ctx).is_consumed() {
                return EventResult::Consumed;
            }
            let hit_area = d.rect;
            let response = d.interaction.on_event(event, d.indicator.bounds(), |p| hit_area.contains(p));
            if response.clicked {
                self.select(i);
                if let Some(f) = &mut self.on_select {
                    f(i);
                }
            }
            if response.result.is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    fn tick(&mut self, dt: Duration) -> bool {
        self.destinations
            .iter_mut()
            .fold(false, |animating, d| d.icon.tick(dt) | d.interaction.tick(dt) | animating)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::layout::testing::with_ctx;
    use crate::widgets::sized_box::SizedBox;

    fn rail(selected: usize) -> NavigationRail {
        NavigationRail::new((0..3).map(|_| SizedBox::new(24.0, 24.0)), selected)
    }

    #[test]
    fn destinations_stack_below_top_padding() {
        let mut r = rail(0);
        let size = with_ctx(|ctx| {
            let size = r.measure(Constraints::loose(Vec2::new(400.0, 600.0)), ctx);
            r.arrange(Rect::new(0.0, 0.0, size.x, 600.0), ctx);
            size
        });
        assert_eq!(size, Vec2::new(80.0, 12.0 + 3.0 * 56.0 + 2.0 * 12.0));
        assert_eq!(r.destination_rect(1), Some(Rect::new(0.0, 80.0, 80.0, 56.0)));
    }

    #[test]
    fn clicking_a_destination_selects_it() {
        let picked = Rc::new(Cell::new(None));
        let sink = picked.clone();
        let mut r = rail(0).on_select(move |i| sink.set(Some(i)));
        let rect = Rect::new(0.0, 0.0, 80.0, 600.0);
        let pos = Vec2::new(40.0, 160.0);

        with_ctx(|ctx| {
            r.measure(Constraints::loose(rect.size), ctx);
            r.arrange(rect, ctx);
            r.on_event(&UiEvent::PointerDown { pos }, rect, ctx);
            r.on_event(&UiEvent::PointerUp { pos }, rect, ctx);
        });
        assert_eq!(r.selected(), 2);
        assert_eq!(picked.get(), Some(2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn selection_must_exist() {
        let _ = rail(3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn empty_rail_is_rejected() {
        let _ = NavigationRail::new(Vec::<SizedBox>::new(), 0);
    }
}
