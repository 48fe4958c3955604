use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::paint::Color;
use meridian_engine::scene::Border;
use meridian_engine::shape::ShapeStyle;

use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::ripple::RippleConfig;
use crate::theme::ColorScheme;
use crate::widget::{Element, Widget};

use super::interaction::Interaction;
use super::surface::{ShapeConfig, SurfaceGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Elevated,
    Filled,
    Outlined,
}

impl CardVariant {
    fn colors(self, scheme: &ColorScheme) -> (Color, Option<Border>) {
        match self {
            CardVariant::Elevated => (scheme.surface_container_low, None),
            CardVariant::Filled => (scheme.surface_container_highest, None),
            CardVariant::Outlined => (scheme.surface, Some(Border::new(1.0, scheme.outline_variant))),
        }
    }
}

/// A medium-rounded content container. Becomes pressable (state layer and
/// ripple) once it has a click handler.
pub struct Card {
    child: Element,
    variant: CardVariant,
    shape: ShapeConfig,
    padding: Edges,
    geometry: SurfaceGeometry,
    interaction: Interaction,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Card {
    pub fn new(variant: CardVariant, child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            variant,
            shape: ShapeConfig::new(ShapeStyle::Medium),
            padding: Edges::all(16.0),
            geometry: SurfaceGeometry::default(),
            interaction: Interaction::new(RippleConfig::default()),
            on_click: None,
        }
    }

    pub fn elevated(child: impl Into<Element>) -> Self {
        Self::new(CardVariant::Elevated, child)
    }

    pub fn filled(child: impl Into<Element>) -> Self {
        Self::new(CardVariant::Filled, child)
    }

    pub fn outlined(child: impl Into<Element>) -> Self {
        Self::new(CardVariant::Outlined, child)
    }

    pub fn shape(mut self, shape: ShapeConfig) -> Self {
        self.shape = shape;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }
}

impl Widget for Card {
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self.child.measure(constraints.shrink(self.padding), ctx);
        constraints.constrain(child + self.padding.size())
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        let (_, border) = self.variant.colors(&ctx.theme.colors);
        self.geometry.update(&self.shape, rect, border.map_or(0.0, |b| b.width), ctx.paths);
        self.interaction.set_size(rect.size);
        self.child.arrange(inset_rect(rect, self.padding), ctx);
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (fill, border) = self.variant.colors(&painter.theme().colors);
        let content = painter.theme().colors.on_surface;
        self.geometry.paint(painter, Some(fill), border);
        if self.on_click.is_some() {
            self.interaction.paint(painter, rect, self.geometry.fill(), content);
        }
        self.child.paint(painter);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        if self.child.on_event(event, ctx).is_consumed() {
            return EventResult::Consumed;
        }
        let Some(on_click) = &mut self.on_click else {
            return EventResult::Ignored;
        };
        let geometry = &self.geometry;
        let response = self.interaction.on_event(event, rect, |p| geometry.contains(p));
        if response.clicked {
            on_click();
        }
        response.result
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let child = self.child.tick(dt);
        self.interaction.tick(dt) | child
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::with_ctx;
    use crate::widgets::sized_box::SizedBox;

    #[test]
    fn passive_card_ignores_presses() {
        let mut card = Card::filled(SizedBox::new(100.0, 50.0));
        let rect = Rect::new(0.0, 0.0, 132.0, 82.0);
        let result = with_ctx(|ctx| {
            assert_eq!(card.measure(Constraints::unbounded(), ctx), rect.size);
            card.arrange(rect, ctx);
            card.on_event(&UiEvent::PointerDown { pos: Vec2::new(60.0, 40.0) }, rect, ctx)
        });
        assert!(!result.is_consumed());
        assert_eq!(card.geometry().radii().top_left, 12.0);
    }

    #[test]
    fn outlined_card_has_inset_stroke() {
        let mut card = Card::outlined(SizedBox::new(10.0, 10.0));
        with_ctx(|ctx| {
            card.measure(Constraints::unbounded(), ctx);
            card.arrange(Rect::new(0.0, 0.0, 42.0, 42.0), ctx);
        });
        assert!(!card.geometry().stroke().is_empty());
    }
}
