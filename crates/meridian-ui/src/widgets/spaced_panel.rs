use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::layout::{Orientation, SpacedLayout, SpacedParams};
use crate::painter::Painter;
use crate::widget::{Element, Widget, route_event, tick_children};

/// Stacks children along one axis with fixed spacing. Children marked
/// stretchable along that axis share whatever space is left.
///
/// # Example
/// ```rust,ignore
/// SpacedPanel::horizontal()
///     .spacing(8.0)
///     .child(Button::text(SizedBox::new(48.0, 20.0)))
///     .child(SizedBox::new(0.0, 1.0).stretch(Stretch::HORIZONTAL))
///     .child(Button::filled(SizedBox::new(48.0, 20.0)))
/// ```
pub struct SpacedPanel {
    children: Vec<Element>,
    params: SpacedParams,
    padding: Edges,
    layout: SpacedLayout,
}

impl SpacedPanel {
    pub fn new(orientation: Orientation) -> Self {
        let params = SpacedParams { orientation, ..SpacedParams::default() };
        Self {
            children: Vec::new(),
            params,
            padding: Edges::default(),
            layout: SpacedLayout::new(params),
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.params.spacing = v;
        self.layout.set_params(self.params);
        self
    }

    /// Overlap adjacent children by `thickness` so their borders merge.
    /// Only takes effect with zero spacing.
    pub fn join_borders(mut self, thickness: f32) -> Self {
        self.params.join_borders = true;
        self.params.border_thickness = thickness;
        self.layout.set_params(self.params);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.children
    }

    #[inline]
    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

impl Widget for SpacedPanel {
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = constraints.shrink(self.padding);
        let content = self.layout.measure(&mut self.children, inner.max, ctx);
        constraints.constrain(content + self.padding.size())
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        self.layout.arrange(&mut self.children, inset_rect(rect, self.padding), ctx);
    }

    fn paint(&self, painter: &mut Painter, _rect: Rect) {
        for child in &self.children {
            child.paint(painter);
        }
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect, ctx: &LayoutCtx) -> EventResult {
        route_event(&mut self.children, event, ctx)
    }

    fn tick(&mut self, dt: Duration) -> bool {
        tick_children(&mut self.children, dt)
    }
}
