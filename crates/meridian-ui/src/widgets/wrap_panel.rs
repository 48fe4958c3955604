use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::layout::{HorizontalAlignment, WrapLayout, WrapParams, WrapRow};
use crate::painter::Painter;
use crate::widget::{Element, Widget, route_event, tick_children};

/// Flows children left to right, wrapping onto a new row when the next one
/// does not fit.
///
/// # Example
/// ```rust,ignore
/// WrapPanel::new()
///     .spacing(8.0, 8.0)
///     .alignment(HorizontalAlignment::Center)
///     .children(chips)
/// ```
pub struct WrapPanel {
    children: Vec<Element>,
    params: WrapParams,
    padding: Edges,
    layout: WrapLayout,
}

impl WrapPanel {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            params: WrapParams::default(),
            padding: Edges::default(),
            layout: WrapLayout::default(),
        }
    }

    pub fn spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.params.horizontal_spacing = horizontal;
        self.params.vertical_spacing = vertical;
        self.layout = WrapLayout::new(self.params);
        self
    }

    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.params.alignment = alignment;
        self.layout = WrapLayout::new(self.params);
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

    /// Rows placed by the most recent arrange.
    #[inline]
    pub fn rows(&self) -> &[WrapRow] {
        self.layout.arranged_rows()
    }
}

impl Default for WrapPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for WrapPanel {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::with_ctx;
    use crate::widgets::sized_box::SizedBox;

    #[test]
    fn wraps_inside_padding() {
        let mut panel = WrapPanel::new()
            .spacing(10.0, 4.0)
            .padding(Edges::all(2.0))
            .children((0..3).map(|_| SizedBox::new(40.0, 20.0)));

        with_ctx(|ctx| {
            let size = panel.measure(Constraints::loose(Vec2::new(104.0, 200.0)), ctx);
            assert_eq!(size, Vec2::new(94.0, 48.0));
            panel.arrange(Rect::new(0.0, 0.0, 104.0, 48.0), ctx);
        });

        assert_eq!(panel.rows().len(), 2);
        assert_eq!(panel.elements()[2].rect(), Rect::new(2.0, 26.0, 40.0, 20.0));
    }
}
