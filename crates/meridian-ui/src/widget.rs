use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::layout::{LayoutChild, LayoutProps, Stretch, Visibility};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Layout is two-pass. A parent always calls `measure` before `arrange` for
/// the same pass; `arrange` may rely on state recorded by `measure`.
///
/// ```rust,ignore
/// use meridian_ui::prelude::*;
///
/// pub struct Dot { size: f32 }
///
/// impl Widget for Dot {
///     fn measure(&mut self, c: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         c.constrain(Vec2::new(self.size, self.size))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_circle(rect.center(), rect.half_minor(), painter.theme().colors.primary);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Size this widget wants within `constraints`.
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Final placement. Containers position their children here; leaves
    /// rebuild any rect-dependent geometry.
    fn arrange(&mut self, _rect: Rect, _ctx: &LayoutCtx) {}

    /// Draw into `painter` within `rect` (the rect from the last `arrange`).
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        EventResult::Ignored
    }

    /// Advance animations by `dt`. Returns `true` while anything is still animating.
    fn tick(&mut self, _dt: Duration) -> bool {
        false
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget plus the per-child layout record panels read.
///
/// `Element` remembers its last desired size and arranged rect, so paint and
/// event routing use exactly the geometry layout produced.
pub struct Element {
    widget: Box<dyn Widget>,
    props: LayoutProps,
    desired: Vec2,
    rect: Rect,
}

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self {
            widget: Box::new(w),
            props: LayoutProps::default(),
            desired: Vec2::zero(),
            rect: Rect::default(),
        }
    }

    pub fn with_props(mut self, props: LayoutProps) -> Self {
        self.props = props;
        self
    }

    pub fn stretch(mut self, stretch: Stretch) -> Self {
        self.props.stretch = stretch;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.props.visibility = visibility;
        self
    }

    pub fn min_size(mut self, min: Vec2) -> Self {
        self.props.min_size = Some(min);
        self
    }

    #[inline]
    pub fn props(&self) -> LayoutProps {
        self.props
    }

    #[inline]
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.props.visibility = visibility;
    }

    /// Rect from the most recent arrange pass.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Size from the most recent measure pass.
    #[inline]
    pub fn desired_size(&self) -> Vec2 {
        self.desired
    }

    /// Measures against `constraints`, applies the minimum-size override and
    /// records the result. Collapsed elements report zero without measuring.
    pub fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.desired = if self.props.visibility == Visibility::Collapsed {
            Vec2::zero()
        } else {
            let size = self.widget.measure(constraints, ctx);
            match self.props.min_size {
                Some(min) => size.max(min),
                None => size,
            }
        };
        self.desired
    }

    pub fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        self.rect = rect;
        if self.props.visibility != Visibility::Collapsed {
            self.widget.arrange(rect, ctx);
        }
    }

    pub fn paint(&self, painter: &mut Painter) {
        if self.props.visibility == Visibility::Visible {
            self.widget.paint(painter, self.rect);
        }
    }

    pub fn on_event(&mut self, event: &UiEvent, ctx: &LayoutCtx) -> EventResult {
        if self.props.visibility != Visibility::Visible {
            return EventResult::Ignored;
        }
        self.widget.on_event(event, self.rect, ctx)
    }

    #[inline]
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.widget.tick(dt)
    }
}

impl LayoutChild for Element {
    #[inline]
    fn props(&self) -> LayoutProps {
        self.props
    }

    #[inline]
    fn measure(&mut self, available: Vec2, ctx: &LayoutCtx) -> Vec2 {
        Element::measure(self, Constraints::loose(available), ctx)
    }

    #[inline]
    fn desired_size(&self) -> Vec2 {
        self.desired
    }

    #[inline]
    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        Element::arrange(self, rect, ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

// ── child helpers ─────────────────────────────────────────────────────────

/// Routes `event` to `children` topmost first (reverse paint order) until
/// one consumes it.
pub fn route_event(children: &mut [Element], event: &UiEvent, ctx: &LayoutCtx) -> EventResult {
    for child in children.iter_mut().rev() {
        if child.on_event(event, ctx).is_consumed() {
            return EventResult::Consumed;
        }
    }
    EventResult::Ignored
}

/// Ticks every child; `true` if any is still animating.
pub fn tick_children(children: &mut [Element], dt: Duration) -> bool {
    children.iter_mut().fold(false, |animating, child| child.tick(dt) | animating)
}

// ── WidgetExt ─────────────────────────────────────────────────────────────

/// Per-child layout settings for any widget, producing an [`Element`].
///
/// ```rust,ignore
/// SpacedPanel::horizontal()
///     .child(SizedBox::new(48.0, 48.0))
///     .child(SizedBox::new(0.0, 48.0).stretch(Stretch::HORIZONTAL))
/// ```
pub trait WidgetExt: Widget + Sized {
    fn stretch(self, stretch: Stretch) -> Element {
        Element::new(self).stretch(stretch)
    }

    fn visibility(self, visibility: Visibility) -> Element {
        Element::new(self).visibility(visibility)
    }

    fn collapsed(self) -> Element {
        Element::new(self).visibility(Visibility::Collapsed)
    }

    fn min_size(self, min: Vec2) -> Element {
        Element::new(self).min_size(min)
    }
}

impl<W: Widget> WidgetExt for W {}
