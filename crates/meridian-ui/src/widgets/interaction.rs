use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::paint::Color;
use meridian_engine::shape::ClosedPath;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::ripple::{RippleConfig, RippleLayer};
use crate::theme::StateLayers;

/// Hover / pressed flags and the overlay opacity they imply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateLayer {
    pub hovered: bool,
    pub pressed: bool,
}

impl StateLayer {
    /// Pressed wins over hovered.
    pub fn opacity(self, tokens: &StateLayers) -> f32 {
        if self.pressed {
            tokens.pressed
        } else if self.hovered {
            tokens.hover
        } else {
            0.0
        }
    }
}

/// Outcome of feeding one event to an [`Interaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub result: EventResult,
    /// Press and release both landed inside.
    pub clicked: bool,
}

impl Response {
    const IGNORED: Response = Response { result: EventResult::Ignored, clicked: false };
    const CONSUMED: Response = Response { result: EventResult::Consumed, clicked: false };
}

/// Pointer handling shared by pressable widgets: state layer, ripple and
/// click detection.
///
/// Hit testing is the caller's: pass the outline (or any predicate) that
/// defines "inside".
#[derive(Debug, Default)]
pub struct Interaction {
    state: StateLayer,
    ripple: RippleLayer,
}

impl Interaction {
    pub fn new(config: RippleConfig) -> Self {
        Self { state: StateLayer::default(), ripple: RippleLayer::new(config) }
    }

    #[inline]
    pub fn state(&self) -> StateLayer {
        self.state
    }

    #[inline]
    pub fn ripple(&self) -> &RippleLayer {
        &self.ripple
    }

    /// Call from arrange with the area ripples grow in.
    #[inline]
    pub fn set_size(&mut self, size: Vec2) {
        self.ripple.set_size(size);
    }

    /// `area` is the rect ripple coordinates are relative to.
    pub fn on_event(&mut self, event: &UiEvent, area: Rect, hit: impl Fn(Vec2) -> bool) -> Response {
        match *event {
            UiEvent::PointerMove { pos } => {
                self.state.hovered = hit(pos);
                if self.state.pressed && !self.state.hovered {
                    self.state.pressed = false;
                    self.ripple.pointer_leave();
                }
                Response::IGNORED
            }
            UiEvent::PointerDown { pos } => {
                if !hit(pos) {
                    return Response::IGNORED;
                }
                self.state.hovered = true;
                self.state.pressed = true;
                self.ripple.pointer_down(pos - area.origin);
                Response::CONSUMED
            }
            UiEvent::PointerUp { pos } => {
                if !self.state.pressed {
                    return Response::IGNORED;
                }
                self.state.pressed = false;
                self.ripple.pointer_up();
                Response { result: EventResult::Consumed, clicked: hit(pos) }
            }
            UiEvent::PointerLeave => {
                self.state.hovered = false;
                if self.state.pressed {
                    self.state.pressed = false;
                    self.ripple.pointer_leave();
                }
                Response::IGNORED
            }
        }
    }

    #[inline]
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.ripple.tick(dt)
    }

    /// Paints the state layer over `outline`, then the ripple clipped to it.
    pub fn paint(&self, painter: &mut Painter, area: Rect, outline: &ClosedPath, content: Color) {
        let opacity = self.state.opacity(&painter.theme().state_layers);
        if opacity > 0.0 {
            painter.fill_path(outline, content.with_opacity(opacity));
        }
        self.ripple.paint(painter, area, outline, content);
    }
}
