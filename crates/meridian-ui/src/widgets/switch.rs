use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::scene::Border;
use meridian_engine::shape::ShapeStyle;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::ripple::RippleConfig;
use crate::widget::Widget;

use super::interaction::Interaction;
use super::surface::{ShapeConfig, SurfaceGeometry};

const TRACK: Vec2 = Vec2::new(52.0, 32.0);
const TRACK_BORDER: f32 = 2.0;
/// Square the thumb's ripple grows in.
const THUMB_TARGET: f32 = 40.0;

/// A pill-shaped on/off switch.
///
/// The press ripple is centered on the thumb and not clipped to the track.
///
/// # Example
/// ```rust,ignore
/// Switch::new()
///     .checked(true)
///     .on_change(|v| log::info!("wifi: {v}"))
/// ```
pub struct Switch {
    checked: bool,
    track: SurfaceGeometry,
    interaction: Interaction,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Switch {
    pub fn new() -> Self {
        Self {
            checked: false,
            track: SurfaceGeometry::default(),
            interaction: Interaction::new(RippleConfig::centered_unbounded()),
            on_change: None,
        }
    }

    pub fn checked(mut self, v: bool) -> Self {
        self.checked = v;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    fn thumb_center(&self, rect: Rect) -> Vec2 {
        let inset = rect.size.y * 0.5;
        let x = if self.checked { rect.origin.x + rect.size.x - inset } else { rect.origin.x + inset };
        Vec2::new(x, rect.origin.y + rect.size.y * 0.5)
    }

    fn thumb_radius(&self) -> f32 {
        if self.checked || self.interaction.state().pressed { 12.0 } else { 8.0 }
    }

    fn thumb_target(&self, rect: Rect) -> Rect {
        let c = self.thumb_center(rect);
        let half = THUMB_TARGET * 0.5;
        Rect::new(c.x - half, c.y - half, THUMB_TARGET, THUMB_TARGET)
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Switch {
    fn measure(&mut self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(TRACK)
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        let border = if self.checked { 0.0 } else { TRACK_BORDER };
        self.track.update(&ShapeConfig::new(ShapeStyle::Full), rect, border, ctx.paths);
        self.interaction.set_size(Vec2::new(THUMB_TARGET, THUMB_TARGET));
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let colors = painter.theme().colors;
        let (track, thumb, content) = if self.checked {
            (colors.primary, colors.on_primary, colors.primary)
        } else {
            (colors.surface_container_highest, colors.outline, colors.on_surface)
        };

        let border = (!self.checked).then(|| Border::new(TRACK_BORDER, colors.outline));
        self.track.paint(painter, Some(track), border);

        let center = self.thumb_center(rect);
        let opacity = self.interaction.state().opacity(&painter.theme().state_layers);
        if opacity > 0.0 {
            painter.fill_circle(center, THUMB_TARGET * 0.5, content.with_opacity(opacity));
        }
        self.interaction.ripple().paint(painter, self.thumb_target(rect), self.track.fill(), content);
        painter.fill_circle(center, self.thumb_radius(), thumb);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        let target = self.thumb_target(rect);
        let track = &self.track;
        let response = self.interaction.on_event(event, target, |p| track.contains(p));
        if response.clicked {
            self.checked = !self.checked;
            if let Some(f) = &mut self.on_change {
                f(self.checked);
            }
        }
        response.result
    }

    fn tick(&mut self, dt: Duration) -> bool {
        self.interaction.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::layout::testing::with_ctx;
    use crate::ripple::RipplePhase;

    #[test]
    fn click_toggles_and_reports() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut s = Switch::new().on_change(move |v| log.borrow_mut().push(v));
        let rect = Rect::new(0.0, 0.0, 52.0, 32.0);
        let pos = Vec2::new(26.0, 16.0);

        with_ctx(|ctx| {
            assert_eq!(s.measure(Constraints::unbounded(), ctx), TRACK);
            s.arrange(rect, ctx);
            for _ in 0..2 {
                s.on_event(&UiEvent::PointerDown { pos }, rect, ctx);
                s.on_event(&UiEvent::PointerUp { pos }, rect, ctx);
            }
        });
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn ripple_is_centered_on_thumb() {
        let mut s = Switch::new();
        let rect = Rect::new(0.0, 0.0, 52.0, 32.0);
        with_ctx(|ctx| {
            s.arrange(rect, ctx);
            s.on_event(&UiEvent::PointerDown { pos: Vec2::new(40.0, 16.0) }, rect, ctx);
        });

        let ripple = s.interaction.ripple();
        assert_eq!(ripple.phase(), RipplePhase::Entering);
        assert_eq!(ripple.ripple().session().origin, Vec2::new(20.0, 20.0));
        assert!(ripple.config().unbounded);
    }
}
