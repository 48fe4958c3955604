use std::time::Duration;

use meridian_engine::anim::{AnimationHandle, Animator, Easing};
use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::paint::Color;
use meridian_engine::shape::ClosedPath;

use crate::painter::Painter;

use super::config::RippleConfig;
use super::machine::{Ripple, RippleAnimation, RippleHost, RipplePhase, RippleVisual};

/// Adapts an [`Animator`] plus the element's arranged size to [`RippleHost`].
struct LayerHost<'a> {
    animator: &'a mut Animator,
    size: Vec2,
    easing: Easing,
}

impl RippleHost for LayerHost<'_> {
    fn element_size(&self) -> Vec2 {
        self.size
    }

    fn begin_animation(&mut self, kind: RippleAnimation, duration: Duration) -> AnimationHandle {
        let easing = match kind {
            RippleAnimation::Enter => self.easing,
            RippleAnimation::Exit => Easing::Linear,
        };
        self.animator.begin(duration, easing)
    }

    fn stop_animation(&mut self, handle: AnimationHandle) {
        self.animator.stop(handle);
    }
}

/// A [`Ripple`] with its own animation clock, ready to embed in a widget.
///
/// The owner forwards pointer events in element-local coordinates, calls
/// [`set_size`](Self::set_size) from arrange and [`tick`](Self::tick) once
/// per frame, and paints it over its background.
#[derive(Debug, Default)]
pub struct RippleLayer {
    ripple: Ripple,
    animator: Animator,
    size: Vec2,
}

impl RippleLayer {
    pub fn new(config: RippleConfig) -> Self {
        Self { ripple: Ripple::new(config), animator: Animator::new(), size: Vec2::zero() }
    }

    #[inline]
    pub fn config(&self) -> &RippleConfig {
        self.ripple.config()
    }

    #[inline]
    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    #[inline]
    pub fn phase(&self) -> RipplePhase {
        self.ripple.phase()
    }

    fn split(&mut self) -> (&mut Ripple, LayerHost<'_>) {
        let easing = self.ripple.config().easing;
        (&mut self.ripple, LayerHost { animator: &mut self.animator, size: self.size, easing })
    }

    #[inline]
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn pointer_down(&mut self, local: Vec2) {
        let (ripple, mut host) = self.split();
        ripple.pointer_down(&mut host, local);
    }

    pub fn pointer_up(&mut self) {
        let (ripple, mut host) = self.split();
        ripple.pointer_up(&mut host);
    }

    pub fn pointer_leave(&mut self) {
        let (ripple, mut host) = self.split();
        ripple.pointer_leave(&mut host);
    }

    pub fn start(&mut self, local: Vec2) {
        let (ripple, mut host) = self.split();
        ripple.start(&mut host, local);
    }

    pub fn release(&mut self) {
        let (ripple, mut host) = self.split();
        ripple.release(&mut host);
    }

    /// Advances the clock and feeds completions to the state machine.
    /// Returns `true` while a session is in progress.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let completed = self.animator.tick(dt);
        let (ripple, mut host) = self.split();
        for handle in completed {
            ripple.animation_completed(&mut host, handle);
        }
        self.ripple.phase() != RipplePhase::Idle
    }

    /// Current visual in element-local coordinates.
    pub fn visual(&self) -> Option<RippleVisual> {
        let progress = self
            .ripple
            .active_animation()
            .and_then(|h| self.animator.progress(h))
            .unwrap_or(1.0);
        self.ripple.visual(progress)
    }

    /// Paints the ripple for an element arranged at `rect`, in `color` scaled
    /// by the current opacity. Clipped to `clip` unless the ripple is
    /// unbounded.
    pub fn paint(&self, painter: &mut Painter, rect: Rect, clip: &ClosedPath, color: Color) {
        let Some(visual) = self.visual() else { return };
        if visual.opacity <= 0.0 {
            return;
        }

        let clipped = !self.config().unbounded;
        if clipped {
            painter.push_clip(clip);
        }
        painter.fill_circle(rect.origin + visual.center, visual.radius, color.with_opacity(visual.opacity));
        if clipped {
            painter.pop_clip();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_engine::coords::CornerRadii;
    use meridian_engine::scene::{DrawCmd, DrawList};
    use meridian_engine::shape::{ShapeFamily, build_path};

    use crate::theme::Theme;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn layer() -> RippleLayer {
        let mut layer = RippleLayer::new(RippleConfig::default());
        layer.set_size(Vec2::new(100.0, 40.0));
        layer
    }

    #[test]
    fn completions_flow_through_tick() {
        let mut layer = layer();
        layer.pointer_down(Vec2::new(10.0, 10.0));
        assert!(layer.tick(ms(100)));
        assert_eq!(layer.phase(), RipplePhase::Entering);
        layer.tick(ms(250));
        assert_eq!(layer.phase(), RipplePhase::PeakHold);

        layer.pointer_up();
        assert!(layer.tick(ms(100)));
        assert!(!layer.tick(ms(300)));
        assert_eq!(layer.phase(), RipplePhase::Idle);
        assert!(layer.visual().is_none());
    }

    #[test]
    fn visual_grows_while_entering() {
        let mut layer = layer();
        layer.pointer_down(Vec2::new(50.0, 20.0));
        let r0 = layer.visual().unwrap().radius;
        layer.tick(ms(150));
        let r1 = layer.visual().unwrap().radius;
        assert!(r1 > r0);
    }

    #[test]
    fn paint_clips_unless_unbounded() {
        let theme = Theme::light();
        let clip = build_path(ShapeFamily::Rounded, Rect::new(0.0, 0.0, 100.0, 40.0), CornerRadii::all(8.0), true, false);

        for (unbounded, clipped) in [(false, true), (true, false)] {
            let mut layer = RippleLayer::new(RippleConfig { unbounded, ..RippleConfig::default() });
            layer.set_size(Vec2::new(100.0, 40.0));
            layer.pointer_down(Vec2::new(10.0, 10.0));

            let mut list = DrawList::new();
            let mut painter = Painter::new(&mut list, &theme);
            layer.paint(&mut painter, Rect::new(5.0, 5.0, 100.0, 40.0), &clip, theme.colors.on_surface);

            assert_eq!(list.len(), 1);
            let item = &list.items()[0];
            assert_eq!(item.clip.is_some(), clipped);
            match &item.cmd {
                DrawCmd::Circle(c) => assert_eq!(c.center, Vec2::new(15.0, 15.0)),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn idle_layer_paints_nothing() {
        let theme = Theme::light();
        let layer = layer();
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, &theme);
        layer.paint(&mut painter, Rect::new(0.0, 0.0, 100.0, 40.0), &ClosedPath::empty(), theme.colors.primary);
        assert!(list.is_empty());
    }
}
