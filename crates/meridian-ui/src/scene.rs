use std::cell::RefCell;
use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::scene::DrawList;
use meridian_engine::shape::PathCache;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
///
/// Construct this from the host's input state each frame; [`UiScene`]
/// derives down / up / move / leave events by comparing snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiInput {
    /// Cursor position in logical pixels, `None` when outside the surface.
    pub pointer_pos: Option<Vec2>,
    /// `true` while the primary button is held down.
    pub pointer_down: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the theme, the path cache shared by every shaped widget, and the
/// `DrawList` populated by [`frame`](Self::frame). The widget tree itself
/// stays with the caller so its state persists between frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new(Theme::dark());
/// let mut root: Element = SpacedPanel::vertical().child(Switch::new()).into();
///
/// // In the host's frame callback:
/// let draw_list = ui.frame(&mut root, viewport, &UiInput { pointer_pos, pointer_down }, dt);
/// renderer.replay(draw_list.paint_order());
/// ```
pub struct UiScene {
    theme: Theme,
    draw_list: DrawList,
    paths: RefCell<PathCache>,
    last_input: UiInput,
    needs_redraw: bool,
}

impl UiScene {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            draw_list: DrawList::new(),
            paths: RefCell::new(PathCache::new()),
            last_input: UiInput::default(),
            needs_redraw: true,
        }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.needs_redraw = true;
    }

    /// Draw list from the most recent frame.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// `(hits, misses)` of the shared path cache.
    pub fn path_cache_stats(&self) -> (u64, u64) {
        self.paths.borrow().stats()
    }

    /// `true` while an animation is running or input changed last frame.
    /// Hosts that render on demand keep scheduling frames until it clears.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Runs one frame: tick animations, measure, arrange, route the input
    /// changes since the previous frame, then paint.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput, dt: Duration) -> &DrawList {
        let animating = root.tick(dt);
        let events = self.input_events(input);

        let ctx = LayoutCtx::new(&self.theme, &self.paths);

        // ── layout ────────────────────────────────────────────────────────
        root.measure(Constraints::loose(viewport), &ctx);
        root.arrange(Rect::from_origin_size(Vec2::zero(), viewport), &ctx);

        // ── events ────────────────────────────────────────────────────────
        for event in &events {
            root.on_event(event, &ctx);
        }

        // ── paint ─────────────────────────────────────────────────────────
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.theme);
            root.paint(&mut painter);
        }

        self.needs_redraw = animating || !events.is_empty();
        log::trace!(
            "frame: {} events, {} draw items, animating={animating}",
            events.len(),
            self.draw_list.len()
        );
        &self.draw_list
    }

    fn input_events(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let prev = std::mem::replace(&mut self.last_input, *input);
        let mut events = Vec::new();

        match input.pointer_pos {
            Some(pos) => {
                if prev.pointer_pos != Some(pos) {
                    events.push(UiEvent::PointerMove { pos });
                }
                match (prev.pointer_down, input.pointer_down) {
                    (false, true) => events.push(UiEvent::PointerDown { pos }),
                    (true, false) => events.push(UiEvent::PointerUp { pos }),
                    _ => {}
                }
            }
            None => {
                if prev.pointer_pos.is_some() {
                    events.push(UiEvent::PointerLeave);
                }
                self.last_input.pointer_down = false;
            }
        }
        events
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
