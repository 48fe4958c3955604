use meridian_engine::coords::Vec2;
use meridian_engine::paint::Color;
use meridian_engine::scene::{Border, DrawList, ZIndex};
use meridian_engine::shape::ClosedPath;

use crate::theme::Theme;

/// Drawing surface passed to [`Widget::paint`](crate::Widget::paint).
///
/// Wraps the engine's `DrawList`. Every command gets the next z value, so
/// later paints land on top of earlier ones.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    theme: &'a Theme,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, theme: &'a Theme) -> Self {
        Self { draw_list, theme, z: 0 }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_path(&mut self, path: &ClosedPath, color: Color) {
        let z = self.next_z();
        self.draw_list.push_fill_path(z, path.clone(), color);
    }

    pub fn stroke_path(&mut self, path: &ClosedPath, border: Border) {
        let z = self.next_z();
        self.draw_list.push_stroke_path(z, path.clone(), border);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip region bounded by `path`. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, path: &ClosedPath) {
        self.draw_list.push_clip(path.clone());
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
