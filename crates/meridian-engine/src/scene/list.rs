use crate::coords::Vec2;
use crate::paint::Color;
use crate::shape::ClosedPath;

use super::{Border, CircleCmd, DrawCmd, FillPathCmd, SortKey, StrokePathCmd, ZIndex};

/// Index of a clip path recorded in a [`DrawList`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClipId(u32);

#[derive(Debug, Clone, PartialEq)]
struct ClipEntry {
    path: ClosedPath,
    parent: Option<ClipId>,
}

/// A single draw item: sort key + command + innermost active clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// `None` = unclipped. Follow [`DrawList::clip_chain`] for nested clips.
    pub clip: Option<ClipId>,
}

/// Recorded draw stream for one frame.
///
/// Clips are closed paths (not just scissor rects) so a ripple can be
/// confined to a rounded or cut outline. Nested clips intersect; a renderer
/// walks [`clip_chain`](Self::clip_chain) to apply all of them.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    clips: Vec<ClipEntry>,
    clip_stack: Vec<ClipId>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears items and clips. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.clips.clear();
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip: self.clip_stack.last().copied(),
        });
    }

    pub fn push_fill_path(&mut self, z: ZIndex, path: ClosedPath, color: Color) {
        if !path.is_empty() {
            self.push(z, DrawCmd::FillPath(FillPathCmd { path, color }));
        }
    }

    pub fn push_stroke_path(&mut self, z: ZIndex, path: ClosedPath, border: Border) {
        if !path.is_empty() && border.width > 0.0 {
            self.push(z, DrawCmd::StrokePath(StrokePathCmd { path, border }));
        }
    }

    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        if radius > 0.0 {
            self.push(z, DrawCmd::Circle(CircleCmd { center, radius, color }));
        }
    }

    /// Begins a clip region bounded by `path`. Must be balanced by [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, path: ClosedPath) -> ClipId {
        let id = ClipId(self.clips.len() as u32);
        self.clips.push(ClipEntry { path, parent: self.clip_stack.last().copied() });
        self.clip_stack.push(id);
        id
    }

    /// Ends the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) without a matching [`push_clip`](Self::push_clip).
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Clip paths that apply under `clip`, innermost first.
    pub fn clip_chain(&self, clip: Option<ClipId>) -> impl Iterator<Item = &ClosedPath> {
        let mut cur = clip;
        std::iter::from_fn(move || {
            let id = cur?;
            let entry = &self.clips[id.0 as usize];
            cur = entry.parent;
            Some(&entry.path)
        })
    }

    /// Items in paint order (back-to-front).
    pub fn paint_order(&self) -> Vec<&DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.key);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};
    use crate::shape::{ShapeFamily, build_path};

    fn square(size: f32) -> ClosedPath {
        build_path(ShapeFamily::Rounded, Rect::new(0.0, 0.0, size, size), CornerRadii::zero(), true, false)
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex(2), Vec2::zero(), 1.0, Color::transparent());
        list.push_circle(ZIndex(0), Vec2::zero(), 2.0, Color::transparent());
        list.push_circle(ZIndex(0), Vec2::zero(), 3.0, Color::transparent());

        let radii: Vec<f32> = list
            .paint_order()
            .into_iter()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.radius,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(radii, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn degenerate_commands_are_dropped() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex(0), ClosedPath::empty(), Color::transparent());
        list.push_stroke_path(ZIndex(0), square(4.0), Border::new(0.0, Color::transparent()));
        list.push_circle(ZIndex(0), Vec2::zero(), 0.0, Color::transparent());
        assert!(list.is_empty());
    }

    #[test]
    fn nested_clips_chain_to_the_root() {
        let mut list = DrawList::new();
        list.push_clip(square(10.0));
        list.push_clip(square(5.0));
        list.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::transparent());
        list.pop_clip();
        list.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::transparent());
        list.pop_clip();
        list.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::transparent());

        let depths: Vec<usize> = list.items().iter().map(|i| list.clip_chain(i.clip).count()).collect();
        assert_eq!(depths, vec![2, 1, 0]);
    }
}
