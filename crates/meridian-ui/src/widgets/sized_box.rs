use meridian_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// An invisible fixed-size leaf. Used for gaps and as placeholder content.
///
/// # Example
/// ```rust,ignore
/// SpacedPanel::horizontal()
///     .child(SizedBox::new(24.0, 24.0))
///     .child(SizedBox::new(0.0, 24.0).stretch(Stretch::HORIZONTAL))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizedBox {
    size: Vec2,
}

impl SizedBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width.max(0.0), height.max(0.0)) }
    }

    /// Zero-size box.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Widget for SizedBox {
    fn measure(&mut self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
}
