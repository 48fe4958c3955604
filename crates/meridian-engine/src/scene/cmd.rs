use crate::coords::Vec2;
use crate::paint::Color;
use crate::shape::ClosedPath;

/// Stroke drawn along a shape outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Fill the interior of a closed path.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: ClosedPath,
    pub color: Color,
}

/// Stroke the stroke-eligible segments of a closed path, centered on the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: ClosedPath,
    pub border: Border,
}

/// Filled circle. Ripples are the main producer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
    Circle(CircleCmd),
}
