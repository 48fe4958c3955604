use crate::coords::{CornerRadii, Rect};

use super::{ShapeCorner, ShapeStyle};

#[inline]
fn half_minor(width: f32, height: f32) -> f32 {
    (width.min(height) * 0.5).max(0.0)
}

/// Clamps `r` into `[0, limit]`. NaN collapses to zero.
#[inline]
fn clamp_radius(r: f32, limit: f32) -> f32 {
    r.max(0.0).min(limit)
}

#[inline]
fn pick(corners: ShapeCorner, corner: ShapeCorner, on: f32, off: f32) -> f32 {
    if corners.contains(corner) { on } else { off }
}

/// Radii for `style` applied to the corners in `corners`, zero elsewhere.
///
/// The nominal style radius is clamped to half of the box's minor dimension.
pub fn from_style(style: ShapeStyle, corners: ShapeCorner, width: f32, height: f32) -> CornerRadii {
    let limit = half_minor(width, height);
    let r = clamp_radius(style.nominal_radius(width, height), limit);

    CornerRadii {
        top_left: pick(corners, ShapeCorner::TOP_LEFT, r, 0.0),
        top_right: pick(corners, ShapeCorner::TOP_RIGHT, r, 0.0),
        bottom_right: pick(corners, ShapeCorner::BOTTOM_RIGHT, r, 0.0),
        bottom_left: pick(corners, ShapeCorner::BOTTOM_LEFT, r, 0.0),
    }
}

/// Mixes a caller-supplied per-corner radius with a style-driven fallback.
///
/// Corners in `override_corners` take the clamped `custom` value. The other
/// corners take the clamped style radius when `use_style_fallback` is set,
/// and the clamped `custom` value otherwise.
pub fn clamp_override(
    custom: CornerRadii,
    style: ShapeStyle,
    width: f32,
    height: f32,
    use_style_fallback: bool,
    override_corners: ShapeCorner,
) -> CornerRadii {
    let limit = half_minor(width, height);
    let style_r = clamp_radius(style.nominal_radius(width, height), limit);

    let resolve = |corner: ShapeCorner, custom_r: f32| {
        let custom_r = clamp_radius(custom_r, limit);
        if override_corners.contains(corner) || !use_style_fallback {
            custom_r
        } else {
            style_r
        }
    };

    CornerRadii {
        top_left: resolve(ShapeCorner::TOP_LEFT, custom.top_left),
        top_right: resolve(ShapeCorner::TOP_RIGHT, custom.top_right),
        bottom_right: resolve(ShapeCorner::BOTTOM_RIGHT, custom.bottom_right),
        bottom_left: resolve(ShapeCorner::BOTTOM_LEFT, custom.bottom_left),
    }
}

/// Bounds and radii for a stroke of `thickness` drawn fully inside `bounds`.
///
/// The outline moves inward by half the thickness; radii shrink by the same
/// amount so the stroke stays concentric with the fill.
pub fn inset_for_stroke(bounds: Rect, radii: CornerRadii, thickness: f32) -> (Rect, CornerRadii) {
    let half = (thickness * 0.5).max(0.0);
    let inner = bounds.deflate(half);
    let limit = inner.half_minor();
    (inner, radii.map(|r| clamp_radius(r - half, limit)))
}
