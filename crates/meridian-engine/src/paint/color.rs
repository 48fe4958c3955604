/// Linear premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplies straight-alpha components (each clamped to `[0, 1]`).
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Opaque color from a `0xRRGGBB` literal, the form design tokens are published in.
    #[inline]
    pub fn from_rgb_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::from_straight(channel(16), channel(8), channel(0), 1.0)
    }

    /// Scales the color's opacity by `factor` (clamped to `[0, 1]`).
    ///
    /// Used for state layers and ripples, which are a content color at a
    /// small fixed opacity.
    #[inline]
    #[must_use]
    pub fn with_opacity(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { r: self.r * f, g: self.g * f, b: self.b * f, a: self.a * f }
    }

    /// Source-over composite of `top` onto `self`.
    #[inline]
    #[must_use]
    pub fn over(self, top: Color) -> Self {
        let k = 1.0 - top.a;
        Self {
            r: top.r + self.r * k,
            g: top.g + self.g * k,
            b: top.b + self.b * k,
            a: top.a + self.a * k,
        }
    }
}
