use std::str::FromStr;

use bitflags::bitflags;

use crate::error::ConfigError;

/// Material shape scale presets.
///
/// Every variant maps to a fixed unscaled radius except [`ShapeStyle::Full`],
/// which always resolves to half the minor dimension of the box (pill / circle).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ShapeStyle {
    #[default]
    None,
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl ShapeStyle {
    pub const ALL: [ShapeStyle; 7] = [
        ShapeStyle::None,
        ShapeStyle::ExtraSmall,
        ShapeStyle::Small,
        ShapeStyle::Medium,
        ShapeStyle::Large,
        ShapeStyle::ExtraLarge,
        ShapeStyle::Full,
    ];

    /// Nominal radius for a `width × height` box, before clamping.
    pub fn nominal_radius(self, width: f32, height: f32) -> f32 {
        match self {
            ShapeStyle::None => 0.0,
            ShapeStyle::ExtraSmall => 4.0,
            ShapeStyle::Small => 8.0,
            ShapeStyle::Medium => 12.0,
            ShapeStyle::Large => 16.0,
            ShapeStyle::ExtraLarge => 28.0,
            ShapeStyle::Full => width.min(height) * 0.5,
        }
    }
}

impl FromStr for ShapeStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "none" => Ok(ShapeStyle::None),
            "extrasmall" | "xs" => Ok(ShapeStyle::ExtraSmall),
            "small" | "s" => Ok(ShapeStyle::Small),
            "medium" | "m" => Ok(ShapeStyle::Medium),
            "large" | "l" => Ok(ShapeStyle::Large),
            "extralarge" | "xl" => Ok(ShapeStyle::ExtraLarge),
            "full" => Ok(ShapeStyle::Full),
            _ => Err(ConfigError::new("shape style", s)),
        }
    }
}

/// Outline construction algorithm.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ShapeFamily {
    /// Circular arcs at each corner.
    #[default]
    Rounded,
    /// A single straight chamfer at each corner.
    Cut,
}

impl FromStr for ShapeFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rounded" => Ok(ShapeFamily::Rounded),
            "cut" => Ok(ShapeFamily::Cut),
            _ => Err(ConfigError::new("shape family", s)),
        }
    }
}

bitflags! {
    /// Set of corners a style or override radius applies to.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ShapeCorner: u8 {
        const TOP_LEFT = 1;
        const TOP_RIGHT = 2;
        const BOTTOM_LEFT = 4;
        const BOTTOM_RIGHT = 8;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

impl ShapeCorner {
    pub const NONE: ShapeCorner = ShapeCorner::empty();
    pub const ALL: ShapeCorner = ShapeCorner::all();
}

impl Default for ShapeCorner {
    fn default() -> Self {
        ShapeCorner::ALL
    }
}

/// Parses `"all"`, `"none"`, or a `|`/`,` separated list such as
/// `"top-left | bottom-right"` or `"top"`.
impl FromStr for ShapeCorner {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut corners = ShapeCorner::NONE;
        for part in s.split(['|', ',']) {
            let key = part.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
            corners |= match key.as_str() {
                "none" | "" => ShapeCorner::NONE,
                "all" => ShapeCorner::ALL,
                "topleft" => ShapeCorner::TOP_LEFT,
                "topright" => ShapeCorner::TOP_RIGHT,
                "bottomleft" => ShapeCorner::BOTTOM_LEFT,
                "bottomright" => ShapeCorner::BOTTOM_RIGHT,
                "top" => ShapeCorner::TOP,
                "bottom" => ShapeCorner::BOTTOM,
                "left" => ShapeCorner::LEFT,
                "right" => ShapeCorner::RIGHT,
                _ => return Err(ConfigError::new("shape corner", s)),
            };
        }
        Ok(corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_radii_follow_the_scale() {
        let expected = [0.0, 4.0, 8.0, 12.0, 16.0, 28.0];
        for (style, want) in ShapeStyle::ALL.iter().zip(expected) {
            assert_eq!(style.nominal_radius(500.0, 500.0), want, "{style:?}");
        }
        assert_eq!(ShapeStyle::Full.nominal_radius(100.0, 40.0), 20.0);
    }

    #[test]
    fn corner_set_none_and_all() {
        assert!(ShapeCorner::NONE.is_empty());
        assert_eq!(ShapeCorner::ALL, ShapeCorner::TOP | ShapeCorner::BOTTOM);
        assert_eq!(ShapeCorner::default(), ShapeCorner::ALL);
    }

    #[test]
    fn parse_corner_lists() {
        assert_eq!("all".parse::<ShapeCorner>().unwrap(), ShapeCorner::ALL);
        assert_eq!(
            "top-left | bottom_right".parse::<ShapeCorner>().unwrap(),
            ShapeCorner::TOP_LEFT | ShapeCorner::BOTTOM_RIGHT
        );
        assert_eq!("left, top".parse::<ShapeCorner>().unwrap(), ShapeCorner::ALL - ShapeCorner::BOTTOM_RIGHT);
        assert!("middle".parse::<ShapeCorner>().is_err());
    }

    #[test]
    fn parse_style_and_family() {
        assert_eq!("extra-large".parse::<ShapeStyle>().unwrap(), ShapeStyle::ExtraLarge);
        assert_eq!("Medium".parse::<ShapeStyle>().unwrap(), ShapeStyle::Medium);
        assert_eq!("cut".parse::<ShapeFamily>().unwrap(), ShapeFamily::Cut);

        let err = "huge".parse::<ShapeStyle>().unwrap_err();
        assert_eq!(err.to_string(), "unknown shape style: \"huge\"");
    }
}
