use meridian_engine::paint::Color;

/// Material 3 color roles used by the built-in widgets.
///
/// Only the roles the widgets read are carried; hosts with a full token set
/// map theirs onto these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub surface_container_low: Color,
    pub surface_container_highest: Color,
    pub outline: Color,
    pub outline_variant: Color,
}

impl ColorScheme {
    /// Baseline light scheme.
    pub fn light() -> Self {
        let c = Color::from_rgb_hex;
        Self {
            primary: c(0x6750a4),
            on_primary: c(0xffffff),
            primary_container: c(0xeaddff),
            on_primary_container: c(0x21005d),
            secondary_container: c(0xe8def8),
            on_secondary_container: c(0x1d192b),
            surface: c(0xfef7ff),
            on_surface: c(0x1d1b20),
            on_surface_variant: c(0x49454f),
            surface_container_low: c(0xf7f2fa),
            surface_container_highest: c(0xe6e0e9),
            outline: c(0x79747e),
            outline_variant: c(0xcac4d0),
        }
    }

    /// Baseline dark scheme.
    pub fn dark() -> Self {
        let c = Color::from_rgb_hex;
        Self {
            primary: c(0xd0bcff),
            on_primary: c(0x381e72),
            primary_container: c(0x4f378b),
            on_primary_container: c(0xeaddff),
            secondary_container: c(0x4a4458),
            on_secondary_container: c(0xe8def8),
            surface: c(0x141218),
            on_surface: c(0xe6e0e9),
            on_surface_variant: c(0xcac4d0),
            surface_container_low: c(0x1d1b20),
            surface_container_highest: c(0x36343b),
            outline: c(0x938f99),
            outline_variant: c(0x49454f),
        }
    }
}

/// State-layer opacities: the content color drawn over a surface while it
/// is hovered, focused, pressed or dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateLayers {
    pub hover: f32,
    pub focus: f32,
    pub pressed: f32,
    pub dragged: f32,
}

impl Default for StateLayers {
    fn default() -> Self {
        Self { hover: 0.08, focus: 0.10, pressed: 0.10, dragged: 0.16 }
    }
}

/// Visual tokens threaded through layout and paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub state_layers: StateLayers,
}

impl Theme {
    pub fn light() -> Self {
        Self { colors: ColorScheme::light(), state_layers: StateLayers::default() }
    }

    pub fn dark() -> Self {
        Self { colors: ColorScheme::dark(), state_layers: StateLayers::default() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
