use std::str::FromStr;
use std::time::Duration;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::error::ConfigError;
use meridian_engine::paint::Color;
use meridian_engine::scene::Border;
use meridian_engine::shape::ShapeStyle;

use crate::constraints::{Constraints, Edges, LayoutCtx, center_rect, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::ripple::RippleConfig;
use crate::theme::ColorScheme;
use crate::widget::{Element, Widget};

use super::interaction::Interaction;
use super::surface::{ShapeConfig, SurfaceGeometry};

/// Material button emphasis levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Filled,
    Tonal,
    Outlined,
    Text,
}

impl ButtonVariant {
    /// `(container, content, border)` for this variant.
    pub fn colors(self, scheme: &ColorScheme) -> (Option<Color>, Color, Option<Border>) {
        match self {
            ButtonVariant::Filled => (Some(scheme.primary), scheme.on_primary, None),
            ButtonVariant::Tonal => {
                (Some(scheme.secondary_container), scheme.on_secondary_container, None)
            }
            ButtonVariant::Outlined => (None, scheme.primary, Some(Border::new(1.0, scheme.outline))),
            ButtonVariant::Text => (None, scheme.primary, None),
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filled" => Ok(ButtonVariant::Filled),
            "tonal" => Ok(ButtonVariant::Tonal),
            "outlined" => Ok(ButtonVariant::Outlined),
            "text" => Ok(ButtonVariant::Text),
            _ => Err(ConfigError::new("button variant", s)),
        }
    }
}

/// A pressable, shaped container around any child content.
///
/// # Example
/// ```rust,ignore
/// Button::outlined(SizedBox::new(64.0, 20.0))
///     .shape(ShapeConfig::new(ShapeStyle::Small))
///     .on_click(|| log::info!("saved"))
/// ```
pub struct Button {
    child: Element,
    variant: ButtonVariant,
    shape: ShapeConfig,
    padding: Edges,
    min_height: f32,
    geometry: SurfaceGeometry,
    interaction: Interaction,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(variant: ButtonVariant, child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            variant,
            shape: ShapeConfig::new(ShapeStyle::Full),
            padding: Edges::symmetric(10.0, 24.0),
            min_height: 40.0,
            geometry: SurfaceGeometry::default(),
            interaction: Interaction::new(RippleConfig::default()),
            on_click: None,
        }
    }

    pub fn filled(child: impl Into<Element>) -> Self {
        Self::new(ButtonVariant::Filled, child)
    }

    pub fn tonal(child: impl Into<Element>) -> Self {
        Self::new(ButtonVariant::Tonal, child)
    }

    pub fn outlined(child: impl Into<Element>) -> Self {
        Self::new(ButtonVariant::Outlined, child)
    }

    pub fn text(child: impl Into<Element>) -> Self {
        let mut b = Self::new(ButtonVariant::Text, child);
        b.padding = Edges::symmetric(10.0, 12.0);
        b
    }

    pub fn shape(mut self, shape: ShapeConfig) -> Self {
        self.shape = shape;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn ripple(mut self, config: RippleConfig) -> Self {
        self.interaction = Interaction::new(config);
        self
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    #[inline]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }
}

impl Widget for Button {
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self.child.measure(constraints.shrink(self.padding), ctx);
        let size = child + self.padding.size();
        constraints.constrain(Vec2::new(size.x, size.y.max(self.min_height)))
    }

    fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx) {
        let (_, _, border) = self.variant.colors(&ctx.theme.colors);
        self.geometry.update(&self.shape, rect, border.map_or(0.0, |b| b.width), ctx.paths);
        self.interaction.set_size(rect.size);

        let inner = inset_rect(rect, self.padding);
        self.child.arrange(center_rect(inner, self.child.desired_size()), ctx);
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (container, content, border) = self.variant.colors(&painter.theme().colors);
        self.geometry.paint(painter, container, border);
        self.interaction.paint(painter, rect, self.geometry.fill(), content);
        self.child.paint(painter);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        if self.child.on_event(event, ctx).is_consumed() {
            return EventResult::Consumed;
        }
        let geometry = &self.geometry;
        let response = self.interaction.on_event(event, rect, |p| geometry.contains(p));
        if response.clicked {
            if let Some(f) = &mut self.on_click {
                f();
            }
        }
        response.result
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let child = self.child.tick(dt);
        self.interaction.tick(dt) | child
    }
}
