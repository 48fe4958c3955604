//! Meridian UI: Material Design 3 widgets on top of `meridian-engine`.
//!
//! The widget tree is retained and laid out in two passes:
//! [`Widget::measure`] reports a desired size, [`Widget::arrange`] receives the
//! final rect. Paint then records into the engine's `DrawList`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use meridian_ui::prelude::*;
//!
//! let mut scene = UiScene::new(Theme::light());
//! let mut root: Element = SpacedPanel::horizontal()
//!     .spacing(8.0)
//!     .child(Button::filled(SizedBox::new(64.0, 20.0)).on_click(|| log::info!("saved")))
//!     .child(SizedBox::new(0.0, 20.0).stretch(Stretch::HORIZONTAL))
//!     .into();
//!
//! // Once per frame:
//! let draw_list = scene.frame(&mut root, viewport, &input, dt);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type and use it anywhere an [`Element`] is
//! accepted. [`WidgetExt`] adds the per-child layout settings (stretch,
//! visibility, minimum size) that panels read.

pub mod constraints;
pub mod event;
pub mod layout;
pub mod painter;
pub mod ripple;
pub mod scene;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use widget::{Element, Widget, WidgetExt};

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::layout::{
        HorizontalAlignment, LayoutChild, LayoutProps, Orientation, SpacedLayout, SpacedParams,
        Stretch, Visibility, WrapLayout, WrapParams, WrapRow,
    };
    pub use crate::painter::Painter;
    pub use crate::ripple::{
        ReleaseMode, Ripple, RippleAnimation, RippleConfig, RippleHost, RippleLayer, RipplePhase,
        RippleVisual, TriggerMode,
    };
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::theme::{ColorScheme, StateLayers, Theme};
    pub use crate::widget::{Element, Widget, WidgetExt};
    pub use crate::widgets::{
        button::{Button, ButtonVariant},
        card::{Card, CardVariant},
        interaction::{Interaction, StateLayer},
        navigation_rail::NavigationRail,
        sized_box::SizedBox,
        spaced_panel::SpacedPanel,
        surface::{ShapeConfig, Surface, SurfaceGeometry},
        switch::Switch,
        wrap_panel::WrapPanel,
    };

    pub use meridian_engine::coords::{CornerRadii, Rect, Vec2};
    pub use meridian_engine::paint::Color;
    pub use meridian_engine::scene::Border;
    pub use meridian_engine::shape::{ShapeCorner, ShapeFamily, ShapeStyle};
}
