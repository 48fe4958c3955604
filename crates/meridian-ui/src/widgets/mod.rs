//! Built-in widgets.
//!
//! Panels ([`spaced_panel`], [`wrap_panel`]) lay out any number of children.
//! Shaped widgets resolve their outline through [`surface::SurfaceGeometry`]
//! and pressable ones share [`interaction::Interaction`] for state layers and
//! ripples.

pub mod button;
pub mod card;
pub mod interaction;
pub mod navigation_rail;
pub mod sized_box;
pub mod spaced_panel;
pub mod surface;
pub mod switch;
pub mod wrap_panel;
