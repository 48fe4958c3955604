//! Colors shared between widgets, theme and renderers.

mod color;

pub use color::Color;
