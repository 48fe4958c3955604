use std::str::FromStr;
use std::time::Duration;

use meridian_engine::anim::Easing;
use meridian_engine::error::ConfigError;

/// What starts a ripple session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Only explicit [`Ripple::start`](super::Ripple::start) calls.
    Manual,
    /// Pointer down.
    #[default]
    PointerPress,
    /// Pointer up, at the position of the preceding press.
    PointerRelease,
}

impl FromStr for TriggerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(TriggerMode::Manual),
            "pointerpress" | "pointer-press" | "press" => Ok(TriggerMode::PointerPress),
            "pointerrelease" | "pointer-release" | "release" => Ok(TriggerMode::PointerRelease),
            _ => Err(ConfigError::new("trigger mode", s)),
        }
    }
}

/// What ends a ripple session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseMode {
    /// Pointer up or pointer leave.
    #[default]
    Auto,
    /// Only explicit [`Ripple::release`](super::Ripple::release) calls.
    Manual,
}

impl FromStr for ReleaseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ReleaseMode::Auto),
            "manual" => Ok(ReleaseMode::Manual),
            _ => Err(ConfigError::new("release mode", s)),
        }
    }
}

/// Ripple behavior and presentation constants.
///
/// The timing and opacity values only shape the visual; the phase sequence
/// is the same for any of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleConfig {
    pub trigger: TriggerMode,
    pub release: ReleaseMode,
    /// Grow from the element center instead of the pointer.
    pub centered: bool,
    /// Skip clipping to the owner's outline.
    pub unbounded: bool,
    pub enter_duration: Duration,
    pub exit_duration: Duration,
    pub easing: Easing,
    pub enter_opacity_from: f32,
    pub peak_opacity: f32,
    /// Starting fraction of the terminal radius.
    pub initial_scale: f32,
    /// Starting fraction when `centered`.
    pub centered_initial_scale: f32,
    /// Terminal radius multiplier over the farthest-corner distance.
    pub radius_factor: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerMode::default(),
            release: ReleaseMode::default(),
            centered: false,
            unbounded: false,
            enter_duration: Duration::from_millis(300),
            exit_duration: Duration::from_millis(300),
            easing: Easing::Standard,
            enter_opacity_from: 0.05,
            peak_opacity: 0.1,
            initial_scale: 0.2,
            centered_initial_scale: 0.1,
            radius_factor: 3.0,
        }
    }
}

impl RippleConfig {
    /// Centered and unclipped, as used by toggles.
    pub fn centered_unbounded() -> Self {
        Self { centered: true, unbounded: true, ..Self::default() }
    }

    #[inline]
    pub fn start_scale(&self) -> f32 {
        if self.centered { self.centered_initial_scale } else { self.initial_scale }
    }
}
