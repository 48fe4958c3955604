use std::time::Duration;

use meridian_engine::anim::{AnimationHandle, lerp};
use meridian_engine::coords::Vec2;

use super::config::{ReleaseMode, RippleConfig, TriggerMode};

/// Where a ripple session is in its press/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RipplePhase {
    #[default]
    Idle,
    /// Growing and fading in.
    Entering,
    /// Fully grown, waiting for release.
    PeakHold,
    /// Fading out.
    Exiting,
}

/// The two timelines a ripple asks its host to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleAnimation {
    Enter,
    Exit,
}

/// Services a [`Ripple`] needs from the element that owns it.
///
/// Every handle returned by `begin_animation` must later be reported back
/// through [`Ripple::animation_completed`] exactly once, unless it was
/// stopped first.
pub trait RippleHost {
    fn element_size(&self) -> Vec2;
    fn begin_animation(&mut self, kind: RippleAnimation, duration: Duration) -> AnimationHandle;
    fn stop_animation(&mut self, handle: AnimationHandle);
}

/// State of the current press/release cycle, in element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RippleSession {
    pub origin: Vec2,
    /// Terminal radius.
    pub radius: f32,
    pub phase: RipplePhase,
    /// Cleared by a release that arrives while entering; read when the
    /// enter animation completes.
    pub pointer_down: bool,
    active: Option<AnimationHandle>,
}

/// What to draw for a ripple at a point in its current animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleVisual {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// Press feedback state machine.
///
/// `Idle -> Entering -> (PeakHold | Exiting) -> Idle`. The machine never
/// polls: it asks the host to begin an animation and moves on when the host
/// reports that exact handle completed. Completions for any other handle
/// are stale and ignored.
#[derive(Debug, Clone, Default)]
pub struct Ripple {
    config: RippleConfig,
    session: RippleSession,
    /// Press position held until pointer up in `PointerRelease` mode.
    pending_origin: Option<Vec2>,
}

impl Ripple {
    pub fn new(config: RippleConfig) -> Self {
        Self { config, session: RippleSession::default(), pending_origin: None }
    }

    #[inline]
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    #[inline]
    pub fn session(&self) -> &RippleSession {
        &self.session
    }

    #[inline]
    pub fn phase(&self) -> RipplePhase {
        self.session.phase
    }

    /// Handle of the animation the machine is waiting on, if any.
    #[inline]
    pub fn active_animation(&self) -> Option<AnimationHandle> {
        self.session.active
    }

    // ── explicit API ──────────────────────────────────────────────────────

    /// Starts a new session at `pos` (element-local), cancelling whatever
    /// animation the previous session had in flight.
    ///
    /// No-op while the element has zero area.
    pub fn start(&mut self, host: &mut impl RippleHost, pos: Vec2) {
        let size = host.element_size();
        if !(size.x > 0.0 && size.y > 0.0) {
            log::trace!("ripple start ignored: element is {}x{}", size.x, size.y);
            return;
        }

        if let Some(handle) = self.session.active.take() {
            host.stop_animation(handle);
        }

        let origin = if self.config.centered { Vec2::new(size.x * 0.5, size.y * 0.5) } else { pos };
        let dx = origin.x.max(size.x - origin.x);
        let dy = origin.y.max(size.y - origin.y);

        self.session.origin = origin;
        self.session.radius = dx.hypot(dy) * self.config.radius_factor;
        self.session.pointer_down = true;
        self.transition(RipplePhase::Entering);
        self.session.active = Some(host.begin_animation(RippleAnimation::Enter, self.config.enter_duration));
    }

    /// Ends the session. While entering, the release is deferred until the
    /// enter animation completes.
    pub fn release(&mut self, host: &mut impl RippleHost) {
        match self.session.phase {
            RipplePhase::Entering => self.session.pointer_down = false,
            RipplePhase::PeakHold => self.begin_exit(host),
            RipplePhase::Idle | RipplePhase::Exiting => {}
        }
    }

    // ── pointer protocol ──────────────────────────────────────────────────

    pub fn pointer_down(&mut self, host: &mut impl RippleHost, pos: Vec2) {
        match self.config.trigger {
            TriggerMode::PointerPress => self.start(host, pos),
            TriggerMode::PointerRelease => self.pending_origin = Some(pos),
            TriggerMode::Manual => {}
        }
    }

    pub fn pointer_up(&mut self, host: &mut impl RippleHost) {
        if self.config.trigger == TriggerMode::PointerRelease {
            match self.pending_origin.take() {
                Some(pos) => self.start(host, pos),
                None => return,
            }
        }
        if self.config.trigger != TriggerMode::Manual && self.config.release == ReleaseMode::Auto {
            self.release(host);
        }
    }

    pub fn pointer_leave(&mut self, host: &mut impl RippleHost) {
        self.pending_origin = None;
        if self.config.trigger == TriggerMode::PointerPress && self.config.release == ReleaseMode::Auto {
            self.release(host);
        }
    }

    // ── animation callbacks ───────────────────────────────────────────────

    pub fn animation_completed(&mut self, host: &mut impl RippleHost, handle: AnimationHandle) {
        if self.session.active != Some(handle) {
            log::debug!("ripple: ignoring stale completion {}", handle.raw());
            return;
        }
        self.session.active = None;

        match self.session.phase {
            RipplePhase::Entering if self.session.pointer_down => self.transition(RipplePhase::PeakHold),
            RipplePhase::Entering => self.begin_exit(host),
            RipplePhase::Exiting => self.transition(RipplePhase::Idle),
            RipplePhase::Idle | RipplePhase::PeakHold => {}
        }
    }

    // ── presentation ──────────────────────────────────────────────────────

    /// Visual at `progress` (eased, `0..=1`) through the current phase's
    /// animation. `None` while idle.
    pub fn visual(&self, progress: f32) -> Option<RippleVisual> {
        let t = progress.clamp(0.0, 1.0);
        let cfg = &self.config;
        let (scale, opacity) = match self.session.phase {
            RipplePhase::Idle => return None,
            RipplePhase::Entering => {
                (lerp(cfg.start_scale(), 1.0, t), lerp(cfg.enter_opacity_from, cfg.peak_opacity, t))
            }
            RipplePhase::PeakHold => (1.0, cfg.peak_opacity),
            RipplePhase::Exiting => (1.0, cfg.peak_opacity * (1.0 - t)),
        };
        Some(RippleVisual { center: self.session.origin, radius: self.session.radius * scale, opacity })
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn begin_exit(&mut self, host: &mut impl RippleHost) {
        self.session.pointer_down = false;
        self.transition(RipplePhase::Exiting);
        self.session.active = Some(host.begin_animation(RippleAnimation::Exit, self.config.exit_duration));
    }

    fn transition(&mut self, to: RipplePhase) {
        log::debug!("ripple: {:?} -> {:?}", self.session.phase, to);
        self.session.phase = to;
    }
}
