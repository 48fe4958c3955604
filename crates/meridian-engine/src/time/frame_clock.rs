use std::time::{Duration, Instant};

/// Timing for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time since the previous tick, after clamping.
    pub dt: Duration,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
enum Source {
    Realtime { last: Instant },
    Fixed { step: Duration },
}

/// Produces per-frame delta times for the animation system.
///
/// Realtime deltas are clamped to `[1ms, 250ms]` so a stall (debugger,
/// minimized window) does not make every running animation jump to its end
/// in a single frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    frame_index: u64,
}

impl FrameClock {
    const DT_MIN: Duration = Duration::from_millis(1);
    const DT_MAX: Duration = Duration::from_millis(250);

    /// Wall-clock deltas.
    pub fn realtime() -> Self {
        Self { source: Source::Realtime { last: Instant::now() }, frame_index: 0 }
    }

    /// Every tick advances by exactly `step`.
    pub fn fixed(step: Duration) -> Self {
        Self { source: Source::Fixed { step }, frame_index: 0 }
    }

    /// Restarts the realtime baseline, e.g. after the host resumes from suspension.
    pub fn reset(&mut self) {
        if let Source::Realtime { last } = &mut self.source {
            *last = Instant::now();
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let dt = match &mut self.source {
            Source::Realtime { last } => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(*last).clamp(Self::DT_MIN, Self::DT_MAX);
                *last = now;
                dt
            }
            Source::Fixed { step } => *step,
        };

        let ft = FrameTime { dt, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::realtime()
    }
}
