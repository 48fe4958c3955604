use std::time::Duration;

use super::Easing;

/// Identifies one `begin` call on an [`Animator`]. Never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Timeline {
    handle: AnimationHandle,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Timeline {
    fn linear_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Runs a set of independent timelines against a host-provided frame clock.
///
/// Guarantees:
/// - every handle returned by [`begin`](Self::begin) completes at most once,
///   and exactly once unless [`stop`](Self::stop)ped first
/// - completion is only ever reported from [`tick`](Self::tick), never
///   synchronously from `begin`, even for zero durations
#[derive(Debug, Default)]
pub struct Animator {
    next_id: u64,
    running: Vec<Timeline>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timeline and returns its handle.
    pub fn begin(&mut self, duration: Duration, easing: Easing) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        self.running.push(Timeline { handle, duration, elapsed: Duration::ZERO, easing });
        log::trace!("animation {} begin ({duration:?})", handle.0);
        handle
    }

    /// Cancels a timeline. Its completion will never be reported.
    ///
    /// Returns `false` if the handle was not running.
    pub fn stop(&mut self, handle: AnimationHandle) -> bool {
        let before = self.running.len();
        self.running.retain(|t| t.handle != handle);
        let stopped = self.running.len() != before;
        if stopped {
            log::trace!("animation {} stopped", handle.0);
        }
        stopped
    }

    #[inline]
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.running.iter().any(|t| t.handle == handle)
    }

    #[inline]
    pub fn has_running(&self) -> bool {
        !self.running.is_empty()
    }

    /// Eased progress in `[0, 1]`, or `None` once finished or stopped.
    pub fn progress(&self, handle: AnimationHandle) -> Option<f32> {
        self.running
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.easing.apply(t.linear_progress()))
    }

    /// Advances every timeline by `dt` and returns the handles that finished,
    /// in the order they were begun.
    pub fn tick(&mut self, dt: Duration) -> Vec<AnimationHandle> {
        let mut done = Vec::new();
        self.running.retain_mut(|t| {
            t.elapsed = t.elapsed.saturating_add(dt);
            if t.elapsed >= t.duration {
                done.push(t.handle);
                false
            } else {
                true
            }
        });
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn completes_exactly_once() {
        let mut a = Animator::new();
        let h = a.begin(ms(100), Easing::Linear);

        assert!(a.tick(ms(60)).is_empty());
        assert_eq!(a.tick(ms(60)), vec![h]);
        assert!(a.tick(ms(60)).is_empty());
        assert!(!a.is_running(h));
    }

    #[test]
    fn zero_duration_completes_on_next_tick() {
        let mut a = Animator::new();
        let h = a.begin(Duration::ZERO, Easing::Linear);
        assert!(a.is_running(h));
        assert_eq!(a.tick(Duration::ZERO), vec![h]);
    }

    #[test]
    fn stopped_timelines_never_complete() {
        let mut a = Animator::new();
        let h = a.begin(ms(10), Easing::Linear);
        assert!(a.stop(h));
        assert!(!a.stop(h));
        assert!(a.tick(ms(100)).is_empty());
    }

    #[test]
    fn handles_are_unique_and_ordered() {
        let mut a = Animator::new();
        let first = a.begin(ms(50), Easing::Linear);
        let second = a.begin(ms(10), Easing::Linear);
        assert_ne!(first, second);
        assert_eq!(a.tick(ms(100)), vec![first, second]);
    }

    #[test]
    fn progress_is_eased() {
        let mut a = Animator::new();
        let h = a.begin(ms(100), Easing::EaseOut);
        a.tick(ms(50));
        let p = a.progress(h).unwrap();
        assert!((p - 0.75).abs() < 1e-3, "{p}");
    }
}
