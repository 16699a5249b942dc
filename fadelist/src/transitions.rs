use std::time::{Duration, Instant};

/// Duration used when the caller does not configure one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Configuration for the enter/exit transition of a list slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Same easing, different duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Eased progress (0.0 to 1.0) of a transition that started at `start`.
    /// A zero duration is always complete.
    pub fn progress(&self, start: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.easing.apply(t)
    }

    /// Returns true once `now` is at or past the end of the transition.
    pub fn is_finished(&self, start: Instant, now: Instant) -> bool {
        now.saturating_duration_since(start) >= self.duration
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Easing::EaseInOut)
    }
}

/// Curve applied to a slot's enter or exit progress.
///
/// Progress outside 0.0..=1.0 is clamped, so a slot whose clock ran past the
/// end of its transition reads as fully settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Eased progress for linear progress `t`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}
