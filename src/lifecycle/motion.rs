//! Independent looping motions.

use std::time::Duration;

/// Easing curve applied to loop progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Starts slow, accelerates
    EaseIn,
    /// Starts fast, decelerates
    EaseOut,
    /// Slow start and end, fast middle
    EaseInOut,
}

impl Easing {
    /// Map progress in `[0, 1]` through the curve
    pub fn apply(self, t: f64) -> f64 {
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

/// One infinitely repeating animation cycle.
///
/// A loop is parameterized only by its own duration, start delay and
/// easing; evaluating it needs nothing but the elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionLoop {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl MotionLoop {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fraction of the current cycle in `[0, 1)`; 0 until the delay has passed
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        let period = self.duration.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        (running.as_secs_f64() % period) / period
    }

    pub fn eased(&self, elapsed: Duration) -> f64 {
        self.easing.apply(self.progress(elapsed))
    }

    /// Rises 0 → 1 over the first half of the cycle and falls back over the second
    pub fn ping_pong(&self, elapsed: Duration) -> f64 {
        let t = self.progress(elapsed);
        let triangle = 1.0 - (2.0 * t - 1.0).abs();
        self.easing.apply(triangle)
    }

    /// Whether the loop is in the first half of its cycle
    pub fn first_half(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) < 0.5
    }
}
