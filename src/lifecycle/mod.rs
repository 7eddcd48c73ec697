//! The four-stage plan-act-verify loop drawn beside the terminal demo.
//!
//! Every stage owns its own motions. Nothing is shared between stages and
//! there is no timer: a frame is a pure function of the elapsed time.

mod motion;
mod stage;

use std::time::Duration;

use rand::Rng;

pub use motion::{Easing, MotionLoop};
pub use stage::{Stage, StageId, STAGES};

/// Status line pulse (opacity 1 → 0.5 → 1)
pub const STATUS_PULSE: MotionLoop =
    MotionLoop::new(Duration::from_millis(2000), Easing::EaseInOut);
/// Activity bar dot sweep
pub const ACTIVITY_SWEEP: MotionLoop = MotionLoop::new(Duration::from_millis(1500), Easing::Linear);
/// Beam travelling from the hub toward a stage
pub const BEAM_TRAVEL: MotionLoop = MotionLoop::new(Duration::from_millis(2000), Easing::Linear);
/// Hub glow
pub const CORE_GLOW: MotionLoop = MotionLoop::new(Duration::from_millis(3000), Easing::EaseInOut);

const MAX_BEAM_DELAY_SECS: f64 = 1.0;

/// Animation values for one stage at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageFrame {
    pub stage: &'static Stage,
    /// Status text opacity in `[0.5, 1.0]`
    pub status_opacity: f64,
    /// Dot offset in `[-1.0, 1.0)`, as a fraction of the bar width from its center
    pub activity_offset: f64,
    /// Beam head position along the connector in `[0.0, 1.0)`
    pub beam_position: f64,
    /// Beam opacity in `[0.0, 1.0]`
    pub beam_opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleFrame {
    pub stages: [StageFrame; 4],
    /// Hub glow intensity in `[0.0, 1.0]`
    pub core_glow: f64,
}

/// Static stage layout with per-stage decorative loops.
///
/// Beam delays are drawn once at construction and never change, so the
/// animation stays stable across redraws.
#[derive(Debug, Clone)]
pub struct LifecycleStepper {
    beams: [MotionLoop; 4],
}

impl LifecycleStepper {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let delays = std::array::from_fn(|_| {
            Duration::from_secs_f64(rng.random_range(0.0..MAX_BEAM_DELAY_SECS))
        });
        Self::with_beam_delays(delays)
    }

    pub fn with_beam_delays(delays: [Duration; 4]) -> Self {
        Self {
            beams: delays.map(|delay| BEAM_TRAVEL.with_delay(delay)),
        }
    }

    pub fn beam_delays(&self) -> [Duration; 4] {
        self.beams.map(|beam| beam.delay)
    }

    pub fn stages(&self) -> &'static [Stage; 4] {
        &STAGES
    }

    pub fn frame(&self, elapsed: Duration) -> LifecycleFrame {
        let stages = std::array::from_fn(|i| stage_frame(&STAGES[i], &self.beams[i], elapsed));
        LifecycleFrame {
            stages,
            core_glow: CORE_GLOW.ping_pong(elapsed),
        }
    }
}

impl Default for LifecycleStepper {
    fn default() -> Self {
        Self::new()
    }
}

fn stage_frame(stage: &'static Stage, beam: &MotionLoop, elapsed: Duration) -> StageFrame {
    let beam_position = beam.progress(elapsed);
    StageFrame {
        stage,
        status_opacity: 1.0 - 0.5 * STATUS_PULSE.ping_pong(elapsed),
        activity_offset: ACTIVITY_SWEEP.eased(elapsed) * 2.0 - 1.0,
        beam_position,
        beam_opacity: 1.0 - (2.0 * beam_position - 1.0).abs(),
    }
}
