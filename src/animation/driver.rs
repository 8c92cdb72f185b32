use std::time::Duration;

use crate::animation::ease::Ease;

/// Default length of a rating animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Snapshot of a running animation, as consumed by the paint resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Star index the rotation and tint are keyed to.
    pub target: usize,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Running { target: usize, elapsed: Duration },
}

/// Single-instance, tick-driven animation: `Idle -> Running -> Idle`.
///
/// The host calls [`AnimationDriver::advance`] once per frame with the elapsed time. Starting a
/// new animation while one is running replaces it; nothing is queued.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    duration: Duration,
    ease: Ease,
    phase: Phase,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Ease::default())
    }
}

impl AnimationDriver {
    /// Create an idle driver.
    pub fn new(duration: Duration, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            phase: Phase::Idle,
        }
    }

    /// Configured animation length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Configured easing curve.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Change the duration used by subsequent ticks.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Change the easing curve used by subsequent ticks.
    pub fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    /// Start (or restart) an animation keyed to star `target` with progress 0.
    pub fn start(&mut self, target: usize) {
        if let Phase::Running { target: prev, .. } = self.phase {
            tracing::debug!(prev, target, "restarting star animation");
        } else {
            tracing::debug!(target, "starting star animation");
        }
        self.phase = Phase::Running {
            target,
            elapsed: Duration::ZERO,
        };
    }

    /// Cancel any running animation.
    pub fn stop(&mut self) {
        if self.is_running() {
            tracing::debug!("stopping star animation");
        }
        self.phase = Phase::Idle;
    }

    /// Return `true` while an animation is running.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Target star of the running animation.
    pub fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::Running { target, .. } => Some(target),
            Phase::Idle => None,
        }
    }

    /// Current state, or `None` when idle.
    pub fn state(&self) -> Option<AnimationState> {
        match self.phase {
            Phase::Running { target, elapsed } => Some(AnimationState {
                target,
                progress: self.progress_at(elapsed),
            }),
            Phase::Idle => None,
        }
    }

    /// Advance a running animation by `dt` and return the new progress.
    ///
    /// Returns `None` when idle. The tick that reaches the duration returns exactly `1.0` and
    /// moves the driver back to idle.
    pub fn advance(&mut self, dt: Duration) -> Option<f64> {
        let Phase::Running { target, elapsed } = self.phase else {
            return None;
        };

        let elapsed = elapsed.saturating_add(dt);
        if elapsed >= self.duration {
            tracing::debug!(target, "star animation finished");
            self.phase = Phase::Idle;
            return Some(1.0);
        }

        let progress = self.progress_at(elapsed);
        tracing::trace!(target, progress, "star animation tick");
        self.phase = Phase::Running { target, elapsed };
        Some(progress)
    }

    fn progress_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.ease.apply(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
