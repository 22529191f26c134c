//! Kinetic scrolling for planar drags.
//!
//! While the user drags, an exponentially smoothed speed estimate is kept.
//! On release a fast enough drag keeps coasting in its last direction, with
//! the step size decaying as `amplitude * e^(-elapsed / time_constant)`
//! until it drops below the minimum step.
//!
//! The scroller only computes motion. The caller applies returned drags to
//! the camera and re-resolves the look-at pivot when motion settles.

use glam::DVec2;
use web_time::{Duration, Instant};

use crate::options::KineticOptions;

/// Momentum state, reset on every press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumState {
    /// Direction of the most recent drag. Unit length while coasting.
    pub last_direction: DVec2,
    /// Smoothed drag speed.
    pub velocity: f64,
    /// Coasting step scale at `timestamp`; zero when not coasting.
    pub amplitude: f64,
    /// Time of the last press, drag or release.
    pub timestamp: Instant,
}

impl MomentumState {
    /// At rest as of `now`.
    #[must_use]
    pub fn at_rest(now: Instant) -> Self {
        Self {
            last_direction: DVec2::ZERO,
            velocity: 0.0,
            amplitude: 0.0,
            timestamp: now,
        }
    }

    /// Whether a release left the state coasting.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.amplitude > 0.0
    }
}

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The drag was fast enough to keep moving.
    Coasting,
    /// Motion stopped; the look-at pivot should be re-resolved.
    Settled,
}

/// Result of one decay tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoastStep {
    /// Not coasting.
    Idle,
    /// Apply this drag to the camera.
    Drag(DVec2),
    /// Coasting just ended; the look-at pivot should be re-resolved.
    Stopped,
}

/// Engaged/coasting momentum model over a [`MomentumState`].
#[derive(Debug, Clone)]
pub struct KineticScroller {
    options: KineticOptions,
    state: MomentumState,
}

impl KineticScroller {
    /// Scroller at rest.
    #[must_use]
    pub fn new(options: KineticOptions) -> Self {
        Self::from_state(options, MomentumState::at_rest(Instant::now()))
    }

    /// Scroller resuming from an explicit state.
    #[must_use]
    pub fn from_state(options: KineticOptions, state: MomentumState) -> Self {
        Self { options, state }
    }

    /// Current momentum state.
    #[must_use]
    pub fn state(&self) -> &MomentumState {
        &self.state
    }

    /// Tuning constants.
    #[must_use]
    pub fn options(&self) -> &KineticOptions {
        &self.options
    }

    /// Replace the tuning constants. The current state is kept.
    pub fn set_options(&mut self, options: KineticOptions) {
        self.options = options;
    }

    /// Stop any motion immediately.
    pub fn halt(&mut self) {
        self.state.amplitude = 0.0;
    }

    /// Pointer pressed: forget all momentum.
    pub fn press(&mut self, now: Instant) {
        self.state = MomentumState::at_rest(now);
    }

    /// Pointer dragged by `delta`. Returns the drag to apply right away.
    pub fn drag(&mut self, delta: DVec2, now: Instant) -> DVec2 {
        let elapsed = elapsed_millis(self.state.timestamp, now);
        self.state.timestamp = now;
        let speed =
            self.options.velocity_scale * delta.length() / (1.0 + elapsed);
        self.state.velocity = self.options.smoothing * speed
            + (1.0 - self.options.smoothing) * self.state.velocity;
        self.state.last_direction = delta;
        delta
    }

    /// Pointer released. Coasts only when the release carries momentum;
    /// otherwise the motion settles and the caller re-resolves the pivot.
    pub fn release(&mut self, now: Instant) -> Release {
        let length = self.state.last_direction.length();
        let amplitude = self.options.amplitude_factor * self.state.velocity;
        if self.state.velocity.abs() > self.options.coast_threshold
            && length > 0.0
            && amplitude > 0.0
        {
            self.state.amplitude = amplitude;
            self.state.timestamp = now;
            self.state.last_direction /= length;
            log::debug!(
                "coasting with amplitude {:.1}",
                self.state.amplitude
            );
            Release::Coasting
        } else {
            self.state.amplitude = 0.0;
            Release::Settled
        }
    }

    /// Advance coasting to `now`. Safe to call every frame; does nothing
    /// unless coasting.
    pub fn tick(&mut self, now: Instant) -> CoastStep {
        if !self.state.is_coasting() {
            return CoastStep::Idle;
        }
        let elapsed = elapsed_millis(self.state.timestamp, now);
        let delta = self.state.amplitude
            * (-elapsed / self.options.time_constant_ms).exp();
        if delta.abs() > self.options.min_step {
            CoastStep::Drag(self.state.last_direction * delta)
        } else {
            self.state.amplitude = 0.0;
            CoastStep::Stopped
        }
    }
}

fn elapsed_millis(since: Instant, now: Instant) -> f64 {
    now.checked_duration_since(since)
        .unwrap_or(Duration::ZERO)
        .as_secs_f64()
        * 1000.0
}
