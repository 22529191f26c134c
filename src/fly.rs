//! Fly-through planning.
//!
//! A fly-through visits a sequence of keyframe viewpoints, emitting
//! `num_inbetweens` interpolated viewpoints per segment. Within a segment
//! the camera translates from the first step but only starts turning
//! toward the next heading once half of the steps have passed, finishing
//! the turn as it arrives.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::collaborators::{CameraSnapshot, SceneBounds, WaypointPath};
use crate::error::VantageError;
use crate::viewpoint::ViewpointStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fly-through", inline)]
#[serde(default)]
/// Fly-through playback parameters.
pub struct FlyParameters {
    /// Interpolated viewpoints per keyframe segment.
    #[schemars(title = "Inbetweens", range(min = 1, max = 1000))]
    pub num_inbetweens: u32,
    /// Time each frame is shown.
    #[schemars(title = "Frame Duration (ms)", range(min = 1, max = 10000))]
    pub millis_per_frame: u32,
    /// Restart from the first frame after the last.
    #[schemars(title = "Loop")]
    pub looping: bool,
    /// Height above the terrain when flying a path.
    #[schemars(title = "Path Height", range(min = 0.0, max = 10000.0), extend("step" = 0.5))]
    pub path_height: f64,
}

impl Default for FlyParameters {
    fn default() -> Self {
        Self {
            num_inbetweens: 10,
            millis_per_frame: 100,
            looping: false,
            path_height: 5.0,
        }
    }
}

impl FlyParameters {
    /// Reject parameters that cannot drive playback.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidInbetweens`] or
    /// [`VantageError::InvalidFrameDuration`] for a zero count.
    pub fn validate(&self) -> Result<(), VantageError> {
        if self.num_inbetweens == 0 {
            return Err(VantageError::InvalidInbetweens(self.num_inbetweens));
        }
        if self.millis_per_frame == 0 {
            return Err(VantageError::InvalidFrameDuration(
                self.millis_per_frame,
            ));
        }
        Ok(())
    }

    /// Timer interval between frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.millis_per_frame))
    }
}

/// Fly-through playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not started, stopped, or finished.
    #[default]
    Idle,
    /// Timer running, frames advancing.
    Playing,
    /// Timer stopped, frame index kept.
    Paused,
}

/// Progress report for one shown frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStatus {
    /// Index of the frame just shown.
    pub frame: usize,
    /// Playback time at that frame.
    pub elapsed: Duration,
}

impl PlaybackStatus {
    /// Status for `frame` at `millis_per_frame`.
    #[must_use]
    pub fn at_frame(frame: usize, millis_per_frame: u32) -> Self {
        Self {
            frame,
            elapsed: Duration::from_millis(
                frame as u64 * u64::from(millis_per_frame),
            ),
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.elapsed.as_secs_f64();
        let hours = (total / 3600.0).floor();
        let minutes = ((total - hours * 3600.0) / 60.0).floor();
        let seconds = total - hours * 3600.0 - minutes * 60.0;
        write!(
            f,
            "{:02}:{:02}:{:06.3}    Frame {}",
            hours as u64, minutes as u64, seconds, self.frame
        )
    }
}

/// Per-step fractions for one keyframe segment.
///
/// Step `j` of `n` has linear fraction `j / n`. The directional fraction
/// stays at zero through step `n / 2` and then rises by
/// `1 / (n - n / 2)` per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InbetweenSchedule {
    steps: u32,
}

impl InbetweenSchedule {
    /// Schedule with `steps` inbetweens per segment.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidInbetweens`] when `steps` is zero.
    pub fn new(steps: u32) -> Result<Self, VantageError> {
        if steps == 0 {
            log::warn!("rejecting fly-through with zero inbetweens");
            return Err(VantageError::InvalidInbetweens(steps));
        }
        Ok(Self { steps })
    }

    /// Inbetweens per segment.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// `(linear, directional)` fractions for each step of a segment.
    pub fn fractions(&self) -> impl Iterator<Item = (f64, f64)> {
        let half = self.steps / 2;
        let linear_delta = 1.0 / f64::from(self.steps);
        let directional_delta = 1.0 / f64::from(self.steps - half);
        (0..self.steps).map(move |step| {
            (
                f64::from(step) * linear_delta,
                f64::from(step.saturating_sub(half)) * directional_delta,
            )
        })
    }
}

/// Plan a fly-through over stored viewpoints.
///
/// Yields `(n - 1) * num_inbetweens + 1` viewpoints for `n >= 2`
/// keyframes, ending with the last keyframe itself. One keyframe yields
/// itself; none yields an empty sequence.
///
/// # Errors
///
/// Returns [`VantageError::InvalidInbetweens`] when `num_inbetweens` is
/// zero.
pub fn plan_from_viewpoints(
    viewpoints: &[ViewpointStore],
    num_inbetweens: u32,
) -> Result<Vec<ViewpointStore>, VantageError> {
    plan(viewpoints.iter().cloned(), num_inbetweens)
}

/// Plan a fly-through along a path's waypoints at `height` above the
/// terrain. Keyframes come from the path, otherwise as
/// [`plan_from_viewpoints`].
///
/// # Errors
///
/// Returns [`VantageError::InvalidInbetweens`] when `num_inbetweens` is
/// zero.
pub fn plan_from_path<P: WaypointPath + ?Sized>(
    path: &P,
    camera: &CameraSnapshot,
    bounds: &SceneBounds,
    num_inbetweens: u32,
    height: f64,
) -> Result<Vec<ViewpointStore>, VantageError> {
    let keyframes = (0..path.number_of_points())
        .map(|index| path.waypoint_viewpoint(index, height, camera, bounds));
    plan(keyframes, num_inbetweens)
}

fn plan(
    keyframes: impl IntoIterator<Item = ViewpointStore>,
    num_inbetweens: u32,
) -> Result<Vec<ViewpointStore>, VantageError> {
    let schedule = InbetweenSchedule::new(num_inbetweens)?;
    let mut keyframes = keyframes.into_iter();
    let Some(mut previous) = keyframes.next() else {
        return Ok(Vec::new());
    };

    let mut sequence = Vec::new();
    for next in keyframes {
        sequence.extend(
            schedule
                .fractions()
                .map(|(linear, directional)| {
                    previous.interpolate(&next, linear, directional)
                }),
        );
        previous = next;
    }
    sequence.push(previous);
    Ok(sequence)
}
