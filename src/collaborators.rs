//! Capabilities the controller consumes but does not implement.
//!
//! A host application wires its own camera node, scene picker, path tool,
//! timer and status display into a
//! [`ViewpointController`](crate::controller::ViewpointController) through
//! these traits. Headless reference implementations live in
//! [`camera`](crate::camera) and [`util`](crate::util).

use glam::{DVec2, DVec3};
use web_time::{Duration, Instant};

pub use crate::camera::core::{CameraSnapshot, Ray};
use crate::fly::PlaybackStatus;
use crate::viewpoint::ViewpointStore;

/// Axis-aligned bounds of the loaded scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl SceneBounds {
    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the bounding sphere around the box.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.max - self.min).length() * 0.5
    }
}

/// A successful scene pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// World-space hit point.
    pub point: DVec3,
    /// Surface normal at the hit point.
    pub normal: DVec3,
    /// Host-defined identifier of the object hit.
    pub object: u64,
}

/// The node that carries the camera through the scene.
///
/// Input scale factors are applied by the controller; a carrier receives
/// already-scaled amounts.
pub trait CameraCarrier {
    /// Slide the terrain along its plane by a pointer delta.
    fn drag(&mut self, dx: f64, dy: f64);
    /// Move the camera parallel to the screen.
    fn translate_in_screen_plane(&mut self, dx: f64, dy: f64);
    /// Orbit about the look-at pivot.
    fn rotate(&mut self, d_pitch: f64, d_yaw: f64);
    /// Move along the view axis.
    fn dolly(&mut self, amount: f64);
    /// Change the field of view without moving.
    fn magnify(&mut self, amount: f64);
    /// Make `point` the new pivot without moving the camera.
    fn set_look_at(&mut self, point: DVec3);
    /// The viewport changed size.
    fn resize(&mut self, width: u32, height: u32);
    /// Copy of the current camera.
    fn camera(&self) -> CameraSnapshot;
    /// Bounds of the scene being viewed.
    fn scene_bounds(&self) -> SceneBounds;
    /// Capture the current pose as a named viewpoint.
    fn capture_viewpoint(&self, name: &str) -> ViewpointStore;
    /// Move the camera to `viewpoint`. `recenter` re-derives the pivot from
    /// the new pose; `animate` lets the carrier tween instead of jumping.
    fn apply_viewpoint(
        &mut self,
        viewpoint: &ViewpointStore,
        recenter: bool,
        animate: bool,
    );

    /// Ray from the eye through a viewport pixel.
    fn pick_ray(&self, screen: DVec2) -> Ray {
        self.camera().pick_ray(screen)
    }
}

/// Ray picking against scene geometry.
pub trait SceneSelector {
    /// Nearest hit along `ray`, if any.
    fn pick(&self, ray: &Ray) -> Option<PickHit>;
}

/// A path tool whose waypoints can be flown.
pub trait WaypointPath {
    /// Viewpoint for waypoint `index` at `height` above the terrain.
    fn waypoint_viewpoint(
        &self,
        index: usize,
        height: f64,
        camera: &CameraSnapshot,
        bounds: &SceneBounds,
    ) -> ViewpointStore;

    /// Number of waypoints.
    fn number_of_points(&self) -> usize;
}

/// A repeating timer the host's event loop polls.
///
/// Single-threaded: after [`cancel`](Self::cancel) returns, `poll` must not
/// report another tick until the timer is started again.
pub trait PlaybackTimer {
    /// Start (or restart) ticking every `interval`.
    fn start(&mut self, interval: Duration);
    /// Stop ticking.
    fn cancel(&mut self);
    /// Whether the timer is ticking.
    fn is_running(&self) -> bool;
    /// Whether a tick is due at `now`. Consumes the tick.
    fn poll(&mut self, now: Instant) -> bool;
}

/// Receives fly-through progress.
pub trait StatusSink {
    /// A frame was shown.
    fn playback_progress(&mut self, status: &PlaybackStatus);
    /// A non-looping fly-through reached its end; replay is possible.
    fn playback_finished(&mut self);
}
