use glam::{DMat3, DQuat, DVec2, DVec3};

use crate::camera::core::CameraSnapshot;
use crate::collaborators::{CameraCarrier, SceneBounds};
use crate::viewpoint::ViewpointStore;

/// Pan distance per pixel, as a fraction of the orbit distance.
const PAN_PER_PIXEL: f64 = 0.002;
/// Dolly distance per unit, as a fraction of the orbit distance.
const DOLLY_PER_UNIT: f64 = 0.05;
/// Magnification factor per unit.
const MAGNIFY_STEP: f64 = 1.1;
const MIN_DISTANCE: f64 = 0.01;
const MIN_MAGNIFICATION: f64 = 1.0 / 64.0;
const MAX_MAGNIFICATION: f64 = 64.0;

/// Headless orbit camera carrier over a Z-up terrain.
///
/// The camera orbits a focus point at `distance`, oriented by a
/// quaternion whose local -Z is the view direction. Magnification narrows
/// the field of view without moving the eye.
#[derive(Debug, Clone)]
pub struct OrbitCarrier {
    orientation: DQuat,
    distance: f64,
    focus_point: DVec3,
    magnification: f64,
    base_fovy: f64,
    bounds: SceneBounds,

    camera: CameraSnapshot,
}

impl OrbitCarrier {
    /// Carrier looking north and down at the center of `bounds`.
    #[must_use]
    pub fn new(bounds: SceneBounds, width: u32, height: u32) -> Self {
        let focus_point = bounds.center();
        let distance = (bounds.radius() * 2.0).max(100.0);
        let orientation = orientation_looking(DVec3::new(0.0, 1.0, -1.0));
        let camera = CameraSnapshot {
            zfar: (distance * 20.0).max(1000.0),
            ..CameraSnapshot::default()
        };

        let mut carrier = Self {
            orientation,
            distance,
            focus_point,
            magnification: 1.0,
            base_fovy: camera.fovy,
            bounds,
            camera,
        };
        carrier.resize(width, height);
        carrier
    }

    /// Current orbit pivot.
    #[must_use]
    pub fn focus_point(&self) -> DVec3 {
        self.focus_point
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Current zoom factor.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * DVec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * DVec3::Y;
        self.camera.fovy = self.base_fovy / self.magnification;
    }

    fn forward(&self) -> DVec3 {
        -(self.orientation * DVec3::Z)
    }
}

impl CameraCarrier for OrbitCarrier {
    fn drag(&mut self, dx: f64, dy: f64) {
        // Horizontal components only: dragging never changes altitude.
        let right = (self.orientation * DVec3::X)
            .with_z(0.0)
            .normalize_or_zero();
        let ahead = self.forward().with_z(0.0).try_normalize().unwrap_or_else(
            || (self.orientation * DVec3::Y).with_z(0.0).normalize_or_zero(),
        );
        let scale = self.distance * PAN_PER_PIXEL;

        self.focus_point += (-right * dx + ahead * dy) * scale;
        self.update_camera_pos();
    }

    fn translate_in_screen_plane(&mut self, dx: f64, dy: f64) {
        let right = self.orientation * DVec3::X;
        let up = self.orientation * DVec3::Y;
        let scale = self.distance * PAN_PER_PIXEL;

        self.focus_point += (right * dx - up * dy) * scale;
        self.update_camera_pos();
    }

    fn rotate(&mut self, d_pitch: f64, d_yaw: f64) {
        // Yaw about the world up axis
        let yaw = DQuat::from_rotation_z(d_yaw.to_radians());
        self.orientation = yaw * self.orientation;

        // Pitch about the camera's right vector (after yaw)
        let right = self.orientation * DVec3::X;
        let pitch = DQuat::from_axis_angle(right, d_pitch.to_radians());
        self.orientation = (pitch * self.orientation).normalize();

        self.update_camera_pos();
    }

    fn dolly(&mut self, amount: f64) {
        self.distance *= 1.0 - amount * DOLLY_PER_UNIT;
        self.distance = self.distance.max(MIN_DISTANCE);
        self.update_camera_pos();
    }

    fn magnify(&mut self, amount: f64) {
        self.magnification = (self.magnification * MAGNIFY_STEP.powf(amount))
            .clamp(MIN_MAGNIFICATION, MAX_MAGNIFICATION);
        self.update_camera_pos();
    }

    fn set_look_at(&mut self, point: DVec3) {
        let eye = self.camera.eye;
        let offset = point - eye;
        let Some(direction) = offset.try_normalize() else {
            return;
        };
        self.orientation = orientation_looking(direction);
        self.distance = offset.length().max(MIN_DISTANCE);
        self.focus_point = eye + direction * self.distance;
        self.update_camera_pos();
    }

    fn resize(&mut self, width: u32, height: u32) {
        let size = DVec2::new(f64::from(width), f64::from(height)).max(DVec2::ONE);
        self.camera.viewport = size;
        self.camera.aspect = size.x / size.y;
        self.update_camera_pos();
    }

    fn camera(&self) -> CameraSnapshot {
        self.camera
    }

    fn scene_bounds(&self) -> SceneBounds {
        self.bounds
    }

    fn capture_viewpoint(&self, name: &str) -> ViewpointStore {
        ViewpointStore::from_pose(
            name,
            self.camera.eye,
            self.forward(),
            self.distance,
            self.magnification,
        )
    }

    /// Jumps straight to the pose; the pivot always comes from the
    /// viewpoint's own look-at point.
    fn apply_viewpoint(
        &mut self,
        viewpoint: &ViewpointStore,
        _recenter: bool,
        _animate: bool,
    ) {
        self.orientation = orientation_looking(viewpoint.direction());
        self.distance = viewpoint.distance().max(MIN_DISTANCE);
        self.focus_point = viewpoint.look_at();
        self.magnification = viewpoint
            .magnification()
            .clamp(MIN_MAGNIFICATION, MAX_MAGNIFICATION);
        self.update_camera_pos();
    }
}

/// Orientation whose local -Z is `direction`, keeping the local X axis
/// horizontal. Looking straight up or down keeps east as screen-right.
fn orientation_looking(direction: DVec3) -> DQuat {
    let forward = direction.normalize();
    let right = forward.cross(DVec3::Z).try_normalize().unwrap_or(DVec3::X);
    let up = right.cross(forward);
    DQuat::from_mat3(&DMat3::from_cols(right, up, -forward)).normalize()
}
