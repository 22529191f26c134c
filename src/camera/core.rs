use glam::{DMat4, DVec2, DVec3};

/// Copy of a perspective camera's state, defined by eye position, target
/// and projection parameters.
///
/// Carriers hand these out so planners and pickers can reason about the
/// view without holding on to the live camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    /// Eye (camera) position in world space.
    pub eye: DVec3,
    /// Look-at target position.
    pub target: DVec3,
    /// Up direction vector.
    pub up: DVec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f64,
    /// Vertical field of view in degrees.
    pub fovy: f64,
    /// Near clipping plane distance.
    pub znear: f64,
    /// Far clipping plane distance.
    pub zfar: f64,
    /// Viewport size in pixels.
    pub viewport: DVec2,
}

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: DVec3,
    /// Unit direction.
    pub direction: DVec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

impl Default for CameraSnapshot {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, -100.0, 100.0),
            target: DVec3::ZERO,
            up: DVec3::Z,
            aspect: 1.6,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100_000.0,
            viewport: DVec2::new(1280.0, 800.0),
        }
    }
}

impl CameraSnapshot {
    /// Unit vector from eye toward target.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> DMat4 {
        let proj = DMat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * self.build_view()
    }

    /// Ray from the eye through a pixel. `(0, 0)` is the top-left corner.
    #[must_use]
    pub fn pick_ray(&self, screen: DVec2) -> Ray {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        let size = self.viewport.max(DVec2::ONE);
        let ndc = DVec2::new(
            2.0 * screen.x / size.x - 1.0,
            1.0 - 2.0 * screen.y / size.y,
        );
        let half_height = (self.fovy.to_radians() * 0.5).tan();
        let direction = (forward
            + right * (ndc.x * half_height * self.aspect)
            + up * (ndc.y * half_height))
            .normalize();
        Ray {
            origin: self.eye,
            direction,
        }
    }
}
