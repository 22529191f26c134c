//! A saved camera pose and its interpolation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;
use crate::util::interpolation::{
    lerp_f64, lerp_position, lerp_scale, slerp_direction,
};

/// Smallest distance or magnification an extrapolated blend may produce.
const MIN_EXTENT: f64 = 1e-9;

/// Snapshot of a camera viewpoint.
///
/// World axes follow the terrain convention: +X east, +Y north, +Z up.
/// A store is read-only once created; [`interpolate`](Self::interpolate)
/// produces a new store and never touches either input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewpointStore {
    name: String,
    /// Camera position in world space.
    location: DVec3,
    /// Unit look direction.
    direction: DVec3,
    /// Distance from the camera to its look-at pivot.
    distance: f64,
    /// Scale-based zoom factor (1.0 = the carrier's base field of view).
    magnification: f64,
}

impl ViewpointStore {
    /// Viewpoint from an explicit pose. `direction` is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidViewpoint`] when `distance` or
    /// `magnification` is not strictly positive or `direction` has no
    /// usable length.
    pub fn new(
        name: impl Into<String>,
        location: DVec3,
        direction: DVec3,
        distance: f64,
        magnification: f64,
    ) -> Result<Self, VantageError> {
        let store = Self {
            name: name.into(),
            location,
            direction: direction.normalize_or_zero(),
            distance,
            magnification,
        };
        store.validate()?;
        Ok(store)
    }

    /// Viewpoint from a live camera pose, coerced into range instead of
    /// rejected: a degenerate direction looks straight down and extents
    /// are floored at a tiny positive value.
    #[must_use]
    pub fn from_pose(
        name: impl Into<String>,
        location: DVec3,
        direction: DVec3,
        distance: f64,
        magnification: f64,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            direction: direction.try_normalize().unwrap_or(DVec3::NEG_Z),
            distance: finite_extent(distance),
            magnification: finite_extent(magnification),
        }
    }

    /// Viewpoint looking from `location` at `look_at`.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidViewpoint`] when the two points
    /// coincide or `magnification` is not strictly positive.
    pub fn looking_at(
        name: impl Into<String>,
        location: DVec3,
        look_at: DVec3,
        magnification: f64,
    ) -> Result<Self, VantageError> {
        let offset = look_at - location;
        Self::new(name, location, offset, offset.length(), magnification)
    }

    /// Check the invariants a deserialized store may have skipped.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidViewpoint`] naming the bad field.
    pub fn validate(&self) -> Result<(), VantageError> {
        if self.distance <= 0.0 || !self.distance.is_finite() {
            return Err(VantageError::InvalidViewpoint(format!(
                "'{}' has distance {}",
                self.name, self.distance
            )));
        }
        if self.magnification <= 0.0 || !self.magnification.is_finite() {
            return Err(VantageError::InvalidViewpoint(format!(
                "'{}' has magnification {}",
                self.name, self.magnification
            )));
        }
        if !self.direction.is_normalized() {
            return Err(VantageError::InvalidViewpoint(format!(
                "'{}' has no usable look direction",
                self.name
            )));
        }
        Ok(())
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Camera position.
    #[must_use]
    pub fn location(&self) -> DVec3 {
        self.location
    }

    /// Unit look direction.
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Distance to the look-at pivot.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Zoom factor.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    /// The pivot point the camera looks at.
    #[must_use]
    pub fn look_at(&self) -> DVec3 {
        self.location + self.direction * self.distance
    }

    /// Compass heading of the look direction in radians, clockwise from
    /// north.
    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.direction.x.atan2(self.direction.y)
    }

    /// Angle of the look direction above the horizon in radians.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.direction.z.clamp(-1.0, 1.0).asin()
    }

    /// Same pose under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Blend toward `target`.
    ///
    /// `linear_fraction` drives location and distance (linearly) and
    /// magnification (geometrically). `directional_fraction` drives the
    /// look direction along the great arc. The fly planner advances the
    /// two fractions on separate schedules so the camera starts moving
    /// before it turns. Blends keep this viewpoint's name; with both
    /// fractions at 1 the result is `target` itself.
    #[must_use]
    pub fn interpolate(
        &self,
        target: &Self,
        linear_fraction: f64,
        directional_fraction: f64,
    ) -> Self {
        if linear_fraction == 1.0 && directional_fraction == 1.0 {
            return target.clone();
        }
        Self {
            name: self.name.clone(),
            location: lerp_position(
                self.location,
                target.location,
                linear_fraction,
            ),
            direction: slerp_direction(
                self.direction,
                target.direction,
                directional_fraction,
            ),
            distance: lerp_f64(self.distance, target.distance, linear_fraction)
                .max(MIN_EXTENT),
            magnification: lerp_scale(
                self.magnification,
                target.magnification,
                linear_fraction,
            )
            .max(MIN_EXTENT),
        }
    }
}

fn finite_extent(value: f64) -> f64 {
    if value.is_finite() {
        value.max(MIN_EXTENT)
    } else {
        MIN_EXTENT
    }
}
