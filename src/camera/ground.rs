use glam::DVec3;

use crate::camera::core::Ray;
use crate::collaborators::{PickHit, SceneSelector};

/// Scene selector for a flat horizontal ground at a fixed elevation.
///
/// Stands in for terrain picking in headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// Height of the plane.
    pub elevation: f64,
    /// Object id reported for hits.
    pub object: u64,
}

impl GroundPlane {
    /// Plane at `elevation`.
    #[must_use]
    pub fn new(elevation: f64) -> Self {
        Self {
            elevation,
            object: 0,
        }
    }
}

impl SceneSelector for GroundPlane {
    fn pick(&self, ray: &Ray) -> Option<PickHit> {
        if ray.direction.z.abs() < f64::EPSILON {
            return None;
        }
        let t = (self.elevation - ray.origin.z) / ray.direction.z;
        if t <= 0.0 {
            return None;
        }
        Some(PickHit {
            point: ray.at(t),
            normal: DVec3::Z,
            object: self.object,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_ray_hits() {
        let ground = GroundPlane::new(10.0);
        let ray = Ray {
            origin: DVec3::new(5.0, 5.0, 110.0),
            direction: DVec3::NEG_Z,
        };
        let hit = ground.pick(&ray).unwrap();
        assert!((hit.point - DVec3::new(5.0, 5.0, 10.0)).length() < 1e-12);
        assert_eq!(hit.normal, DVec3::Z);
    }

    #[test]
    fn upward_and_level_rays_miss() {
        let ground = GroundPlane::new(0.0);
        let up = Ray {
            origin: DVec3::new(0.0, 0.0, 5.0),
            direction: DVec3::Z,
        };
        let level = Ray {
            origin: DVec3::new(0.0, 0.0, 5.0),
            direction: DVec3::X,
        };
        assert!(ground.pick(&up).is_none());
        assert!(ground.pick(&level).is_none());
    }
}
