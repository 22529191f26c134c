//! Interpolation helpers shared by viewpoint blending and fly-through
//! planning.
//!
//! Every helper returns its inputs bit-for-bit at `t = 0.0` and `t = 1.0`,
//! so keyframes reached through interpolation never drift. Values of `t`
//! outside `[0, 1]` extrapolate.

use glam::{DQuat, DVec3};

/// Lerp two scalars.
#[inline]
#[must_use]
pub fn lerp_f64(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Lerp two positions.
#[inline]
#[must_use]
pub fn lerp_position(start: DVec3, end: DVec3, t: f64) -> DVec3 {
    start * (1.0 - t) + end * t
}

/// Geometric blend of two strictly positive scale factors.
///
/// Halfway between 1x and 4x magnification is 2x, not 2.5x.
#[inline]
#[must_use]
pub fn lerp_scale(start: f64, end: f64, t: f64) -> f64 {
    start.powf(1.0 - t) * end.powf(t)
}

/// Rotate `start` toward `end` along the great arc between them.
///
/// Both inputs must be unit length. Antiparallel inputs rotate about an
/// arbitrary perpendicular axis.
#[must_use]
pub fn slerp_direction(start: DVec3, end: DVec3, t: f64) -> DVec3 {
    if t == 0.0 {
        return start;
    }
    if t == 1.0 {
        return end;
    }
    let arc = DQuat::from_rotation_arc(start, end);
    (DQuat::IDENTITY.slerp(arc, t) * start).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_f64_endpoints_exact() {
        assert_eq!(lerp_f64(0.1, 0.3, 0.0), 0.1);
        assert_eq!(lerp_f64(0.1, 0.3, 1.0), 0.3);
        assert!((lerp_f64(0.0, 100.0, 0.25) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_position() {
        let start = DVec3::ZERO;
        let end = DVec3::new(10.0, 20.0, 30.0);
        let result = lerp_position(start, end, 0.5);
        assert!((result - DVec3::new(5.0, 10.0, 15.0)).length() < 1e-9);
        assert_eq!(lerp_position(start, end, 1.0), end);
    }

    #[test]
    fn test_lerp_position_extrapolates() {
        let result = lerp_position(DVec3::ZERO, DVec3::X, 2.0);
        assert!((result - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_lerp_scale_is_geometric() {
        assert!((lerp_scale(1.0, 4.0, 0.5) - 2.0).abs() < 1e-12);
        assert_eq!(lerp_scale(1.5, 7.0, 0.0), 1.5);
        assert_eq!(lerp_scale(1.5, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_slerp_direction_midpoint() {
        let mid = slerp_direction(DVec3::X, DVec3::Y, 0.5);
        let expected = DVec3::new(1.0, 1.0, 0.0).normalize();
        assert!((mid - expected).length() < 1e-9);
        assert!((mid.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_slerp_direction_endpoints_exact() {
        let a = DVec3::new(0.3, -0.4, 0.866_025).normalize();
        let b = DVec3::new(-0.2, 0.9, 0.1).normalize();
        assert_eq!(slerp_direction(a, b, 0.0), a);
        assert_eq!(slerp_direction(a, b, 1.0), b);
    }
}
