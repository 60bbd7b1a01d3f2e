use nalgebra::{Matrix4, Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::constants::NEAR_ZERO;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Clamp a caller supplied timestep to `[0, max_dt]`. NaN maps to zero.
#[inline]
pub fn sanitize_dt(dt: f64, max_dt: f64) -> f64 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, max_dt)
    }
}

/// Unit vector along `v`, or zero when `v` has no usable direction.
#[inline]
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > NEAR_ZERO && norm.is_finite() {
        v / norm
    } else {
        Vector3::zeros()
    }
}

/// Scale `v` down to `max_norm` if it is longer, keeping its direction.
#[inline]
pub fn clamp_norm(v: Vector3<f64>, max_norm: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm > max_norm {
        v * (max_norm / norm)
    } else {
        v
    }
}

/// Distance between two points projected on the horizontal (x, z) plane.
#[inline]
pub fn horizontal_distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.z - b.z).powi(2)).sqrt()
}

/// Rotate a world-space vector into the body frame of `attitude`.
#[inline]
pub fn world_to_body(attitude: &UnitQuaternion<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    attitude.inverse_transform_vector(v)
}

/// Rotate a body-frame vector into world space.
#[inline]
pub fn body_to_world(attitude: &UnitQuaternion<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    attitude.transform_vector(v)
}

/// Rotation of `angle` radians about a body axis.
#[inline]
pub fn axis_rotation(axis: Vector3<f64>, angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), angle)
}

/// Heading of the horizontal projection of `forward`, measured from +Z towards +X.
///
/// Returns `None` when the vector is (nearly) vertical.
pub fn heading_of(forward: &Vector3<f64>) -> Option<f64> {
    let horizontal = forward.x.hypot(forward.z);
    if horizontal > NEAR_ZERO {
        Some(forward.x.atan2(forward.z))
    } else {
        None
    }
}

/// `translate(position) * rotation * scale(scale)`
pub fn compose_world_matrix(
    position: &Vector3<f64>,
    rotation: &UnitQuaternion<f64>,
    scale: f64,
) -> Matrix4<f64> {
    Matrix4::new_translation(position) * rotation.to_homogeneous() * Matrix4::new_scaling(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(f64::NAN, 0.1), 0.0);
        assert_eq!(sanitize_dt(-1.0, 0.1), 0.0);
        assert_eq!(sanitize_dt(5.0, 0.1), 0.1);
        assert_eq!(sanitize_dt(0.05, 0.1), 0.05);
    }

    #[test]
    fn test_normalize_or_zero_guards_degenerate_vectors() {
        assert_eq!(normalize_or_zero(&Vector3::zeros()), Vector3::zeros());
        assert_eq!(
            normalize_or_zero(&Vector3::new(1e-12, 0.0, 0.0)),
            Vector3::zeros()
        );
        assert_relative_eq!(
            normalize_or_zero(&Vector3::new(0.0, 3.0, 4.0)),
            Vector3::new(0.0, 0.6, 0.8)
        );
    }

    #[test]
    fn test_clamp_norm_preserves_direction() {
        let clamped = clamp_norm(Vector3::new(30.0, 0.0, 40.0), 10.0);
        assert_relative_eq!(clamped.norm(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(clamped, Vector3::new(6.0, 0.0, 8.0), epsilon = 1e-12);
        assert_eq!(clamp_norm(Vector3::x(), 10.0), Vector3::x());
    }

    #[test]
    fn test_body_world_round_trip_under_yaw() {
        let attitude = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI / 2.0);
        let forward_world = body_to_world(&attitude, &Vector3::z());
        assert_relative_eq!(forward_world, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(
            world_to_body(&attitude, &forward_world),
            Vector3::z(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_heading_of() {
        assert_relative_eq!(heading_of(&Vector3::z()).unwrap(), 0.0);
        assert_relative_eq!(heading_of(&Vector3::x()).unwrap(), PI / 2.0);
        assert_relative_eq!(heading_of(&-Vector3::z()).unwrap().abs(), PI);
        assert!(heading_of(&Vector3::y()).is_none());
    }

    #[test]
    fn test_world_matrix_composition() {
        let position = Vector3::new(1.0, 2.0, 3.0);
        let m = compose_world_matrix(&position, &UnitQuaternion::identity(), 0.5);
        let p = m.transform_point(&nalgebra::Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(p.coords, Vector3::new(2.0, 2.0, 3.0));
    }
}
