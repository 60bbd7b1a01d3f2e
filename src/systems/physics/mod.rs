mod drop;
mod flight;

pub use drop::{integrate_drop, package_drop_system};
pub use flight::{aircraft_flight_system, integrate_flight};

use nalgebra::Vector3;

use crate::utils::normalize_or_zero;

/// Decelerate `velocity` by `friction` (per axis) along its own direction.
///
/// A component never changes sign: friction can bring it to rest but not
/// push it backwards. A velocity without direction is returned unchanged.
pub fn apply_friction(velocity: Vector3<f64>, friction: &Vector3<f64>, dt: f64) -> Vector3<f64> {
    let direction = normalize_or_zero(&velocity);
    let deceleration = friction.component_mul(&direction) * dt;

    velocity.zip_map(&deceleration, |v, d| {
        if d.abs() >= v.abs() {
            0.0
        } else {
            v - d
        }
    })
}
