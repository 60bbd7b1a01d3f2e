use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::lift::LiftCurve;
use crate::utils::{deg_to_rad, SimError, MESH_COLLISION_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub initial_position: Vector3<f64>,
    pub initial_velocity: Vector3<f64>,
    /// World-space acceleration applied every tick (gravity plus wind)
    pub external_acceleration: Vector3<f64>,
    /// Friction deceleration per body axis [m/s^2]
    pub body_friction: Vector3<f64>,
    /// Angular rate per unit of lift and unit of stick [rad/s]
    pub control_gain: f64,
    pub engine_acceleration: f64,
    pub max_speed: f64,
    pub wing: LiftCurve,
    pub wing_lift_angle: f64, // radians
    pub wing_inefficiency: f64,
    pub model_scale: f64,
    /// Height of the rotation pivot above the model origin, in model units
    pub center_of_lift: f64,
    /// Horizontal radius of the obstacle search cylinder
    pub collision_distance: f64,
    /// Per-axis velocity factor applied on a mesh collision
    pub bounce: Vector3<f64>,
    /// Mesh entries in the recent history tolerated before a hard reset
    pub mesh_collision_threshold: usize,
    pub rotation_damping: f64,
    pub throttle_damping: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            initial_position: Vector3::zeros(),
            initial_velocity: Vector3::zeros(),
            external_acceleration: Vector3::new(0.0, -3.0, 0.0),
            body_friction: Vector3::new(5.0, 1.0, 1.0),
            control_gain: deg_to_rad(30.0),
            engine_acceleration: 10.0,
            max_speed: 10.0,
            wing: LiftCurve::default(),
            wing_lift_angle: deg_to_rad(30.0),
            wing_inefficiency: 1.1,
            model_scale: 0.1,
            center_of_lift: 0.0,
            collision_distance: 1.0,
            bounce: Vector3::new(-0.5, -0.5, -0.5),
            mesh_collision_threshold: MESH_COLLISION_THRESHOLD,
            rotation_damping: 10.0,
            throttle_damping: 2.0,
        }
    }
}

impl AircraftConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.max_speed > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "aircraft max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        if !(self.model_scale > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "aircraft model_scale must be positive, got {}",
                self.model_scale
            )));
        }
        if !(self.collision_distance >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "collision_distance must not be negative, got {}",
                self.collision_distance
            )));
        }
        if self.bounce.iter().any(|b| !(b.abs() < 1.0)) || self.bounce.iter().all(|b| *b >= 0.0)
        {
            return Err(SimError::InvalidConfig(format!(
                "bounce factors must be below 1 in magnitude with one axis inverted, got {:?}",
                self.bounce
            )));
        }
        if self.rotation_damping < 0.0 || self.throttle_damping < 0.0 {
            return Err(SimError::InvalidConfig(
                "damping rates must not be negative".to_string(),
            ));
        }
        let vectors = [
            self.initial_position,
            self.initial_velocity,
            self.external_acceleration,
            self.body_friction,
        ];
        if vectors.iter().any(|v| v.iter().any(|c| !c.is_finite())) {
            return Err(SimError::InvalidConfig(
                "aircraft vectors must be finite".to_string(),
            ));
        }
        self.wing.validate()
    }
}
