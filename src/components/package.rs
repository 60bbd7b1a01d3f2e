use bevy::prelude::*;
use nalgebra::{Matrix4, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::ControlInput;
use crate::systems::physics::integrate_drop;
use crate::utils::{compose_world_matrix, SimError};

/// Sent on the tick a dropped package reaches the ground.
#[derive(Event, Debug, Clone, Copy)]
pub struct PackageLandedEvent {
    pub position: Vector3<f64>,
    pub target: Vector3<f64>,
    pub target_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    pub max_speed: f64,
    pub scale: f64,
    /// Landing within this distance of the target counts as a hit
    pub target_precision: f64,
    /// Friction deceleration per axis, stronger horizontally to ease aiming
    pub friction: Vector3<f64>,
    pub external_acceleration: Vector3<f64>,
    /// Where the package is parked while it is carried
    pub held_position: Vector3<f64>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            max_speed: 15.0,
            scale: 0.1,
            target_precision: 10.0,
            friction: Vector3::new(5.0, 1.0, 5.0),
            external_acceleration: Vector3::new(0.0, -3.0, 0.0),
            held_position: Vector3::new(0.0, -2.0, 0.0),
        }
    }
}

impl PackageConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.max_speed > 0.0) || !(self.scale > 0.0) || !(self.target_precision > 0.0) {
            return Err(SimError::InvalidConfig(
                "package max_speed, scale and target_precision must be positive".to_string(),
            ));
        }
        if self.friction.iter().any(|f| !(*f >= 0.0)) {
            return Err(SimError::InvalidConfig(format!(
                "package friction must not be negative, got {:?}",
                self.friction
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageState {
    #[default]
    Held,
    Falling,
    /// Resolved within the tick that touches the ground
    Landed,
}

/// Snapshot of the world a package needs for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseConditions {
    pub plane_position: Vector3<f64>,
    pub plane_velocity: Vector3<f64>,
    pub target: Vector3<f64>,
}

/// Delivery package carried by the aircraft and dropped on `handle_fire`.
#[derive(Component, Debug, Clone)]
pub struct Package {
    pub(crate) config: PackageConfig,
    pub(crate) position: Vector3<f64>,
    pub(crate) velocity: Vector3<f64>,
    state: PackageState,
    target_hit: bool,
    landing: Option<Vector3<f64>>,
    input: ControlInput,
    world_matrix: Matrix4<f64>,
}

impl Package {
    pub fn new(config: PackageConfig) -> Self {
        let position = config.held_position;
        let world_matrix = compose_world_matrix(&position, &UnitQuaternion::identity(), config.scale);
        Self {
            config,
            position,
            velocity: Vector3::zeros(),
            state: PackageState::Held,
            target_hit: false,
            landing: None,
            input: ControlInput::default(),
            world_matrix,
        }
    }

    pub fn update_input(&mut self, input: &ControlInput) {
        self.input = *input;
    }

    /// Advance the drop state machine by one tick and return the world transform.
    pub fn compute_world_matrix(&mut self, release: &ReleaseConditions) -> Matrix4<f64> {
        let dt = if self.input.dt.is_finite() {
            self.input.dt.max(0.0)
        } else {
            0.0
        };
        self.landing = None;

        if self.state == PackageState::Held {
            self.target_hit = false;
            if self.input.handle_fire {
                self.position = release.plane_position;
                self.velocity = release.plane_velocity;
                self.state = PackageState::Falling;
                info!("Package released at {:?}", self.position);
            } else {
                self.position = self.config.held_position;
                self.velocity = Vector3::zeros();
                return self.finish();
            }
        }

        if self.state == PackageState::Falling {
            integrate_drop(self, dt);

            if self.position.y < 0.0 {
                self.position.y = 0.0;
                self.velocity.y = 0.0;
                self.state = PackageState::Landed;
            } else {
                return self.finish();
            }
        }

        let miss_distance = (self.position - release.target).norm();
        self.target_hit = miss_distance <= self.config.target_precision;
        self.landing = Some(self.position);
        self.state = PackageState::Held;

        if self.target_hit {
            info!(
                "Target hit: package landed at {:?}, {:.2} from target {:?}",
                self.position, miss_distance, release.target
            );
        } else {
            info!(
                "Target missed: package landed at {:?}, {:.2} from target {:?}",
                self.position, miss_distance, release.target
            );
        }

        self.finish()
    }

    fn finish(&mut self) -> Matrix4<f64> {
        self.world_matrix =
            compose_world_matrix(&self.position, &UnitQuaternion::identity(), self.config.scale);
        self.world_matrix
    }

    /// Back to carried, discarding any drop in progress.
    pub fn reset(&mut self) {
        self.state = PackageState::Held;
        self.target_hit = false;
        self.landing = None;
        self.position = self.config.held_position;
        self.velocity = Vector3::zeros();
        self.finish();
    }

    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    pub fn state(&self) -> PackageState {
        self.state
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn world_matrix(&self) -> Matrix4<f64> {
        self.world_matrix
    }

    pub fn is_target_hit(&self) -> bool {
        self.target_hit
    }

    /// Landing point, only on the tick the package touched down.
    pub fn landed_at(&self) -> Option<Vector3<f64>> {
        self.landing
    }
}
