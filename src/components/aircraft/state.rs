use bevy::prelude::*;
use nalgebra::{Matrix4, UnitQuaternion, Vector3};

use crate::components::aircraft::AircraftConfig;
use crate::components::collision::{CollisionHistory, CollisionState};
use crate::resources::ControlInput;
use crate::systems::collisions::{detect_collision, react_to_collision};
use crate::systems::physics::integrate_flight;
use crate::utils::{compose_world_matrix, Damper};

/// Player-controlled aircraft.
///
/// Position, velocity and attitude are world-space and are only ever written
/// by the aircraft itself. The obstacle points it collides against are
/// borrowed for the duration of a tick.
#[derive(Component, Debug, Clone)]
pub struct Aircraft {
    pub(crate) config: AircraftConfig,

    pub(crate) position: Vector3<f64>,
    pub(crate) velocity: Vector3<f64>,
    /// Rotation from body to world frame
    pub(crate) attitude: UnitQuaternion<f64>,

    pub(crate) input: ControlInput,

    pub(crate) collision: CollisionState,
    pub(crate) previous_collision: CollisionState,
    pub(crate) history: CollisionHistory,

    pub(crate) pitch_rate: Damper<f64>,
    pub(crate) yaw_rate: Damper<f64>,
    pub(crate) roll_rate: Damper<f64>,
    pub(crate) throttle: Damper<f64>,

    // last tick, kept for telemetry
    pub(crate) wing_lift: f64,
    pub(crate) body_velocity: Vector3<f64>,

    world_matrix: Matrix4<f64>,
}

impl Aircraft {
    pub fn new(config: AircraftConfig) -> Self {
        let rotation_damping = config.rotation_damping;
        let throttle_damping = config.throttle_damping;
        let mut aircraft = Self {
            position: config.initial_position,
            velocity: config.initial_velocity,
            attitude: UnitQuaternion::identity(),
            input: ControlInput::default(),
            collision: CollisionState::None,
            previous_collision: CollisionState::None,
            history: CollisionHistory::new(),
            pitch_rate: Damper::new(rotation_damping, 0.0),
            yaw_rate: Damper::new(rotation_damping, 0.0),
            roll_rate: Damper::new(rotation_damping, 0.0),
            throttle: Damper::new(throttle_damping, 0.0)
                .with_upper_bound(1.0)
                .with_lower_bound(-1.0),
            wing_lift: 0.0,
            body_velocity: Vector3::zeros(),
            world_matrix: Matrix4::identity(),
            config,
        };
        aircraft.world_matrix = aircraft.compose_world_matrix();
        aircraft
    }

    /// Store the input the next [`Aircraft::compute_world_matrix`] call consumes.
    pub fn update_input(&mut self, input: &ControlInput) {
        self.input = *input;
    }

    /// Advance one tick: integrate motion, collide against `obstacles` and
    /// return the new world transform.
    pub fn compute_world_matrix(&mut self, obstacles: &[Vector3<f64>]) -> Matrix4<f64> {
        let dt = if self.input.dt.is_finite() {
            self.input.dt.max(0.0)
        } else {
            0.0
        };

        integrate_flight(self, dt);

        let state = detect_collision(&self.position, obstacles, self.config.collision_distance);
        react_to_collision(self, state);

        self.world_matrix = self.compose_world_matrix();
        self.world_matrix
    }

    /// Back to the configured start: position, velocity, level attitude and
    /// an empty collision history.
    pub fn reset_state(&mut self) {
        self.position = self.config.initial_position;
        self.velocity = self.config.initial_velocity;
        self.attitude = UnitQuaternion::identity();
        self.collision = CollisionState::None;
        self.previous_collision = CollisionState::None;
        self.history.clear();
        self.pitch_rate.reset();
        self.yaw_rate.reset();
        self.roll_rate.reset();
        self.throttle.reset();
        self.wing_lift = 0.0;
        self.body_velocity = Vector3::zeros();
        self.world_matrix = self.compose_world_matrix();
        info!("Aircraft reset to {:?}", self.position);
    }

    fn compose_world_matrix(&self) -> Matrix4<f64> {
        let scale = self.config.model_scale;
        let pivot = self.config.center_of_lift;
        let raised = self.position + Vector3::new(0.0, pivot * scale, 0.0);

        compose_world_matrix(&raised, &self.attitude, scale)
            * Matrix4::new_translation(&Vector3::new(0.0, -pivot, 0.0))
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn world_matrix(&self) -> Matrix4<f64> {
        self.world_matrix
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    /// Velocity in the body frame after the last tick
    pub fn body_velocity(&self) -> Vector3<f64> {
        self.body_velocity
    }

    pub fn wing_lift(&self) -> f64 {
        self.wing_lift
    }

    pub fn collision_state(&self) -> CollisionState {
        self.collision
    }

    pub fn collision_history(&self) -> &CollisionHistory {
        &self.history
    }

    /// True when the last tick ended inside obstacle geometry.
    pub fn is_collision_detected(&self) -> bool {
        self.collision == CollisionState::Mesh
    }

    /// True only on the first tick of a run of mesh collisions.
    pub fn collision_started(&self) -> bool {
        self.is_collision_detected() && self.previous_collision != CollisionState::Mesh
    }
}
