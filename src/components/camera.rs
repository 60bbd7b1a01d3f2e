use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{Damper, SimError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance behind the aircraft
    pub distance: f64,
    /// Height above the aircraft before pitching
    pub height: f64,
    pub pitch: f64, // radians
    /// The eye never goes below this world height
    pub min_height: f64,
    pub damping: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 2.5,
            height: 0.25,
            pitch: 0.1,
            min_height: 0.5,
            damping: 8.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.distance >= 0.0) || !(self.damping >= 0.0) {
            return Err(SimError::InvalidConfig(
                "camera distance and damping must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Chase camera that trails the aircraft with a smoothed eye point.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    config: CameraConfig,
    damper: Damper<Vector3<f64>>,
    eye: Vector3<f64>,
    look_at: Vector3<f64>,
}

impl FollowCamera {
    pub fn new(config: CameraConfig, position: &Vector3<f64>, attitude: &UnitQuaternion<f64>) -> Self {
        let start = desired_eye(&config, position, attitude);
        let mut eye = start;
        eye.y = eye.y.max(config.min_height);
        Self {
            damper: Damper::new(config.damping, start),
            eye,
            look_at: *position,
            config,
        }
    }

    /// Move the eye towards its spot behind the aircraft and return it.
    pub fn update(
        &mut self,
        position: &Vector3<f64>,
        attitude: &UnitQuaternion<f64>,
        dt: f64,
    ) -> Vector3<f64> {
        let target = desired_eye(&self.config, position, attitude);
        let mut eye = self.damper.damp(target, dt);
        eye.y = eye.y.max(self.config.min_height);

        self.eye = eye;
        self.look_at = *position;
        eye
    }

    pub fn reset(&mut self) {
        self.damper.reset();
        self.eye = self.damper.value();
        self.eye.y = self.eye.y.max(self.config.min_height);
    }

    pub fn eye(&self) -> Vector3<f64> {
        self.eye
    }

    pub fn look_at(&self) -> Vector3<f64> {
        self.look_at
    }
}

fn desired_eye(
    config: &CameraConfig,
    position: &Vector3<f64>,
    attitude: &UnitQuaternion<f64>,
) -> Vector3<f64> {
    let offset = Vector3::new(
        0.0,
        config.height + config.distance * config.pitch.sin(),
        -config.distance * config.pitch.cos(),
    );
    position + attitude.transform_vector(&offset)
}
