use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{sanitize_dt, SimError, DEFAULT_TIMESTEP, MAX_TIMESTEP};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed simulation step in seconds
    pub timestep: f64,
    /// Upper clamp for any step handed to the simulation
    pub max_timestep: f64,
    /// Seconds of simulated time between telemetry lines
    pub telemetry_interval: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            max_timestep: MAX_TIMESTEP,
            telemetry_interval: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// The step the simulation actually advances by.
    pub fn dt(&self) -> f64 {
        sanitize_dt(self.timestep, self.max_timestep)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.timestep > 0.0) || !(self.max_timestep > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "timestep and max_timestep must be positive, got {} and {}",
                self.timestep, self.max_timestep
            )));
        }
        if self.timestep > self.max_timestep {
            warn!(
                "timestep {} exceeds max_timestep {}, steps will be clamped",
                self.timestep, self.max_timestep
            );
        }
        Ok(())
    }
}
