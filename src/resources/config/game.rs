use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Rules of a delivery session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub lives: u32,
    pub deliveries_to_win: u32,
    pub target_start: Vector3<f64>,
    /// Each new target moves by whole offsets in `[-range/2, range/2)` per horizontal axis
    pub target_range: i32,
    pub seed: u64,
    /// Ticks a button edge is ignored after firing
    pub bounce_guard_frames: u32,
    pub skip_splash: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            deliveries_to_win: 5,
            target_start: Vector3::new(10.0, 0.0, 10.0),
            target_range: 10,
            seed: 42,
            bounce_guard_frames: 4,
            skip_splash: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.lives == 0 || self.deliveries_to_win == 0 {
            return Err(SimError::InvalidConfig(
                "lives and deliveries_to_win must be at least 1".to_string(),
            ));
        }
        if self.target_range < 2 {
            return Err(SimError::InvalidConfig(format!(
                "target_range must be at least 2, got {}",
                self.target_range
            )));
        }
        if !self.target_start.iter().all(|c| c.is_finite()) {
            return Err(SimError::InvalidConfig(
                "target_start must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
