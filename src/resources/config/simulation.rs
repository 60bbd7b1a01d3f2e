use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{game::GameConfig, physics::PhysicsConfig};
use crate::components::{AircraftConfig, CameraConfig, PackageConfig};
use crate::utils::{SimError, SimResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub aircraft: AircraftConfig,
    pub package: PackageConfig,
    pub camera: CameraConfig,
    pub game: GameConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> SimResult<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> SimResult<()> {
        self.physics.validate()?;
        self.aircraft.validate()?;
        self.package.validate()?;
        self.camera.validate()?;
        self.game.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LiftCurve;
    use nalgebra::Vector3;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.physics.timestep, 1.0 / 60.0);
        assert_eq!(config.aircraft.max_speed, 10.0);
        assert_eq!(config.package.target_precision, 10.0);
        assert_eq!(config.game.lives, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() -> SimResult<()> {
        let mut config = SimulationConfig::default();
        config.aircraft.wing = LiftCurve::logarithmic(12.0, 6.0, 2.0);
        config.game.seed = 7;

        let temp_file = NamedTempFile::new()?;
        config.save(temp_file.path())?;
        assert!(fs::metadata(temp_file.path()).is_ok());

        let loaded = SimulationConfig::load(temp_file.path())?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() -> SimResult<()> {
        let yaml = r#"
aircraft:
  max_speed: 15.0
  external_acceleration: [0.0, -9.81, 0.0]
game:
  lives: 5
"#;
        let config = SimulationConfig::from_yaml_str(yaml)?;
        assert_eq!(config.aircraft.max_speed, 15.0);
        assert_eq!(config.aircraft.external_acceleration, Vector3::new(0.0, -9.81, 0.0));
        assert_eq!(config.aircraft.bounce, Vector3::new(-0.5, -0.5, -0.5));
        assert_eq!(config.game.lives, 5);
        assert_eq!(config.package, PackageConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_bounce_rejected() {
        let yaml = "aircraft:\n  bounce: [0.5, 0.5, 0.5]\n";
        let err = SimulationConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_yaml_is_serialization_error() {
        let err = SimulationConfig::from_yaml_str("physics: [1, 2").unwrap_err();
        assert!(matches!(err, SimError::SerializationError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationConfig::load("/nonexistent/drone-delivery.yaml").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
