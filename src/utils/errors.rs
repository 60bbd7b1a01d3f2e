use std::io;
use thiserror::Error;

/// Failures of the configuration and level loading surfaces. A simulation
/// tick itself never fails.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("config file error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("malformed config: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("invalid obstacle geometry: {0}")]
    InvalidObstacle(String),
}

pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_surface() {
        let err = SimError::InvalidObstacle("point 3 is not finite".to_string());
        assert_eq!(err.to_string(), "invalid obstacle geometry: point 3 is not finite");

        let err: SimError = io::Error::new(io::ErrorKind::NotFound, "missing.yaml").into();
        assert!(err.to_string().starts_with("config file error"));
    }
}
