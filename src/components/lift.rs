use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Maps the airspeed component orthogonal to a wing onto the lift it produces.
///
/// Every curve saturates at `-max_lift` below `-max_speed` and passes the
/// reverse airflow in `[-max_speed, 0)` through unchanged.
pub trait Lift {
    fn compute_lift(&self, orthogonal_speed: f64) -> f64;
}

/// Parabola through the origin with its vertex at `(max_speed, max_lift)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParabolicWing {
    pub max_speed: f64,
    pub max_lift: f64,
}

impl Lift for ParabolicWing {
    fn compute_lift(&self, orthogonal_speed: f64) -> f64 {
        if let Some(lift) = reverse_flow_lift(orthogonal_speed, self.max_speed, self.max_lift) {
            return lift;
        }
        if orthogonal_speed < self.max_speed {
            let a = -self.max_lift / (self.max_speed * self.max_speed);
            let b = 2.0 * self.max_lift / self.max_speed;
            return (a * orthogonal_speed + b) * orthogonal_speed;
        }
        self.max_lift
    }
}

/// Exponential approach to `max_lift`; `base` sets how quickly lift builds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogarithmicWing {
    pub max_speed: f64,
    pub max_lift: f64,
    pub base: f64,
}

impl Lift for LogarithmicWing {
    fn compute_lift(&self, orthogonal_speed: f64) -> f64 {
        if let Some(lift) = reverse_flow_lift(orthogonal_speed, self.max_speed, self.max_lift) {
            return lift;
        }
        // bounded by max_lift without an explicit cap
        let exponent = -orthogonal_speed + self.max_lift.ln() / self.base.ln();
        self.max_lift - self.base.powf(exponent)
    }
}

fn reverse_flow_lift(orthogonal_speed: f64, max_speed: f64, max_lift: f64) -> Option<f64> {
    if orthogonal_speed < -max_speed {
        Some(-max_lift)
    } else if orthogonal_speed < 0.0 {
        Some(orthogonal_speed)
    } else {
        None
    }
}

/// Lift curve selected in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiftCurve {
    Parabolic(ParabolicWing),
    Logarithmic(LogarithmicWing),
}

impl Default for LiftCurve {
    fn default() -> Self {
        LiftCurve::Parabolic(ParabolicWing {
            max_speed: 10.0,
            max_lift: 5.5,
        })
    }
}

impl LiftCurve {
    pub fn parabolic(max_speed: f64, max_lift: f64) -> Self {
        LiftCurve::Parabolic(ParabolicWing {
            max_speed,
            max_lift,
        })
    }

    pub fn logarithmic(max_speed: f64, max_lift: f64, base: f64) -> Self {
        LiftCurve::Logarithmic(LogarithmicWing {
            max_speed,
            max_lift,
            base,
        })
    }

    pub fn max_lift(&self) -> f64 {
        match self {
            LiftCurve::Parabolic(wing) => wing.max_lift,
            LiftCurve::Logarithmic(wing) => wing.max_lift,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let (max_speed, max_lift) = match self {
            LiftCurve::Parabolic(wing) => (wing.max_speed, wing.max_lift),
            LiftCurve::Logarithmic(wing) => {
                if !(wing.base > 1.0) {
                    return Err(SimError::InvalidConfig(format!(
                        "logarithmic wing base must be greater than 1, got {}",
                        wing.base
                    )));
                }
                (wing.max_speed, wing.max_lift)
            }
        };

        if !(max_speed > 0.0) || !(max_lift > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "lift curve needs positive max_speed and max_lift, got {max_speed} and {max_lift}"
            )));
        }
        Ok(())
    }
}

impl Lift for LiftCurve {
    fn compute_lift(&self, orthogonal_speed: f64) -> f64 {
        match self {
            LiftCurve::Parabolic(wing) => wing.compute_lift(orthogonal_speed),
            LiftCurve::Logarithmic(wing) => wing.compute_lift(orthogonal_speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curves() -> [LiftCurve; 2] {
        [
            LiftCurve::parabolic(10.0, 5.5),
            LiftCurve::logarithmic(10.0, 5.5, 1.5),
        ]
    }

    #[test]
    fn test_zero_airspeed_produces_no_lift() {
        for curve in curves() {
            assert_relative_eq!(curve.compute_lift(0.0), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reverse_flow() {
        for curve in curves() {
            assert_eq!(curve.compute_lift(-10.0 - 1e-6), -5.5);
            assert_eq!(curve.compute_lift(-100.0), -5.5);
            assert_eq!(curve.compute_lift(-3.0), -3.0);
            assert_eq!(curve.compute_lift(-10.0), -10.0);
        }
    }

    #[test]
    fn test_parabolic_peaks_at_max_speed() {
        let wing = ParabolicWing {
            max_speed: 10.0,
            max_lift: 5.5,
        };
        assert_eq!(wing.compute_lift(10.0), 5.5);
        assert_eq!(wing.compute_lift(25.0), 5.5);
        assert_relative_eq!(wing.compute_lift(5.0), 5.5 * 0.75, epsilon = 1e-12);

        let mut previous = 0.0;
        for i in 1..=100 {
            let lift = wing.compute_lift(i as f64 * 0.1);
            assert!(lift >= previous);
            previous = lift;
        }
        assert_relative_eq!(previous, 5.5, epsilon = 1e-12);
    }

    #[test]
    fn test_logarithmic_approaches_max_lift() {
        let wing = LogarithmicWing {
            max_speed: 10.0,
            max_lift: 5.5,
            base: 2.0,
        };
        let mut previous = wing.compute_lift(0.0);
        for i in 1..200 {
            let lift = wing.compute_lift(i as f64 * 0.25);
            assert!(lift > previous || (5.5 - lift) < 1e-9);
            assert!(lift <= 5.5);
            previous = lift;
        }
        assert_relative_eq!(previous, 5.5, epsilon = 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(LiftCurve::default().validate().is_ok());
        assert!(LiftCurve::parabolic(0.0, 5.5).validate().is_err());
        assert!(LiftCurve::logarithmic(10.0, 5.5, 1.0).validate().is_err());
        assert!(LiftCurve::logarithmic(10.0, -1.0, 2.0).validate().is_err());
    }

    #[test]
    fn test_yaml_tagging() {
        let curve: LiftCurve =
            serde_yaml::from_str("type: logarithmic\nmax_speed: 8.0\nmax_lift: 4.0\nbase: 1.7\n")
                .unwrap();
        assert_eq!(curve, LiftCurve::logarithmic(8.0, 4.0, 1.7));
    }
}
