use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Values a [`Damper`] can smooth.
///
/// Besides blending (`Add` and scaling by `f64`) the damper has to know when a
/// value lies beyond one of its bounds. Scalars compare directly, vectors
/// compare by magnitude.
pub trait DampValue: Copy + Add<Output = Self> + Mul<f64, Output = Self> {
    fn exceeds(&self, bound: &Self) -> bool;
    fn falls_below(&self, bound: &Self) -> bool;
}

impl DampValue for f64 {
    fn exceeds(&self, bound: &Self) -> bool {
        self > bound
    }

    fn falls_below(&self, bound: &Self) -> bool {
        self < bound
    }
}

impl DampValue for Vector3<f64> {
    fn exceeds(&self, bound: &Self) -> bool {
        self.norm() > bound.norm()
    }

    fn falls_below(&self, bound: &Self) -> bool {
        self.norm() < bound.norm()
    }
}

/// First-order exponential smoother.
///
/// Each call to [`Damper::damp`] moves the stored value towards the target by
/// `1 - exp(-rate * dt)` of the remaining distance, then clamps it to the
/// optional bounds. The upper bound is checked first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Damper<T> {
    rate: f64,
    previous: T,
    initial: T,
    upper: Option<T>,
    lower: Option<T>,
}

impl<T: DampValue> Damper<T> {
    pub fn new(rate: f64, initial: T) -> Self {
        Self {
            rate,
            previous: initial,
            initial,
            upper: None,
            lower: None,
        }
    }

    pub fn with_upper_bound(mut self, bound: T) -> Self {
        self.upper = Some(bound);
        self
    }

    pub fn with_lower_bound(mut self, bound: T) -> Self {
        self.lower = Some(bound);
        self
    }

    /// Blend `target` into the current value over `dt` seconds and return the result.
    pub fn damp(&mut self, target: T, dt: f64) -> T {
        let decay = (-self.rate * dt).exp();
        let mut current = self.previous * decay + target * (1.0 - decay);

        match (self.upper, self.lower) {
            (Some(upper), _) if current.exceeds(&upper) => current = upper,
            (_, Some(lower)) if current.falls_below(&lower) => current = lower,
            _ => {}
        }

        self.previous = current;
        current
    }

    /// Current value without advancing time.
    pub fn value(&self) -> T {
        self.previous
    }

    /// Restore the construction-time value. Rate and bounds are kept.
    pub fn reset(&mut self) {
        self.previous = self.initial;
    }
}
