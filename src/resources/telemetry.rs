use bevy::prelude::*;

/// Decides when the next telemetry line is due, in simulated seconds.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TelemetryLog {
    interval: f64,
    elapsed: f64,
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TelemetryLog {
    pub fn new(interval: f64) -> Self {
        Self {
            interval: interval.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` and report whether a line should be written now.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            // a long stall starts a fresh interval instead of a burst of lines
            if self.elapsed >= self.interval {
                self.elapsed = 0.0;
            }
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited() {
        let mut log = TelemetryLog::new(0.5);
        let fired: Vec<bool> = (0..3).map(|_| log.tick(0.2)).collect();
        assert_eq!(fired, vec![false, false, true]);
    }

    #[test]
    fn test_overshoot_carries_into_next_interval() {
        let mut log = TelemetryLog::new(1.0);
        let fired: Vec<usize> = (1..=9).filter(|_| log.tick(0.3)).collect();
        // 1.2 s, then 2.1 s of simulated time
        assert_eq!(fired, vec![4, 7]);
    }
}
