pub mod config;
mod game;
mod input;
mod obstacles;
mod telemetry;

pub use config::{GameConfig, PhysicsConfig, SimulationConfig};
pub use game::{GameSession, GameState, Target};
pub use input::{ControlInput, EdgeTrigger, InputSampler, RawInput};
pub use obstacles::{city_tile_offsets, ObstaclePoints};
pub use telemetry::TelemetryLog;
