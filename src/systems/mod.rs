mod camera;
pub mod collisions;
mod game;
mod input;
pub mod physics;
mod telemetry;

pub use camera::camera_follow_system;
pub use collisions::{detect_collision, react_to_collision};
pub use game::{delivery_outcome_system, game_state_system};
pub use input::{input_sampling_system, keyboard_input_system};
pub use physics::{aircraft_flight_system, package_drop_system};
pub use telemetry::telemetry_system;
