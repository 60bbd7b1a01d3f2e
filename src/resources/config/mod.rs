pub mod game;
pub mod physics;
pub mod simulation;

pub use game::GameConfig;
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;
