pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub mod prelude {
    pub use crate::components::{
        Aircraft, AircraftConfig, CameraConfig, CollisionEvent, CollisionState, FollowCamera,
        LiftCurve, Package, PackageConfig, PackageLandedEvent, PackageState, WorldMatrix,
    };
    pub use crate::plugins::{FlightPlugin, FlightSet, KeyboardInputPlugin};
    pub use crate::resources::{
        ControlInput, GameSession, GameState, ObstaclePoints, RawInput, SimulationConfig, Target,
    };
    pub use crate::utils::SimError;
}
