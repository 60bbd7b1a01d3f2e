pub mod aircraft;
pub mod camera;
pub mod collision;
pub mod lift;
pub mod package;
pub mod render;

pub use aircraft::{Aircraft, AircraftConfig};
pub use camera::{CameraConfig, FollowCamera};
pub use collision::{CollisionEvent, CollisionHistory, CollisionState};
pub use lift::{Lift, LiftCurve, LogarithmicWing, ParabolicWing};
pub use package::{Package, PackageConfig, PackageLandedEvent, PackageState, ReleaseConditions};
pub use render::{sync_transform_system, WorldMatrix};
