use bevy::prelude::*;

use crate::components::{
    sync_transform_system, Aircraft, CollisionEvent, FollowCamera, Package, PackageLandedEvent,
    WorldMatrix,
};
use crate::resources::{
    ControlInput, GameSession, InputSampler, ObstaclePoints, RawInput, SimulationConfig, Target,
    TelemetryLog,
};
use crate::systems::{
    aircraft_flight_system, camera_follow_system, delivery_outcome_system, game_state_system,
    input_sampling_system, package_drop_system, telemetry_system,
};
use crate::utils::{RngManager, SimResult};

/// Order of one fixed tick
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Input,
    Session,
    Aircraft,
    Package,
    Camera,
    Outcome,
    Telemetry,
}

/// Headless delivery game: resources, entities and the fixed-tick pipeline.
///
/// Rendering is left to the host, which reads each entity's [`WorldMatrix`]
/// (or the `Transform` mirrored from it).
pub struct FlightPlugin {
    config: SimulationConfig,
    obstacles: ObstaclePoints,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            obstacles: ObstaclePoints::default(),
        }
    }
}

impl FlightPlugin {
    /// Rejects configs that would stall the fixed timestep or break the
    /// lift and target models.
    pub fn with_config(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            obstacles: ObstaclePoints::default(),
        })
    }

    pub fn with_obstacles(mut self, obstacles: ObstaclePoints) -> Self {
        self.obstacles = obstacles;
        self
    }

    fn spawn_entities(mut commands: Commands, config: SimulationConfig) {
        let aircraft = Aircraft::new(config.aircraft);
        let camera = FollowCamera::new(config.camera, &aircraft.position(), &aircraft.attitude());
        let package = Package::new(config.package);

        commands.spawn((
            WorldMatrix(package.world_matrix()),
            package,
            Transform::default(),
            Name::new("Package"),
        ));
        commands.spawn((
            WorldMatrix(aircraft.world_matrix()),
            aircraft,
            Transform::default(),
            Name::new("Aircraft"),
        ));
        commands.spawn((camera, Name::new("FollowCamera")));
    }
}

pub fn session_playing(session: Res<GameSession>) -> bool {
    session.is_playing()
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let rng = RngManager::new(config.game.seed).get_rng("target");

        app.insert_resource(config.physics.clone())
            .insert_resource(self.obstacles.clone())
            .insert_resource(Target {
                position: config.game.target_start,
            })
            .insert_resource(GameSession::new(config.game.clone(), rng))
            .insert_resource(InputSampler::new(config.game.bounce_guard_frames))
            .insert_resource(TelemetryLog::new(config.physics.telemetry_interval))
            .init_resource::<RawInput>()
            .init_resource::<ControlInput>()
            .add_event::<CollisionEvent>()
            .add_event::<PackageLandedEvent>();

        app.insert_resource(Time::<Fixed>::from_seconds(config.physics.dt()));

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Input,
                FlightSet::Session,
                FlightSet::Aircraft,
                FlightSet::Package,
                FlightSet::Camera,
                FlightSet::Outcome,
                FlightSet::Telemetry,
            )
                .chain(),
        );

        app.add_systems(
            Startup,
            move |commands: Commands| Self::spawn_entities(commands, config.clone()),
        )
        .add_systems(
            FixedUpdate,
            (
                input_sampling_system.in_set(FlightSet::Input),
                game_state_system.in_set(FlightSet::Session),
                aircraft_flight_system
                    .in_set(FlightSet::Aircraft)
                    .run_if(session_playing),
                package_drop_system
                    .in_set(FlightSet::Package)
                    .run_if(session_playing),
                camera_follow_system
                    .in_set(FlightSet::Camera)
                    .run_if(session_playing),
                delivery_outcome_system.in_set(FlightSet::Outcome),
                telemetry_system
                    .in_set(FlightSet::Telemetry)
                    .run_if(session_playing),
            ),
        )
        .add_systems(PostUpdate, sync_transform_system);
    }
}
