use bevy::ecs::event::Event;
use bevy::prelude::*;
use drone_delivery::{
    components::{Aircraft, FollowCamera, Package},
    plugins::FlightPlugin,
    resources::{GameSession, ObstaclePoints, RawInput, SimulationConfig, Target},
};
use nalgebra::Vector3;

/// Builder for a headless application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    config: SimulationConfig,
    obstacles: ObstaclePoints,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_obstacles(mut self, obstacles: ObstaclePoints) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Straight into the Playing state
    pub fn playing(mut self) -> Self {
        self.config.game.skip_splash = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(
                FlightPlugin::with_config(self.config)
                    .expect("test config is valid")
                    .with_obstacles(self.obstacles),
            );
        app.finish();
        app.cleanup();

        // spawn the entities without letting real time drive FixedUpdate
        app.world_mut().run_schedule(Startup);

        TestApp { app }
    }
}

/// Drives `FixedUpdate` one tick at a time
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Run until `done` holds, failing the test after `limit` ticks.
    pub fn run_until(&mut self, limit: usize, mut done: impl FnMut(&mut TestApp) -> bool) -> usize {
        for ticks in 1..=limit {
            self.tick();
            if done(self) {
                return ticks;
            }
        }
        panic!("condition not reached within {} ticks", limit);
    }

    pub fn raw_input(&mut self) -> Mut<RawInput> {
        self.app.world_mut().resource_mut::<RawInput>()
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.raw_input().m = Vector3::new(0.0, 0.0, throttle);
    }

    /// Press a button for one tick and release it on the next
    pub fn click(&mut self, select: impl Fn(&mut RawInput) -> &mut bool) {
        for pressed in [true, false] {
            {
                let mut raw = self.raw_input();
                *select(&mut raw) = pressed;
            }
            self.tick();
        }
    }

    pub fn aircraft(&mut self) -> Aircraft {
        self.query_single::<Aircraft>()
    }

    pub fn package(&mut self) -> Package {
        self.query_single::<Package>()
    }

    pub fn camera(&mut self) -> FollowCamera {
        self.query_single::<FollowCamera>()
    }

    pub fn session(&self) -> &GameSession {
        self.app.world().resource::<GameSession>()
    }

    pub fn target(&self) -> Vector3<f64> {
        self.app.world().resource::<Target>().position
    }

    pub fn send_event<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Every event of this type sent so far
    pub fn events<E: Event + Clone>(&self) -> Vec<E> {
        self.app
            .world()
            .resource::<Events<E>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    fn query_single<T: Component + Clone>(&mut self) -> T {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query
            .get_single(world)
            .cloned()
            .expect("exactly one entity with this component")
    }
}
