use bevy::log::LogPlugin;
use bevy::prelude::*;
use nalgebra::Vector3;

use drone_delivery::prelude::*;

/// Ages the game event buffers the way `App::update` does between frames.
fn update_events(world: &mut World) {
    world.resource_mut::<Events<CollisionEvent>>().update();
    world.resource_mut::<Events<PackageLandedEvent>>().update();
}

const DEMO_TICKS: usize = 1200;

/// Flies a scripted headless session: throttle up, drop a package every few
/// seconds and log the outcome.
fn main() -> Result<(), SimError> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    config.game.skip_splash = true;

    let obstacles = ObstaclePoints::city_tiles(&[
        Vector3::new(4.0, 0.0, 4.0),
        Vector3::new(4.0, 6.0, 4.0),
        Vector3::new(8.0, 12.0, 6.0),
    ])?;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(FlightPlugin::with_config(config)?.with_obstacles(obstacles));
    app.finish();
    app.cleanup();
    app.world_mut().run_schedule(Startup);

    for tick in 0..DEMO_TICKS {
        {
            let mut raw = app.world_mut().resource_mut::<RawInput>();
            raw.m = Vector3::new(0.0, 0.0, 1.0);
            raw.fire = tick % 180 < 5;
        }
        app.world_mut().run_schedule(FixedUpdate);
        update_events(app.world_mut());

        if !app.world().resource::<GameSession>().is_playing() {
            break;
        }
    }

    let session = app.world().resource::<GameSession>();
    info!(
        "Session finished in state {:?}: {} deliveries, {} lives left",
        session.state(),
        session.deliveries(),
        session.lives()
    );
    Ok(())
}
