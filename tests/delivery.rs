mod common;

use common::TestAppBuilder;
use drone_delivery::{
    components::{AircraftConfig, PackageLandedEvent, PackageState},
    resources::{GameConfig, SimulationConfig},
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

fn drop_config(target: Vector3<f64>) -> SimulationConfig {
    SimulationConfig {
        aircraft: AircraftConfig {
            initial_position: Vector3::new(10.0, 5.0, 0.0),
            initial_velocity: Vector3::new(0.0, 0.0, 2.0),
            ..Default::default()
        },
        game: GameConfig {
            target_start: target,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_package_dropped_on_target_counts_delivery() {
    let target = Vector3::new(10.0, 0.0, 0.0);
    let mut app = TestAppBuilder::new()
        .with_config(drop_config(target))
        .playing()
        .build();

    app.click(|raw| &mut raw.fire);
    assert_eq!(app.package().state(), PackageState::Falling);

    app.run_until(1_000, |app| !app.events::<PackageLandedEvent>().is_empty());

    let landings = app.events::<PackageLandedEvent>();
    assert_eq!(landings.len(), 1);
    assert!(landings[0].target_hit);
    assert_eq!(landings[0].target, target);
    assert_eq!(landings[0].position.y, 0.0);
    assert!((landings[0].position - target).norm() <= 10.0);

    assert_eq!(app.session().deliveries(), 1);
    let offset = app.target() - target;
    assert_eq!(offset.y, 0.0);
    assert!(offset.x.abs() <= 5.0 && offset.z.abs() <= 5.0);

    // carried again on the next tick
    app.tick();
    let package = app.package();
    assert_eq!(package.state(), PackageState::Held);
    assert!(!package.is_target_hit());
}

#[test]
fn test_package_missing_target_keeps_target() {
    let target = Vector3::new(100.0, 0.0, 100.0);
    let mut app = TestAppBuilder::new()
        .with_config(drop_config(target))
        .playing()
        .build();

    app.click(|raw| &mut raw.fire);
    app.run_until(1_000, |app| !app.events::<PackageLandedEvent>().is_empty());

    assert!(!app.events::<PackageLandedEvent>()[0].target_hit);
    assert_eq!(app.session().deliveries(), 0);
    assert_eq!(app.target(), target);
}

#[test]
fn test_fire_held_down_does_not_drop() {
    let mut app = TestAppBuilder::new()
        .with_config(drop_config(Vector3::zeros()))
        .playing()
        .build();

    app.raw_input().fire = true;
    app.run_ticks(30);
    assert_eq!(app.package().state(), PackageState::Held);
    assert_eq!(app.package().position(), Vector3::new(0.0, -2.0, 0.0));
}
