use bevy::prelude::*;

use crate::components::{Aircraft, Package, PackageLandedEvent, ReleaseConditions, WorldMatrix};
use crate::resources::{ControlInput, Target};
use crate::systems::physics::apply_friction;
use crate::utils::clamp_norm;

/// Advances every package, releasing from the current aircraft state.
pub fn package_drop_system(
    aircraft_query: Query<&Aircraft>,
    mut package_query: Query<(&mut Package, &mut WorldMatrix), Without<Aircraft>>,
    input: Res<ControlInput>,
    target: Res<Target>,
    mut landed_events: EventWriter<PackageLandedEvent>,
) {
    let Ok(aircraft) = aircraft_query.get_single() else {
        return;
    };

    let release = ReleaseConditions {
        plane_position: aircraft.position(),
        plane_velocity: aircraft.velocity(),
        target: target.position,
    };

    for (mut package, mut world) in package_query.iter_mut() {
        package.update_input(&input);
        world.0 = package.compute_world_matrix(&release);

        if let Some(position) = package.landed_at() {
            landed_events.send(PackageLandedEvent {
                position,
                target: release.target,
                target_hit: package.is_target_hit(),
            });
        }
    }
}

/// Ballistic step for a falling package. Packages never rotate, so the
/// friction frame is the world frame.
pub fn integrate_drop(package: &mut Package, dt: f64) {
    let config = &package.config;

    package.velocity += config.external_acceleration * dt;
    let velocity = apply_friction(package.velocity, &config.friction, dt);
    package.velocity = clamp_norm(velocity, config.max_speed);
    package.position += package.velocity * dt;
}
