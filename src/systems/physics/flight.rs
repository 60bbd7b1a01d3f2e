use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::lift::Lift;
use crate::components::{Aircraft, CollisionEvent, WorldMatrix};
use crate::resources::{ControlInput, ObstaclePoints};
use crate::systems::physics::apply_friction;
use crate::utils::{axis_rotation, body_to_world, clamp_norm, world_to_body};

/// Runs one flight tick for every aircraft and publishes its world matrix.
pub fn aircraft_flight_system(
    mut query: Query<(Entity, &mut Aircraft, &mut WorldMatrix)>,
    input: Res<ControlInput>,
    obstacles: Res<ObstaclePoints>,
    mut collision_events: EventWriter<CollisionEvent>,
) {
    for (entity, mut aircraft, mut world) in query.iter_mut() {
        aircraft.update_input(&input);
        world.0 = aircraft.compute_world_matrix(obstacles.points());

        if aircraft.collision_started() {
            collision_events.send(CollisionEvent {
                entity,
                position: aircraft.position(),
                velocity: aircraft.velocity(),
            });
        }
    }
}

/// Integrates attitude, velocity and position of a single aircraft over `dt`.
///
/// Rotations and thrust are computed in the body frame sampled at the start
/// of the tick. Control authority scales with the current wing lift, so the
/// aircraft barely responds to the stick while stalled.
pub fn integrate_flight(aircraft: &mut Aircraft, dt: f64) {
    let config = &aircraft.config;
    let input = aircraft.input;

    let pitch = input.r.x.clamp(-1.0, 1.0);
    let yaw = input.r.y.clamp(-1.0, 1.0);
    let roll = input.r.z.clamp(-1.0, 1.0);
    let throttle = input.m.z.clamp(-1.0, 1.0);

    let basis = aircraft.attitude;

    let forward_speed = world_to_body(&basis, &aircraft.velocity).z;
    let wing_lift = config.wing.compute_lift(forward_speed);

    // angular rates
    let authority = config.control_gain * wing_lift;
    let pitch_rate = aircraft.pitch_rate.damp(authority * pitch, dt);
    let yaw_rate = aircraft.yaw_rate.damp(authority * yaw, dt);
    let roll_rate = aircraft.roll_rate.damp(authority * roll, dt);

    let increment = axis_rotation(-Vector3::x(), pitch_rate * dt)
        * axis_rotation(-Vector3::y(), yaw_rate * dt)
        * axis_rotation(-Vector3::z(), roll_rate * dt);
    aircraft.attitude = basis * increment;
    aircraft.attitude.renormalize();

    // external accelerations are already in world coordinates
    aircraft.velocity += config.external_acceleration * dt;

    let throttle_level = aircraft.throttle.damp(throttle, dt);
    let body_acceleration = Vector3::new(
        0.0,
        config.wing_lift_angle.cos() * wing_lift,
        config.engine_acceleration * throttle_level
            - config.wing_inefficiency * config.wing_lift_angle.sin() * wing_lift,
    );

    let mut body_velocity = world_to_body(&basis, &aircraft.velocity);
    body_velocity += body_acceleration * dt;
    body_velocity = apply_friction(body_velocity, &config.body_friction, dt);
    body_velocity = clamp_norm(body_velocity, config.max_speed);

    aircraft.velocity = body_to_world(&basis, &body_velocity);
    aircraft.position += aircraft.velocity * dt;

    aircraft.wing_lift = wing_lift;
    aircraft.body_velocity = body_velocity;
}
