use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{Aircraft, CollisionState};
use crate::utils::{heading_of, horizontal_distance};

/// Classifies `position` against the obstacle points and the ground plane.
///
/// Only points within `collision_distance` on the horizontal plane count,
/// and of those only the highest one. Being below it is a mesh collision,
/// which wins over being below the ground. Sparse point sets can miss large
/// flat faces.
pub fn detect_collision(
    position: &Vector3<f64>,
    obstacles: &[Vector3<f64>],
    collision_distance: f64,
) -> CollisionState {
    let highest = obstacles
        .iter()
        .filter(|point| horizontal_distance(point, position) <= collision_distance)
        .map(|point| point.y)
        .fold(None, |highest: Option<f64>, y| {
            Some(highest.map_or(y, |h| h.max(y)))
        });

    match highest {
        Some(top) if top > position.y => CollisionState::Mesh,
        _ if position.y < 0.0 => CollisionState::Ground,
        _ => CollisionState::None,
    }
}

/// Applies the position and velocity response for `state` and records it in
/// the aircraft's collision history.
pub fn react_to_collision(aircraft: &mut Aircraft, state: CollisionState) {
    let previous = aircraft.history.latest().unwrap_or_default();

    match state {
        CollisionState::Ground => {
            aircraft.position.y = 0.0;
            aircraft.velocity.y = 0.0;

            // touchdown from flight
            if previous == CollisionState::None {
                aircraft.attitude = level_attitude(&aircraft.attitude, &aircraft.velocity);
            }
        }
        CollisionState::Mesh => {
            let recent_mesh = aircraft.history.count(CollisionState::Mesh);
            aircraft.velocity = aircraft.velocity.component_mul(&aircraft.config.bounce);

            if recent_mesh > aircraft.config.mesh_collision_threshold {
                warn!(
                    "Aircraft stuck in geometry at {:?} ({} of last {} ticks), resetting to origin",
                    aircraft.position,
                    recent_mesh,
                    aircraft.history.len()
                );
                aircraft.position = Vector3::zeros();
                aircraft.velocity = Vector3::zeros();
            }

            aircraft.position.y = aircraft.position.y.max(0.0);
        }
        CollisionState::None => {}
    }

    aircraft.previous_collision = previous;
    aircraft.collision = state;
    aircraft.history.push(state);
}

/// Drops roll and pitch from `attitude`, keeping the heading of the nose.
///
/// With the nose pointing straight up or down the nose has no heading; the
/// sign of the velocity's z component then picks between north and south.
fn level_attitude(attitude: &UnitQuaternion<f64>, velocity: &Vector3<f64>) -> UnitQuaternion<f64> {
    let forward = attitude.transform_vector(&Vector3::z());
    let heading = heading_of(&forward).unwrap_or(if velocity.z < 0.0 {
        std::f64::consts::PI
    } else {
        0.0
    });

    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading)
}
