use bevy::prelude::*;

use crate::components::{CollisionEvent, PackageLandedEvent};
use crate::resources::{GameSession, Target};

/// Turns this tick's crashes and landings into lives and deliveries.
pub fn delivery_outcome_system(
    mut collisions: EventReader<CollisionEvent>,
    mut landings: EventReader<PackageLandedEvent>,
    mut session: ResMut<GameSession>,
    mut target: ResMut<Target>,
) {
    for collision in collisions.read() {
        debug!("Mesh collision at {:?}", collision.position);
        session.lose_life();
    }

    for landing in landings.read() {
        if landing.target_hit {
            session.record_delivery(&mut target);
        }
    }
}
