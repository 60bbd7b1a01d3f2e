use bevy::prelude::*;

use crate::components::{Aircraft, FollowCamera};
use crate::resources::ControlInput;

/// Moves every follow camera behind the aircraft.
pub fn camera_follow_system(
    aircraft_query: Query<&Aircraft>,
    mut camera_query: Query<&mut FollowCamera>,
    input: Res<ControlInput>,
) {
    let Ok(aircraft) = aircraft_query.get_single() else {
        return;
    };

    for mut camera in camera_query.iter_mut() {
        camera.update(&aircraft.position(), &aircraft.attitude(), input.dt);
    }
}
