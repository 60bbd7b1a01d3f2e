use bevy::prelude::*;

use crate::components::Aircraft;
use crate::resources::{ControlInput, TelemetryLog};

pub fn telemetry_system(
    query: Query<&Aircraft>,
    input: Res<ControlInput>,
    mut log: ResMut<TelemetryLog>,
) {
    if !log.tick(input.dt) {
        return;
    }

    for aircraft in query.iter() {
        debug!(
            "position {:?} velocity {:?} body velocity {:?} lift {:.3} collision {:?}",
            aircraft.position(),
            aircraft.velocity(),
            aircraft.body_velocity(),
            aircraft.wing_lift(),
            aircraft.collision_state()
        );
    }
}
