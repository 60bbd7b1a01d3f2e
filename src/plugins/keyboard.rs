use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::RawInput;
use crate::systems::{input_sampling_system, keyboard_input_system};

/// Drives [`RawInput`] from bevy's keyboard state.
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<RawInput>()
            .add_systems(
                FixedUpdate,
                keyboard_input_system
                    .in_set(FlightSet::Input)
                    .before(input_sampling_system),
            );
    }
}
