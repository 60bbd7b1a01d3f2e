use bevy::prelude::*;

use crate::resources::{ControlInput, InputSampler, PhysicsConfig, RawInput};

/// Derives this tick's [`ControlInput`] from the raw host input.
pub fn input_sampling_system(
    raw: Res<RawInput>,
    physics: Res<PhysicsConfig>,
    mut sampler: ResMut<InputSampler>,
    mut input: ResMut<ControlInput>,
) {
    *input = sampler.sample(&raw, physics.dt());
}
