use bevy::prelude::*;

use crate::components::{Aircraft, FollowCamera, Package, WorldMatrix};
use crate::resources::{ControlInput, GameSession, GameState, Target};

/// Applies the button edges of this tick to the session.
///
/// A button that moves the session to another phase is consumed, so the
/// same press does not also drop a package.
pub fn game_state_system(
    mut input: ResMut<ControlInput>,
    mut session: ResMut<GameSession>,
    mut target: ResMut<Target>,
    mut aircraft_query: Query<(&mut Aircraft, &mut WorldMatrix), Without<Package>>,
    mut package_query: Query<(&mut Package, &mut WorldMatrix), Without<Aircraft>>,
    mut camera_query: Query<&mut FollowCamera>,
    mut exit: EventWriter<AppExit>,
) {
    if input.handle_q {
        info!("Quit requested");
        exit.send(AppExit::Success);
        return;
    }

    match session.state() {
        GameState::Splash if input.handle_fire => {
            input.handle_fire = false;
            session.start();
        }
        GameState::Playing if input.handle_r => {
            for (mut aircraft, mut world) in aircraft_query.iter_mut() {
                aircraft.reset_state();
                world.0 = aircraft.world_matrix();
            }
            camera_query.iter_mut().for_each(|mut camera| camera.reset());
        }
        GameState::Won | GameState::Lost if input.handle_next => {
            input.handle_next = false;
            session.restart(&mut target);
            for (mut aircraft, mut world) in aircraft_query.iter_mut() {
                aircraft.reset_state();
                world.0 = aircraft.world_matrix();
            }
            for (mut package, mut world) in package_query.iter_mut() {
                package.reset();
                world.0 = package.world_matrix();
            }
            camera_query.iter_mut().for_each(|mut camera| camera.reset());
        }
        _ => {}
    }
}
