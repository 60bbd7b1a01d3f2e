use bevy::prelude::*;
use nalgebra::Vector3;

use crate::resources::RawInput;

/// Maps the keyboard onto [`RawInput`].
///
/// W/S throttle, arrow up/down pitch, A/D and arrow left/right roll, Q/E yaw,
/// Space drops a package, Enter starts the next session, R resets the
/// aircraft and Escape quits.
pub fn keyboard_input_system(keyboard: Res<ButtonInput<KeyCode>>, mut raw: ResMut<RawInput>) {
    let roll = axis(&keyboard, &[KeyCode::KeyA, KeyCode::ArrowLeft], &[KeyCode::KeyD, KeyCode::ArrowRight]);

    raw.m = Vector3::new(0.0, 0.0, axis(&keyboard, &[KeyCode::KeyS], &[KeyCode::KeyW]));
    raw.r = Vector3::new(
        axis(&keyboard, &[KeyCode::ArrowUp], &[KeyCode::ArrowDown]),
        axis(&keyboard, &[KeyCode::KeyE], &[KeyCode::KeyQ]),
        roll,
    );
    raw.fire = keyboard.pressed(KeyCode::Space);
    raw.next = keyboard.pressed(KeyCode::Enter);
    raw.reset = keyboard.pressed(KeyCode::KeyR);
    raw.quit = keyboard.pressed(KeyCode::Escape);
}

fn axis(keyboard: &ButtonInput<KeyCode>, negative: &[KeyCode], positive: &[KeyCode]) -> f64 {
    let mut value = 0.0;
    if keyboard.any_pressed(positive.iter().copied()) {
        value += 1.0;
    }
    if keyboard.any_pressed(negative.iter().copied()) {
        value -= 1.0;
    }
    value
}
