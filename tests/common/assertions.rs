use drone_delivery::components::Aircraft;
use nalgebra::Matrix3;

/// Assert that an aircraft's state is finite and physically consistent
#[track_caller]
pub fn assert_aircraft_state_valid(aircraft: &Aircraft) {
    assert!(
        aircraft.position().iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        aircraft.position()
    );
    assert!(
        aircraft.velocity().iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        aircraft.velocity()
    );
    assert!(
        aircraft.position().y >= 0.0,
        "Aircraft below ground: {:?}",
        aircraft.position()
    );
    assert!(
        aircraft.velocity().norm() <= aircraft.config().max_speed + 1e-9,
        "Speed {} above max speed",
        aircraft.velocity().norm()
    );

    let rotation = aircraft.attitude().to_rotation_matrix();
    let gram = rotation.matrix().transpose() * rotation.matrix();
    assert!(
        (gram - Matrix3::identity()).norm() < 1e-9,
        "Attitude basis is not orthonormal"
    );
}
