#![allow(dead_code)]

mod assertions;
mod test_app;

pub use assertions::assert_aircraft_state_valid;
pub use test_app::{TestApp, TestAppBuilder};
