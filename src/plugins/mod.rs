mod flight;
mod keyboard;

pub use flight::{session_playing, FlightPlugin, FlightSet};
pub use keyboard::KeyboardInputPlugin;
