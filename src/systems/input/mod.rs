mod keyboard;
mod sampling;

pub use keyboard::keyboard_input_system;
pub use sampling::input_sampling_system;
