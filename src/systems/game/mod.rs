mod outcome;
mod session;

pub use outcome::delivery_outcome_system;
pub use session::game_state_system;
