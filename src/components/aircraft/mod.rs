pub mod config;
pub mod state;

pub use config::AircraftConfig;
pub use state::Aircraft;
