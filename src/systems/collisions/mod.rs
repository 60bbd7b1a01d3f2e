mod detection;

pub use detection::{detect_collision, react_to_collision};
