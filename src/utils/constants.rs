pub const MAX_TIMESTEP: f64 = 1.0 / 10.0; // Largest dt a single tick will integrate
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0; // One rendered frame at 60 Hz

// Collision bookkeeping
pub const COLLISION_HISTORY_LEN: usize = 10; // Most recent collision states kept
pub const MESH_COLLISION_THRESHOLD: usize = 3; // MESH entries tolerated before a hard reset

// Level layout
pub const CITY_TILE_SIZE: f64 = 16.0; // Edge length of one city tile
pub const NEAR_ZERO: f64 = 1e-9; // Below this a vector has no usable direction
