use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::COLLISION_HISTORY_LEN;

/// Sent on the first tick of a run of mesh collisions.
#[derive(Event, Debug, Clone)]
pub struct CollisionEvent {
    /// Entity that collided
    pub entity: Entity,
    /// Aircraft position after the bounce was applied
    pub position: Vector3<f64>,
    /// Aircraft velocity after the bounce was applied
    pub velocity: Vector3<f64>,
}

/// Outcome of the collision test for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionState {
    #[default]
    None,
    /// Below the ground plane `y = 0`
    Ground,
    /// Below the highest obstacle point nearby
    Mesh,
}

/// Fixed-capacity ring of the most recent collision states, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionHistory {
    states: [CollisionState; COLLISION_HISTORY_LEN],
    head: usize,
    len: usize,
}

impl Default for CollisionHistory {
    fn default() -> Self {
        Self {
            states: [CollisionState::None; COLLISION_HISTORY_LEN],
            head: 0,
            len: 0,
        }
    }
}

impl CollisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state, evicting the oldest once the ring is full.
    pub fn push(&mut self, state: CollisionState) {
        self.head = (self.head + COLLISION_HISTORY_LEN - 1) % COLLISION_HISTORY_LEN;
        self.states[self.head] = state;
        self.len = (self.len + 1).min(COLLISION_HISTORY_LEN);
    }

    /// Most recently recorded state.
    pub fn latest(&self) -> Option<CollisionState> {
        self.iter().next()
    }

    pub fn count(&self, state: CollisionState) -> usize {
        self.iter().filter(|s| *s == state).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = CollisionState> + '_ {
        (0..self.len).map(move |i| self.states[(self.head + i) % COLLISION_HISTORY_LEN])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }
}
