use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::resources::config::GameConfig;

/// Point the packages are aimed at. Only the game session moves it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: Vector3<f64>,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            position: GameConfig::default().target_start,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Splash,
    Playing,
    Won,
    Lost,
}

/// Lives, deliveries and the phase of the current session.
#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    lives: u32,
    deliveries: u32,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// `rng` drives target placement, so a seeded stream replays the same session.
    pub fn new(config: GameConfig, rng: ChaCha8Rng) -> Self {
        let state = if config.skip_splash {
            GameState::Playing
        } else {
            GameState::Splash
        };
        Self {
            lives: config.lives,
            deliveries: 0,
            state,
            config,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn deliveries(&self) -> u32 {
        self.deliveries
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Leave the splash screen.
    pub fn start(&mut self) {
        if self.state == GameState::Splash {
            self.set_state(GameState::Playing);
        }
    }

    /// Called once per run of mesh collisions. Losing the last life ends the session.
    pub fn lose_life(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        info!("Life lost, {} remaining", self.lives);
        if self.lives == 0 {
            self.set_state(GameState::Lost);
        }
    }

    /// Count a delivery and move `target` somewhere new.
    pub fn record_delivery(&mut self, target: &mut Target) {
        if !self.is_playing() {
            return;
        }
        self.deliveries += 1;
        target.position = self.next_target(&target.position);
        info!(
            "Delivery {} of {}, next target at {:?}",
            self.deliveries, self.config.deliveries_to_win, target.position
        );
        if self.deliveries >= self.config.deliveries_to_win {
            self.set_state(GameState::Won);
        }
    }

    /// Random whole offset on the horizontal axes from `current`. A range
    /// too small to hold an offset leaves the target where it is.
    pub fn next_target(&mut self, current: &Vector3<f64>) -> Vector3<f64> {
        let half = self.config.target_range / 2;
        if half <= 0 {
            return *current;
        }
        let dx = self.rng.gen_range(-half..half);
        let dz = self.rng.gen_range(-half..half);
        current + Vector3::new(dx as f64, 0.0, dz as f64)
    }

    /// Fresh lives and deliveries, target back at its start.
    pub fn restart(&mut self, target: &mut Target) {
        self.lives = self.config.lives;
        self.deliveries = 0;
        target.position = self.config.target_start;
        self.set_state(GameState::Playing);
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            info!("Game state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}
