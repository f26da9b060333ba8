//! Simulation context
//!
//! Owns everything one run needs: the seeded RNG, the live missiles, the
//! player craft and its input tracker. Created once at startup and passed
//! explicitly to `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::missile::{Missile, SpriteId};
use super::player::{HeadingTracker, PlayerCraft};
use super::spawner::Spawner;
use crate::Settings;

/// One sprite to draw: rotate by `rotation_degrees`, blit centered at `position`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub sprite: SpriteId,
    pub position: Vec2,
    pub rotation_degrees: f32,
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Difficulty level driving the spawner
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: PlayerCraft,
    pub controls: HeadingTracker,
    /// Live missiles in spawn order
    pub missiles: Vec<Missile>,
    pub spawner: Spawner,
}

impl SimState {
    /// Create a state from settings and fill the initial population
    pub fn new(settings: &Settings) -> Self {
        let center = Vec2::new(settings.screen_width, settings.screen_height) * 0.5;
        let mut state = Self {
            seed: settings.seed,
            rng: Pcg32::seed_from_u64(settings.seed),
            level: settings.level,
            time_ticks: 0,
            player: PlayerCraft::new(center, settings.player_speed, settings.player_turn_degrees),
            controls: HeadingTracker::new(),
            missiles: Vec::new(),
            spawner: Spawner::new(),
        };
        state.ensure_population();
        log::info!(
            "Simulation created: seed={} level={} missiles={}",
            state.seed,
            state.level,
            state.missiles.len()
        );
        state
    }

    /// Top up the missile population for the current level
    pub fn ensure_population(&mut self) {
        let before = self.missiles.len();
        let mode = self.spawner.ensure_population(
            &mut self.missiles,
            self.level,
            self.player.position,
            &mut self.rng,
        );
        let spawned = self.missiles.len() - before;
        if spawned > 0 {
            log::debug!("{:?} top-up spawned {} missiles", mode, spawned);
        }
    }

    /// Change difficulty; takes effect at the next population top-up
    pub fn set_level(&mut self, level: u32) {
        if level != self.level {
            log::info!("Level {} -> {}", self.level, level);
            self.level = level;
        }
    }

    /// Draw list for the frame driver: missiles in spawn order, player last
    pub fn draw_list(&self) -> Vec<SpriteInstance> {
        self.missiles
            .iter()
            .map(|m| SpriteInstance {
                sprite: m.sprite(),
                position: m.position(),
                rotation_degrees: m.rotation_degrees(),
            })
            .chain(std::iter::once(SpriteInstance {
                sprite: self.player.sprite(),
                position: self.player.position,
                rotation_degrees: self.player.rotation_degrees(),
            }))
            .collect()
    }
}
