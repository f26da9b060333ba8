//! Missile population manager
//!
//! Tops the live missile set up to a level-dependent count. Each call flips a
//! fair coin between two modes:
//! - `Sparse`: `(level + 5) / 3` missiles, `Mini` below level 5, otherwise
//!   `Directed` aimed at the player
//! - `Full`: `level` missiles, each `Missile` or `Drunk` on a coin flip
//!
//! Spawn points come from a coarse lattice that mostly sits offscreen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::missile::{Missile, MissileKind};
use crate::consts::*;

/// Level at which `Sparse` switches from mini missiles to directed ones
pub const DIRECTED_MIN_LEVEL: u32 = 5;

/// Initial heading for every spawned missile (degrees)
pub const SPAWN_HEADING: f32 = 0.0;

/// Population strategy for one top-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnMode {
    Sparse,
    Full,
}

impl SpawnMode {
    /// Population size this mode fills up to
    pub fn target_count(&self, level: u32) -> usize {
        match self {
            SpawnMode::Sparse => (level.saturating_add(5) / 3) as usize,
            SpawnMode::Full => level as usize,
        }
    }

    /// Lattice rows (multiples of `SPAWN_ROW_SPACING`) this mode spawns on
    fn rows(&self) -> std::ops::RangeInclusive<u32> {
        match self {
            SpawnMode::Sparse => 0..=2,
            SpawnMode::Full => 1..=2,
        }
    }
}

/// Allocates missile IDs and fills the population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    next_id: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_missile_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Pick a mode with a fair coin and top up `missiles`
    ///
    /// Never removes missiles. Returns the mode used.
    pub fn ensure_population<R: Rng>(
        &mut self,
        missiles: &mut Vec<Missile>,
        level: u32,
        player_pos: Vec2,
        rng: &mut R,
    ) -> SpawnMode {
        let mode = if rng.random_bool(0.5) {
            SpawnMode::Sparse
        } else {
            SpawnMode::Full
        };
        self.populate(missiles, mode, level, player_pos, rng);
        mode
    }

    /// Spawn missiles with a fixed `mode` until its target count is reached
    pub fn populate<R: Rng>(
        &mut self,
        missiles: &mut Vec<Missile>,
        mode: SpawnMode,
        level: u32,
        player_pos: Vec2,
        rng: &mut R,
    ) {
        let target = mode.target_count(level);
        while missiles.len() < target {
            let pos = lattice_point(rng, mode);
            let id = self.next_missile_id();
            let missile = match mode {
                SpawnMode::Sparse if level < DIRECTED_MIN_LEVEL => {
                    Missile::new(id, MissileKind::Mini, pos, SPAWN_HEADING)
                }
                SpawnMode::Sparse => Missile::directed(id, pos, SPAWN_HEADING, player_pos),
                SpawnMode::Full => {
                    let kind = if rng.random_bool(0.5) {
                        MissileKind::Missile
                    } else {
                        MissileKind::Drunk
                    };
                    Missile::new(id, kind, pos, SPAWN_HEADING)
                }
            };
            log::debug!(
                "Spawned {:?} #{} at ({}, {})",
                missile.kind,
                missile.id,
                pos.x,
                pos.y
            );
            missiles.push(missile);
        }
    }
}

/// Random point on the spawn lattice for `mode`
fn lattice_point<R: Rng>(rng: &mut R, mode: SpawnMode) -> Vec2 {
    let column = rng.random_range(1..=SPAWN_COLUMNS);
    let row = rng.random_range(mode.rows());
    Vec2::new(
        SPAWN_COLUMN_SPACING * column as f32,
        SPAWN_ROW_SPACING * row as f32,
    )
}
