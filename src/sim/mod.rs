//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are per tick)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod missile;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use entity::{Kinematics, Lifetime};
pub use missile::{Missile, MissileKind, MissileTuning, SpriteId, wobble_offset};
pub use player::{Heading, HeadingTracker, Key, KeyEvent, PlayerCraft};
pub use spawner::{SpawnMode, Spawner};
pub use state::{SimState, SpriteInstance};
pub use tick::{TickInput, tick};
