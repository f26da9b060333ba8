//! Missile variants and their steering laws
//!
//! Every variant shares one [`Kinematics`] block; the variant tag selects
//! tuning at construction and the pursuit law in [`Missile::advance`].
//!
//! Homing variants use bang-bang steering: each tick they turn by their full
//! rotation speed toward the pursuit vector, never proportionally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Kinematics, Lifetime};
use crate::{consts::EPSILON, sprite_rotation};

/// Logical sprite identifiers resolved by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Missile1,
    Missile2,
    Missile3,
    Airplane,
}

impl SpriteId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::Missile1 => "missile1",
            SpriteId::Missile2 => "missile2",
            SpriteId::Missile3 => "missile3",
            SpriteId::Airplane => "airplane",
        }
    }
}

/// Missile variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileKind {
    /// Standard homing missile
    Missile,
    /// Same steering, faster
    Fast,
    /// Aimed once at spawn, then flies straight forever
    Directed,
    /// Homing toward a laterally wobbling aim point
    Drunk,
    /// Slow, short-lived, agile wobbler
    Mini,
}

/// Per-variant motion parameters (per-tick units at 60 Hz)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileTuning {
    /// Velocity magnitude in pixels per tick
    pub translation_speed: f32,
    /// Max turn per tick in degrees (`None` = never turns)
    pub rotation_speed: Option<f32>,
    pub lifetime: Lifetime,
    pub sprite: SpriteId,
}

impl MissileKind {
    pub fn tuning(&self) -> MissileTuning {
        match self {
            MissileKind::Missile => MissileTuning {
                translation_speed: 7.0,
                rotation_speed: Some(1.5),
                lifetime: Lifetime::Ticks(1800),
                sprite: SpriteId::Missile1,
            },
            MissileKind::Fast => MissileTuning {
                translation_speed: 9.0,
                rotation_speed: Some(1.5),
                lifetime: Lifetime::Ticks(1800),
                sprite: SpriteId::Missile1,
            },
            MissileKind::Directed => MissileTuning {
                translation_speed: 12.0,
                rotation_speed: None,
                lifetime: Lifetime::Infinite,
                sprite: SpriteId::Missile2,
            },
            MissileKind::Drunk => MissileTuning {
                translation_speed: 10.0,
                rotation_speed: Some(2.0),
                lifetime: Lifetime::Ticks(1800),
                sprite: SpriteId::Missile3,
            },
            MissileKind::Mini => MissileTuning {
                translation_speed: 3.0,
                rotation_speed: Some(3.0),
                lifetime: Lifetime::Ticks(600),
                sprite: SpriteId::Missile2,
            },
        }
    }
}

/// Wobble angular frequency divisor: `sin(age / WOBBLE_PERIOD_DIVISOR)`
pub const WOBBLE_PERIOD_DIVISOR: f32 = 10.0;
/// Wobble amplitude as a fraction of the distance to target
pub const WOBBLE_AMPLITUDE: f32 = 0.5;

/// Lateral aim offset for wobbling missiles
///
/// Perpendicular to `to_target` (rotated +90°), scaled by half the distance
/// and `sin(age / 10)`. Zero when the target sits on the missile.
pub fn wobble_offset(to_target: Vec2, age_ticks: u32) -> Vec2 {
    let distance = to_target.length();
    if distance < EPSILON {
        return Vec2::ZERO;
    }
    let phase = (age_ticks as f32 / WOBBLE_PERIOD_DIVISOR).sin();
    to_target.perp().normalize_or_zero() * WOBBLE_AMPLITUDE * distance * phase
}

/// A live missile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub id: u32,
    pub kind: MissileKind,
    pub body: Kinematics,
}

impl Missile {
    /// Spawn at `position` heading `heading` degrees
    pub fn new(id: u32, kind: MissileKind, position: Vec2, heading: f32) -> Self {
        let tuning = kind.tuning();
        Self {
            id,
            kind,
            body: Kinematics::new(
                position,
                heading,
                tuning.translation_speed,
                tuning.rotation_speed,
                tuning.lifetime,
            ),
        }
    }

    /// Directed missile aimed at `target` as of spawn time
    ///
    /// Falls back to `heading` when `target` coincides with `position`.
    pub fn directed(id: u32, position: Vec2, heading: f32, target: Vec2) -> Self {
        let mut missile = Self::new(id, MissileKind::Directed, position, heading);
        missile.body.aim_at(target);
        missile
    }

    /// Advance one tick against the target's position and velocity
    ///
    /// Directed missiles only integrate; they neither turn nor age.
    pub fn advance(&mut self, target_position: Vec2, target_velocity: Vec2) {
        match self.kind {
            MissileKind::Directed => {
                self.body.integrate(target_velocity);
                return;
            }
            MissileKind::Missile | MissileKind::Fast => {
                let to_target = target_position - self.body.position;
                self.body.steer_toward(to_target);
            }
            MissileKind::Drunk | MissileKind::Mini => {
                let to_target = target_position - self.body.position;
                let aim = to_target + wobble_offset(to_target, self.body.age_ticks);
                self.body.steer_toward(aim);
            }
        }
        self.body.integrate(target_velocity);
        self.body.age();
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn sprite(&self) -> SpriteId {
        self.kind.tuning().sprite
    }

    /// Screen rotation for drawing (nose along velocity)
    pub fn rotation_degrees(&self) -> f32 {
        sprite_rotation(self.body.heading())
    }
}
