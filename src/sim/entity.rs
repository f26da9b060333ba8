//! Kinematic state shared by the player craft and every missile

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{cartesian_to_polar, consts::EPSILON, polar_to_cartesian, rotate_degrees};

/// How long an entity may live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifetime {
    /// Destroyed once `age_ticks` reaches this many ticks
    Ticks(u32),
    /// Never expires
    Infinite,
}

impl Lifetime {
    /// True when an entity of this age must be removed
    pub fn expired(&self, age_ticks: u32) -> bool {
        match *self {
            Lifetime::Ticks(limit) => age_ticks >= limit,
            Lifetime::Infinite => false,
        }
    }
}

/// Position/velocity integrator with an age counter
///
/// `velocity` is a per-tick displacement, not per-second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Velocity magnitude set at construction
    pub translation_speed: f32,
    /// Max turn per tick in degrees; `None` for non-homing entities
    pub rotation_speed: Option<f32>,
    pub age_ticks: u32,
    pub lifetime: Lifetime,
    alive: bool,
}

impl Kinematics {
    /// Entity at `position` moving along `heading` degrees at `translation_speed`
    pub fn new(
        position: Vec2,
        heading: f32,
        translation_speed: f32,
        rotation_speed: Option<f32>,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            position,
            velocity: polar_to_cartesian(translation_speed, heading),
            translation_speed,
            rotation_speed,
            age_ticks: 0,
            lifetime,
            alive: true,
        }
    }

    /// Current heading in degrees (polar angle of velocity)
    pub fn heading(&self) -> f32 {
        cartesian_to_polar(self.velocity).1
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Turn one step toward `pursuit` (bang-bang: always full rate)
    ///
    /// Positive cross product of velocity and pursuit turns by `+rotation_speed`,
    /// anything else by `-rotation_speed`. No-op for non-homing entities.
    pub fn steer_toward(&mut self, pursuit: Vec2) {
        let Some(rate) = self.rotation_speed else {
            return;
        };
        let step = if self.velocity.perp_dot(pursuit) > 0.0 {
            rate
        } else {
            -rate
        };
        self.velocity = rotate_degrees(self.velocity, step);
    }

    /// Relative-motion integration: the target frame stays fixed on screen
    pub fn integrate(&mut self, target_velocity: Vec2) {
        self.position += self.velocity - target_velocity;
    }

    /// Count one tick of age and mark the entity dead once its lifetime is up
    pub fn age(&mut self) {
        self.age_ticks = self.age_ticks.saturating_add(1);
        if self.lifetime.expired(self.age_ticks) {
            self.alive = false;
        }
    }

    /// Re-aim velocity toward `point` keeping speed; unchanged if `point` is here
    pub fn aim_at(&mut self, point: Vec2) {
        let to_point = point - self.position;
        if to_point.length() > EPSILON {
            self.velocity = to_point.normalize() * self.translation_speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_boundary() {
        let mut k = Kinematics::new(Vec2::ZERO, 0.0, 1.0, None, Lifetime::Ticks(3));
        k.age();
        k.age();
        assert!(k.is_alive());
        assert_eq!(k.age_ticks, 2);
        k.age();
        assert_eq!(k.age_ticks, 3);
        assert!(!k.is_alive());
    }

    #[test]
    fn test_infinite_lifetime_never_expires() {
        let mut k = Kinematics::new(Vec2::ZERO, 0.0, 1.0, None, Lifetime::Infinite);
        for _ in 0..10_000 {
            k.age();
        }
        assert!(k.is_alive());
        assert_eq!(k.age_ticks, 10_000);
    }

    #[test]
    fn test_steer_without_rotation_speed_is_noop() {
        let mut k = Kinematics::new(Vec2::ZERO, 45.0, 12.0, None, Lifetime::Infinite);
        let before = k.velocity;
        k.steer_toward(Vec2::new(0.0, 100.0));
        assert_eq!(k.velocity, before);
    }

    #[test]
    fn test_steer_sign_follows_cross_product() {
        // Target below (+y) a missile heading +x: cross > 0, turn +rate
        let mut k = Kinematics::new(Vec2::ZERO, 0.0, 7.0, Some(1.5), Lifetime::Infinite);
        k.steer_toward(Vec2::new(10.0, 10.0));
        assert!((k.heading() - 1.5).abs() < 1e-3);

        // Target above (-y): cross < 0, turn -rate
        let mut k = Kinematics::new(Vec2::ZERO, 0.0, 7.0, Some(1.5), Lifetime::Infinite);
        k.steer_toward(Vec2::new(10.0, -10.0));
        assert!((k.heading() + 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_integrate_subtracts_target_velocity() {
        let mut k = Kinematics::new(Vec2::new(10.0, 10.0), 0.0, 5.0, None, Lifetime::Infinite);
        k.integrate(Vec2::new(2.0, 1.0));
        assert!((k.position - Vec2::new(13.0, 9.0)).length() < 1e-4);
    }

    #[test]
    fn test_aim_at_degenerate_keeps_velocity() {
        let mut k = Kinematics::new(Vec2::new(5.0, 5.0), 30.0, 12.0, None, Lifetime::Infinite);
        let before = k.velocity;
        k.aim_at(Vec2::new(5.0, 5.0));
        assert_eq!(k.velocity, before);

        k.aim_at(Vec2::new(5.0, 105.0));
        assert!((k.heading() - 90.0).abs() < 1e-3);
        assert!((k.velocity.length() - 12.0).abs() < 1e-4);
    }
}
