//! Player craft and directional input handling

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::missile::SpriteId;
use crate::{cartesian_to_polar, polar_to_cartesian, rotate_degrees, sprite_rotation};

/// Steering state derived from the held directional keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
    #[default]
    Forward,
}

/// Directional keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    fn heading(self) -> Heading {
        match self {
            Key::Left => Heading::Left,
            Key::Right => Heading::Right,
        }
    }
}

/// Raw key transition from the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Press-count state machine over `{Left, Right, Forward}`
///
/// Zero or two keys held means `Forward`. With exactly one key held the
/// heading is the most recently pressed key; releases never change it. So
/// pressing Left, then Right, then releasing Right reports `Right` even
/// though Left is the key still down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadingTracker {
    held: u8,
    last_pressed: Option<Key>,
}

impl HeadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Down(key) => {
                self.held = self.held.saturating_add(1);
                self.last_pressed = Some(key);
            }
            // Releases without a matching press (key held before focus) are ignored
            KeyEvent::Up(_) => self.held = self.held.saturating_sub(1),
        }
    }

    /// Number of directional keys currently counted as held
    pub fn held(&self) -> u8 {
        self.held
    }

    pub fn heading(&self) -> Heading {
        match (self.held, self.last_pressed) {
            (1, Some(key)) => key.heading(),
            _ => Heading::Forward,
        }
    }
}

/// The player's airplane
///
/// The craft is the fixed reference frame: its position stays put and the
/// missiles carry its inverse velocity instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCraft {
    pub position: Vec2,
    /// Per-tick velocity; only its direction changes
    pub velocity: Vec2,
    /// Heading change per tick while turning (degrees)
    pub turn_degrees: f32,
}

impl PlayerCraft {
    /// Craft at `position` flying up the screen at `speed` px/tick
    pub fn new(position: Vec2, speed: f32, turn_degrees: f32) -> Self {
        Self {
            position,
            velocity: polar_to_cartesian(speed, -90.0),
            turn_degrees,
        }
    }

    /// Apply one tick of steering
    ///
    /// Left turns counter-clockwise on screen, which is a negative angle
    /// because y grows downward.
    pub fn advance(&mut self, heading: Heading) {
        let step = match heading {
            Heading::Left => -self.turn_degrees,
            Heading::Right => self.turn_degrees,
            Heading::Forward => return,
        };
        self.velocity = rotate_degrees(self.velocity, step);
    }

    /// Polar angle of velocity in degrees
    pub fn heading_degrees(&self) -> f32 {
        cartesian_to_polar(self.velocity).1
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Airplane
    }

    pub fn rotation_degrees(&self) -> f32 {
        sprite_rotation(self.heading_degrees())
    }
}
