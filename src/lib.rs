//! Missiles - dodge homing missiles in a fixed-size arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering laws, spawning, player control)
//! - `settings`: Data-driven configuration
//!
//! Angles at the API surface are in degrees, measured from +x toward +y
//! (clockwise on screen, since y grows downward).

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Spawn lattice: columns at `SPAWN_COLUMN_SPACING * 1..=SPAWN_COLUMNS`
    pub const SPAWN_COLUMNS: u32 = 9;
    pub const SPAWN_COLUMN_SPACING: f32 = 100.0;
    /// Spawn lattice row spacing (mostly offscreen)
    pub const SPAWN_ROW_SPACING: f32 = 800.0;

    /// Sprite art points "up", so a heading of 0° needs a -90° turn
    pub const SPRITE_NOSE_OFFSET: f32 = 90.0;

    /// Vectors shorter than this are treated as zero
    pub const EPSILON: f32 = 1e-4;
}

/// Normalize an angle to [-180, 180) degrees
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, degrees)
#[inline]
pub fn cartesian_to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), v.y.atan2(v.x).to_degrees())
}

/// Rotate a vector by `degrees` (positive = +x toward +y)
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Screen rotation for a sprite travelling along `heading` degrees
#[inline]
pub fn sprite_rotation(heading: f32) -> f32 {
    -heading - consts::SPRITE_NOSE_OFFSET
}
