//! Fixed timestep simulation tick
//!
//! One call is one frame at the fixed tick rate.

use super::player::KeyEvent;
use super::state::SimState;

/// Input collected by the frame driver since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional key transitions in arrival order
    pub keys: Vec<KeyEvent>,
}

/// Advance the simulation by one tick
///
/// Missiles steer against the player's position and velocity as they were
/// at the start of the tick; the player turns afterwards.
pub fn tick(state: &mut SimState, input: &TickInput) {
    for &event in &input.keys {
        state.controls.apply(event);
    }

    state.time_ticks += 1;

    let target_pos = state.player.position;
    let target_vel = state.player.velocity;
    for missile in &mut state.missiles {
        missile.advance(target_pos, target_vel);
    }

    // Remove after the pass so the iteration never sees a shrinking list
    let before = state.missiles.len();
    state.missiles.retain(|m| {
        if !m.is_alive() {
            log::debug!("{:?} #{} expired at age {}", m.kind, m.id, m.body.age_ticks);
        }
        m.is_alive()
    });
    let expired = before - state.missiles.len();
    if expired > 0 {
        log::trace!("tick {}: {} missiles expired", state.time_ticks, expired);
    }

    let heading = state.controls.heading();
    state.player.advance(heading);

    state.ensure_population();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::missile::{Missile, MissileKind};
    use crate::sim::player::{Heading, Key};
    use glam::Vec2;

    fn empty_state() -> SimState {
        let settings = Settings {
            seed: 12345,
            level: 0,
            ..Default::default()
        };
        let mut state = SimState::new(&settings);
        state.missiles.clear();
        state
    }

    #[test]
    fn test_tick_applies_keys_then_turns_player() {
        let mut state = empty_state();
        let input = TickInput {
            keys: vec![KeyEvent::Down(Key::Left)],
        };
        tick(&mut state, &input);
        assert_eq!(state.controls.heading(), Heading::Left);
        assert!((state.player.heading_degrees() - (-93.0)).abs() < 1e-3);
        assert_eq!(state.time_ticks, 1);

        // Held key keeps turning with no new events
        tick(&mut state, &TickInput::default());
        assert!((state.player.heading_degrees() - (-96.0)).abs() < 1e-3);
    }

    #[test]
    fn test_missiles_use_pre_turn_player_velocity() {
        let mut state = empty_state();
        let start_vel = state.player.velocity;
        state
            .missiles
            .push(Missile::directed(1000, Vec2::ZERO, 0.0, Vec2::new(100.0, 0.0)));
        let missile_vel = state.missiles[0].velocity();

        let input = TickInput {
            keys: vec![KeyEvent::Down(Key::Right)],
        };
        tick(&mut state, &input);
        let expected = missile_vel - start_vel;
        assert!((state.missiles[0].position() - expected).length() < 1e-4);
    }

    #[test]
    fn test_expired_missiles_are_removed() {
        let mut state = empty_state();
        let mut mini = Missile::new(1000, MissileKind::Mini, Vec2::ZERO, 0.0);
        mini.body.age_ticks = 598;
        state.missiles.push(mini);
        let alive = |state: &SimState| state.missiles.iter().any(|m| m.id == 1000);

        tick(&mut state, &TickInput::default());
        assert!(alive(&state));
        tick(&mut state, &TickInput::default());
        assert!(!alive(&state));
    }

    #[test]
    fn test_population_topped_up_each_tick() {
        let settings = Settings {
            seed: 77,
            level: 6,
            ..Default::default()
        };
        let mut state = SimState::new(&settings);
        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
            // At least the smaller of the two mode targets after every top-up
            assert!(state.missiles.len() >= 3);
        }
    }

    #[test]
    fn test_determinism() {
        let settings = Settings {
            seed: 99999,
            level: 8,
            ..Default::default()
        };
        let mut state1 = SimState::new(&settings);
        let mut state2 = SimState::new(&settings);

        let inputs = [
            TickInput {
                keys: vec![KeyEvent::Down(Key::Left)],
            },
            TickInput::default(),
            TickInput {
                keys: vec![KeyEvent::Up(Key::Left), KeyEvent::Down(Key::Right)],
            },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.missiles.len(), state2.missiles.len());
        for (a, b) in state1.missiles.iter().zip(&state2.missiles) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.position(), b.position());
        }
        assert_eq!(state1.player, state2.player);
    }
}
