//! Missiles headless entry point
//!
//! Runs the simulation without a window: loads settings (optional JSON path
//! as the first argument), steers the plane with a scripted weave and logs a
//! summary. Windowed drivers call the same `tick` once per frame.

use missiles::Settings;
use missiles::sim::{Key, KeyEvent, SimState, TickInput, tick};

/// Ticks between scripted turn changes
const WEAVE_PERIOD: u64 = 90;

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    log::info!(
        "Missiles (headless) starting: {} ticks at {} Hz",
        settings.demo_ticks,
        settings.tick_rate
    );

    let mut state = SimState::new(&settings);
    let mut peak = state.missiles.len();

    for t in 0..settings.demo_ticks {
        let input = TickInput {
            keys: weave(t),
        };
        tick(&mut state, &input);
        peak = peak.max(state.missiles.len());

        if state.time_ticks % u64::from(settings.tick_rate.max(1)) == 0 {
            log::debug!(
                "t={} missiles={} heading={:.1}",
                state.time_ticks,
                state.missiles.len(),
                state.player.heading_degrees()
            );
        }
    }

    log::info!(
        "Finished after {} ticks ({:.1}s simulated): {} live missiles, peak {}",
        state.time_ticks,
        state.time_ticks as f64 * settings.tick_duration().as_secs_f64(),
        state.missiles.len(),
        peak
    );
}

/// Alternate holding left and right, with a straight stretch between
fn weave(t: u64) -> Vec<KeyEvent> {
    match (t % (WEAVE_PERIOD * 3), t / (WEAVE_PERIOD * 3) % 2) {
        (0, 0) => vec![KeyEvent::Down(Key::Left)],
        (0, _) => vec![KeyEvent::Down(Key::Right)],
        (p, 0) if p == WEAVE_PERIOD => vec![KeyEvent::Up(Key::Left)],
        (p, _) if p == WEAVE_PERIOD => vec![KeyEvent::Up(Key::Right)],
        _ => Vec::new(),
    }
}
