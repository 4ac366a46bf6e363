//! Parkour Runner entry point
//!
//! Headless demo run: drives the simulation with a trivial autopilot until
//! the run ends, then reports the result and updates the high score file.
//! Rendering and input devices plug in at the `FrameView` / `TickInput`
//! interfaces.

use std::path::Path;

use parkour_runner::consts::TICK_RATE;
use parkour_runner::highscores;
use parkour_runner::sim::{FrameView, RunPhase, RunState, TickInput, tick};
use parkour_runner::Tuning;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let tuning = Tuning::load(Path::new("parkour_tuning.json"));
    let hs_path = Path::new(highscores::HIGHSCORE_FILE);
    let best = highscores::load(hs_path);
    log::info!("starting run: seed={seed} best={best}");

    let mut state = RunState::with_tuning(seed, tuning);

    // Cap the demo at one simulated hour
    let max_ticks = (60 * 60 * TICK_RATE) as u64;
    while state.phase == RunPhase::Running && state.time_ticks < max_ticks {
        // Hold right, jump off any contact, spend the double jump when
        // falling fast. Crude, but it exercises every subsystem.
        let body = &state.body;
        let input = TickInput {
            move_right: true,
            jump_pressed: body.grounded
                || body.touching_wall_left
                || body.touching_wall_right
                || body.vel.y > 8.0,
            ..TickInput::default()
        };
        tick(&mut state, &input);
    }

    let view = FrameView::capture(&state);
    println!(
        "distance {} (best {}), {} jumps, final scroll speed {:.2} after {} ticks",
        view.score / 10,
        best.max(view.score) / 10,
        view.jumps_made,
        view.scroll_speed,
        state.time_ticks
    );
    if highscores::record(hs_path, state.score) {
        println!("new high score!");
    }
}
