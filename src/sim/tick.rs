//! Fixed timestep simulation tick
//!
//! Per-tick order: ability timers, jump intent, kinematics + collision,
//! scoring, frontier-driven generation, world scroll, pruning, power-up
//! collection, difficulty ramp, terminal condition. All work completes
//! synchronously before the tick returns; there is no mid-tick observable
//! state.

use super::collision::resolve_body_move;
use super::state::{RunPhase, RunState};
use super::terrain::{Anchor, PowerUp, TerrainEntity, place_next};
use crate::consts::*;

/// Input intents for a single tick.
///
/// Movement and fly intents are level-triggered snapshots of held keys;
/// `jump_pressed` is an edge-triggered pulse so a held key cannot
/// double-count jumps.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fly_up: bool,
    pub fly_down: bool,
    pub jump_pressed: bool,
}

/// Advance the run by one fixed tick
pub fn tick(state: &mut RunState, input: &TickInput) {
    if state.phase == RunPhase::Ended {
        return;
    }
    state.time_ticks += 1;

    state.body.tick_ability_timers();

    if input.jump_pressed && state.body.jump(&state.tuning) {
        state.jumps_made += 1;
    }

    state.body.integrate(input, &state.tuning);
    resolve_body_move(&mut state.body, &state.terrain, state.scroll_speed);

    state.score += state.scroll_speed as u64;

    generate_terrain(state);

    // Scroll the world leftward
    for t in &mut state.terrain {
        t.rect.x -= state.scroll_speed;
    }
    for p in &mut state.powerups {
        p.rect.x -= state.scroll_speed;
    }

    // Prune terrain behind the view and recompute the frontier from survivors
    state.terrain.retain(|t| t.rect.right() >= PRUNE_X);
    state.frontier = state
        .terrain
        .iter()
        .map(|t| t.rect.right())
        .fold(0.0, f32::max);

    // A power-up whose owning floor is gone goes with it
    let terrain = &state.terrain;
    state
        .powerups
        .retain(|p| terrain.iter().any(|t| t.id == p.terrain_id));

    // Collect overlapped power-ups; each grants one flight activation
    let body_rect = state.body.rect;
    let mut collected = false;
    state.powerups.retain(|p| {
        if body_rect.overlaps(&p.rect) {
            collected = true;
            false
        } else {
            true
        }
    });
    if collected {
        state
            .body
            .activate_flight(state.tuning.flight_duration_ticks);
        log::debug!("flight activated at tick {}", state.time_ticks);
    }

    state.scroll_speed += state.tuning.scroll_speed_increment;

    // Terminal condition: pushed off the left edge or fell below the view
    if state.body.rect.right() < 0.0 || state.body.rect.top() > VIEW_HEIGHT {
        state.phase = RunPhase::Ended;
        log::info!(
            "run ended at tick {}: score={} jumps={} scroll_speed={:.2}",
            state.time_ticks,
            state.score,
            state.jumps_made,
            state.scroll_speed
        );
    }
}

/// Generate terrain until the frontier is at least two viewport widths out.
///
/// Kept as an explicit bounded loop: every emitted floor becomes the next
/// anchor and strictly advances the frontier, so the loop terminates.
fn generate_terrain(state: &mut RunState) {
    while state.frontier < GENERATION_LOOKAHEAD {
        let anchor = Anchor::select(&state.terrain, state.frontier);
        let placement = place_next(&anchor, &mut state.rng, &state.tuning);

        let terrain_id = state.next_entity_id();
        state.frontier = state.frontier.max(placement.rect.right());
        state.terrain.push(TerrainEntity {
            id: terrain_id,
            kind: placement.kind,
            rect: placement.rect,
        });

        if let Some(rect) = placement.powerup {
            let id = state.next_entity_id();
            state.powerups.push(PowerUp {
                id,
                terrain_id,
                rect,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::tuning::Tuning;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    /// Tuning with the world scroll frozen, for physics-only scenarios
    fn static_world_tuning() -> Tuning {
        Tuning {
            initial_scroll_speed: 0.0,
            scroll_speed_increment: 0.0,
            ..Tuning::default()
        }
    }

    fn assert_no_terrain_overlap(state: &RunState) {
        for t in &state.terrain {
            assert!(
                !state.body.rect.overlaps(&t.rect),
                "player overlaps terrain {} after tick {}",
                t.id,
                state.time_ticks
            );
        }
    }

    #[test]
    fn test_idle_player_settles_onto_initial_floor() {
        let mut state = RunState::with_tuning(42, static_world_tuning());
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
            assert_no_terrain_overlap(&state);
        }
        assert!(state.body.grounded);
        assert_eq!(state.body.rect.bottom(), VIEW_HEIGHT - FLOOR_HEIGHT);
    }

    #[test]
    fn test_no_overlap_under_random_input() {
        let mut state = RunState::new(1234);
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..2000 {
            if state.phase == RunPhase::Ended {
                break;
            }
            let input = TickInput {
                move_left: rng.random::<f32>() < 0.2,
                move_right: rng.random::<f32>() < 0.5,
                fly_up: rng.random::<f32>() < 0.3,
                fly_down: rng.random::<f32>() < 0.1,
                jump_pressed: rng.random::<f32>() < 0.15,
            };
            tick(&mut state, &input);
            assert_no_terrain_overlap(&state);
        }
    }

    #[test]
    fn test_scroll_speed_strictly_increases() {
        let mut state = RunState::new(7);
        let mut last = state.scroll_speed;
        for _ in 0..200 {
            if state.phase == RunPhase::Ended {
                break;
            }
            tick(&mut state, &TickInput::default());
            assert!(state.scroll_speed > last);
            last = state.scroll_speed;
        }
    }

    #[test]
    fn test_frontier_covers_every_live_edge() {
        let mut state = RunState::new(7);
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
            for t in &state.terrain {
                assert!(state.frontier >= t.rect.right());
                assert!(t.rect.right() >= PRUNE_X);
            }
            assert!(state.frontier >= GENERATION_LOOKAHEAD - state.scroll_speed);
        }
    }

    #[test]
    fn test_idle_run_scenario() {
        // No input: the player rides the floor leftward with the scroll and
        // is eventually pushed off the left edge.
        let mut state = RunState::new(5);
        let mut expected_score = 0u64;
        let mut expected_speed = state.scroll_speed;
        for _ in 0..1000 {
            if state.phase == RunPhase::Ended {
                break;
            }
            expected_score += expected_speed as u64;
            expected_speed += state.tuning.scroll_speed_increment;
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, RunPhase::Ended);
        assert_eq!(state.score, expected_score);
        assert!((state.scroll_speed - expected_speed).abs() < 1e-3);
    }

    #[test]
    fn test_jump_apex_and_landing_bounded() {
        let mut state = RunState::with_tuning(42, static_world_tuning());
        // Settle onto the floor
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.body.grounded);

        let jump = TickInput {
            jump_pressed: true,
            ..TickInput::default()
        };
        tick(&mut state, &jump);
        assert_eq!(state.jumps_made, 1);
        assert!(!state.body.grounded);

        // Rising phase ends near tick ceil(16 / 0.7) ~= 23
        let mut apex_tick = 0u32;
        let mut landed_tick = 0u32;
        for i in 1..120u32 {
            tick(&mut state, &TickInput::default());
            if apex_tick == 0 && state.body.vel.y >= 0.0 {
                apex_tick = i;
            }
            if state.body.grounded {
                landed_tick = i;
                break;
            }
        }
        assert!((20..=26).contains(&apex_tick), "apex at tick {apex_tick}");
        assert!(landed_tick > 0 && landed_tick <= 60, "landed at {landed_tick}");
        assert_eq!(state.body.rect.bottom(), VIEW_HEIGHT - FLOOR_HEIGHT);
    }

    #[test]
    fn test_powerup_collection_is_idempotent() {
        let mut state = RunState::with_tuning(42, static_world_tuning());
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }

        // Plant a power-up directly on the player
        let terrain_id = state.terrain[0].id;
        let id = state.next_entity_id();
        let rect = state.body.rect;
        state.powerups.push(PowerUp {
            id,
            terrain_id,
            rect,
        });

        tick(&mut state, &TickInput::default());
        assert!(state.body.ability.flying);
        assert!(state.powerups.is_empty());
        let remaining = state.body.ability.flight_ticks;

        // The destroyed power-up cannot re-trigger flight
        tick(&mut state, &TickInput::default());
        assert_eq!(state.body.ability.flight_ticks, remaining - 1);
    }

    #[test]
    fn test_orphaned_powerup_is_dropped() {
        let mut state = RunState::with_tuning(42, static_world_tuning());
        let id = state.next_entity_id();
        state.powerups.push(PowerUp {
            id,
            terrain_id: 9999,
            rect: Rect::new(5000.0, 0.0, POWERUP_SIZE, POWERUP_SIZE),
        });
        tick(&mut state, &TickInput::default());
        assert!(state.powerups.iter().all(|p| p.id != id));
    }

    #[test]
    fn test_fall_below_view_ends_run() {
        let mut state = RunState::with_tuning(42, static_world_tuning());
        state.body.rect.y = VIEW_HEIGHT + 1.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Ended);

        // Ended runs no longer advance
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_determinism_same_seed_same_inputs() {
        let mut a = RunState::new(777);
        let mut b = RunState::new(777);
        let input = TickInput {
            move_right: true,
            jump_pressed: true,
            ..TickInput::default()
        };
        for _ in 0..300 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.terrain.len(), b.terrain.len());
        assert_eq!(a.body.rect, b.body.rect);
    }
}
