//! Read-only render snapshot
//!
//! Everything a renderer needs for one frame, captured after a tick
//! completes. No core behavior depends on what a consumer does with it.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::RunState;
use super::terrain::TerrainKind;

/// Per-tick view of the run for external consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    pub player: Rect,
    pub flying: bool,
    pub terrain: Vec<(Rect, TerrainKind)>,
    pub powerups: Vec<Rect>,
    pub score: u64,
    pub jumps_made: u32,
    pub scroll_speed: f32,
    /// 0.0 = cooldown just started, 1.0 = double jump ready
    pub double_jump_ready_ratio: f32,
    /// 1.0 = flight just granted, 0.0 = expired (or inactive)
    pub flight_remaining_ratio: f32,
}

impl FrameView {
    /// Snapshot the current state. Must only be called between ticks.
    pub fn capture(state: &RunState) -> Self {
        let ability = &state.body.ability;
        let cooldown_total = state.tuning.double_jump_cooldown_ticks.max(1) as f32;
        let flight_total = state.tuning.flight_duration_ticks.max(1) as f32;
        Self {
            player: state.body.rect,
            flying: ability.flying,
            terrain: state.terrain.iter().map(|t| (t.rect, t.kind)).collect(),
            powerups: state.powerups.iter().map(|p| p.rect).collect(),
            score: state.score,
            jumps_made: state.jumps_made,
            scroll_speed: state.scroll_speed,
            double_jump_ready_ratio: (cooldown_total - ability.double_jump_cooldown as f32)
                / cooldown_total,
            flight_remaining_ratio: ability.flight_ticks as f32 / flight_total,
        }
    }
}
