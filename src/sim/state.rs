//! Run state and entity ownership
//!
//! `RunState` owns everything the simulation mutates: the player body, the
//! live terrain and power-up tables, score, scroll speed and the seeded
//! RNG. It is single-writer (the tick loop); external readers take a
//! `FrameView` snapshot only between ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::rect::Rect;
use super::terrain::{PowerUp, TerrainEntity, TerrainKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Whether the run is still being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Running,
    /// Terminal condition reached (fell off-screen or crushed off the left)
    Ended,
}

/// Complete state of one run (deterministic for a given seed and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: RunPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulated distance units
    pub score: u64,
    pub jumps_made: u32,
    /// World scroll speed, monotonically increasing
    pub scroll_speed: f32,
    /// x of the rightmost live terrain edge; generation target
    pub frontier: f32,
    pub body: Body,
    pub terrain: Vec<TerrainEntity>,
    pub powerups: Vec<PowerUp>,
    pub tuning: Tuning,
    next_id: u32,
}

impl RunState {
    /// Create a run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a run with explicit tuning.
    ///
    /// The initial layout places one viewport-wide floor under the player,
    /// so no start is un-survivable before the first generated gap.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Running,
            time_ticks: 0,
            score: 0,
            jumps_made: 0,
            scroll_speed: tuning.initial_scroll_speed,
            frontier: 0.0,
            body: Body::spawn(),
            terrain: Vec::new(),
            powerups: Vec::new(),
            tuning,
            next_id: 1,
        };

        let id = state.next_entity_id();
        state.terrain.push(TerrainEntity {
            id,
            kind: TerrainKind::Floor,
            rect: Rect::new(0.0, VIEW_HEIGHT - FLOOR_HEIGHT, VIEW_WIDTH, FLOOR_HEIGHT),
        });
        state.frontier = VIEW_WIDTH;

        state
    }

    /// Allocate a new entity ID (unique within the run)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a live terrain entity by id
    pub fn terrain_by_id(&self, id: u32) -> Option<&TerrainEntity> {
        self.terrain.iter().find(|t| t.id == id)
    }
}
