//! Parkour Runner - an endless side-scrolling platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collision, terrain generation)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Plain-text high score persistence

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick = one frame)
    pub const TICK_RATE: u32 = 60;

    /// Viewport dimensions (world units == view pixels, y grows downward)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Player rectangle dimensions
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Player spawn point (rectangle center)
    pub const PLAYER_SPAWN_X: f32 = VIEW_WIDTH / 4.0;
    pub const PLAYER_SPAWN_Y: f32 = VIEW_HEIGHT - 80.0;

    /// Terrain dimensions
    pub const FLOOR_HEIGHT: f32 = 40.0;
    pub const WALL_WIDTH: f32 = 40.0;
    pub const FLOOR_WIDTH_MIN: i32 = 100;
    pub const FLOOR_WIDTH_MAX: i32 = 200;
    pub const WALL_HEIGHT_MIN: i32 = 150;
    pub const WALL_HEIGHT_MAX: i32 = 300;

    /// Vertical placement bounds for generated terrain
    pub const TERRAIN_MIN_Y: f32 = 150.0;
    pub const TERRAIN_MAX_Y: f32 = VIEW_HEIGHT - FLOOR_HEIGHT;
    /// Vertical offset sampling half-range
    pub const TERRAIN_Y_STEP: i32 = 100;

    /// Generation frontier target: keep terrain placed this far ahead
    pub const GENERATION_LOOKAHEAD: f32 = VIEW_WIDTH * 2.0;
    /// Terrain whose right edge falls behind this x is pruned
    pub const PRUNE_X: f32 = -100.0;
    /// Synthesized anchor width when no live floor exists
    pub const FALLBACK_ANCHOR_WIDTH: f32 = 100.0;

    /// Power-up dimensions and clearance above its floor
    pub const POWERUP_SIZE: f32 = 30.0;
    pub const POWERUP_CLEARANCE: f32 = 5.0;
}
