//! Data-driven game balance
//!
//! All physics and generation parameters in one serializable struct, so
//! balance can be adjusted from a JSON file without recompiling. Defaults
//! reproduce the shipped balance.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;

/// Balance parameters for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Horizontal input acceleration per tick
    pub player_accel: f32,
    /// Drag coefficient applied as `accel += vel.x * friction`; negative
    pub player_friction: f32,
    /// Downward acceleration per tick while not flying
    pub gravity: f32,
    /// Jump impulse (negative = upward)
    pub jump_impulse: f32,
    /// Vertical speed while flying
    pub fly_speed: f32,
    /// Fall speed clamp; prevents tunneling through thin terrain
    pub terminal_fall_speed: f32,
    pub initial_scroll_speed: f32,
    pub scroll_speed_increment: f32,
    /// Horizontal reach of a full jump at zero vertical offset
    pub max_jump_distance: f32,
    /// Minimum horizontal gap between consecutive terrain entities
    pub min_gap: i32,
    /// Probability that a generated entity is a floor (else a wall)
    pub floor_chance: f32,
    /// Probability that a generated floor carries a power-up
    pub powerup_chance: f32,
    pub double_jump_cooldown_ticks: u32,
    pub flight_duration_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_accel: 0.8,
            player_friction: -0.12,
            gravity: 0.7,
            jump_impulse: -16.0,
            fly_speed: 5.0,
            terminal_fall_speed: 15.0,
            initial_scroll_speed: 4.0,
            scroll_speed_increment: 0.005,
            max_jump_distance: 260.0,
            min_gap: 50,
            floor_chance: 0.75,
            powerup_chance: 0.1,
            double_jump_cooldown_ticks: TICK_RATE,
            flight_duration_ticks: 5 * TICK_RATE,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("invalid tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write tuning as pretty JSON; failures are logged, not propagated
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to write tuning {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize tuning: {err}"),
        }
    }
}
