//! Player kinematics
//!
//! Integrates the player body under gravity, input acceleration and a
//! discrete drag friction model, independent of terrain. Collision against
//! terrain is handled separately in `collision`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// Jump/flight ability state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ability {
    /// One airborne double jump per ground (or wall) contact
    pub can_double_jump: bool,
    /// Shared cooldown throttling double-jump spam, in ticks
    pub double_jump_cooldown: u32,
    /// Flight overlay active (suppresses gravity and ground-scroll coupling)
    pub flying: bool,
    /// Remaining flight duration, in ticks
    pub flight_ticks: u32,
}

/// The player body: a fixed-size rectangle with velocity and contact flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    pub vel: Vec2,
    /// Resting on top of a terrain rectangle this tick
    pub grounded: bool,
    pub touching_wall_left: bool,
    pub touching_wall_right: bool,
    pub ability: Ability,
}

impl Body {
    /// Spawn the player at the standard start position
    pub fn spawn() -> Self {
        Self {
            rect: Rect::from_center(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            grounded: false,
            touching_wall_left: false,
            touching_wall_right: false,
            ability: Ability {
                can_double_jump: true,
                ..Ability::default()
            },
        }
    }

    /// Advance velocity by one tick of Euler integration.
    ///
    /// While flying, vertical velocity is set directly from the fly intents
    /// (no gravity); otherwise gravity accelerates the fall, clamped to
    /// terminal velocity so the collision sweep cannot tunnel.
    pub fn integrate(&mut self, input: &TickInput, tuning: &Tuning) {
        let mut acc = Vec2::ZERO;
        if input.move_left {
            acc.x -= tuning.player_accel;
        }
        if input.move_right {
            acc.x += tuning.player_accel;
        }

        if self.ability.flying {
            self.vel.y = 0.0;
            if input.fly_up {
                self.vel.y = -tuning.fly_speed;
            }
            if input.fly_down {
                self.vel.y = tuning.fly_speed;
            }
        } else {
            acc.y = tuning.gravity;
        }

        // Exponential decay toward zero, not a hard clamp
        acc.x += self.vel.x * tuning.player_friction;
        self.vel += acc;

        if !self.ability.flying && self.vel.y > tuning.terminal_fall_speed {
            self.vel.y = tuning.terminal_fall_speed;
        }
    }

    /// Attempt a jump. Returns whether an impulse was applied.
    ///
    /// Three-state model: grounded and wall contact always allow a jump and
    /// re-arm the double jump; otherwise one airborne double jump is
    /// available, gated by the shared cooldown. No-op while flying.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if self.ability.flying {
            return false;
        }
        if self.grounded || self.touching_wall_left || self.touching_wall_right {
            self.vel.y = tuning.jump_impulse;
            self.ability.can_double_jump = true;
            true
        } else if self.ability.can_double_jump && self.ability.double_jump_cooldown == 0 {
            self.vel.y = tuning.jump_impulse;
            self.ability.can_double_jump = false;
            self.ability.double_jump_cooldown = tuning.double_jump_cooldown_ticks;
            true
        } else {
            false
        }
    }

    /// Begin the timed flight overlay
    pub fn activate_flight(&mut self, duration_ticks: u32) {
        self.ability.flying = true;
        self.ability.flight_ticks = duration_ticks;
    }

    /// Decrement the double-jump cooldown and the flight timer
    pub fn tick_ability_timers(&mut self) {
        if self.ability.double_jump_cooldown > 0 {
            self.ability.double_jump_cooldown -= 1;
        }
        if self.ability.flying {
            self.ability.flight_ticks = self.ability.flight_ticks.saturating_sub(1);
            if self.ability.flight_ticks == 0 {
                self.ability.flying = false;
            }
        }
    }
}
