//! Terrain entities and procedural placement
//!
//! The generator is a stateless-per-call procedure: given the rightmost
//! live floor (the anchor) and the tuning parameters, it emits the next
//! terrain rectangle at a gap that stays within the player's jump reach.
//! A larger vertical offset tightens the allowed horizontal gap, modeling
//! that diagonal jumps cover less net horizontal distance.
//!
//! The reachability bound uses the fixed jump/gravity constants and does
//! not compensate for the ever-increasing scroll speed; long runs get
//! effectively harder. That is intended balance, kept as-is.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Terrain flavor: floors are landed on, walls are jumped off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainKind {
    Floor,
    Wall,
}

/// An axis-aligned terrain obstacle, scrolled leftward each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainEntity {
    pub id: u32,
    pub kind: TerrainKind,
    pub rect: Rect,
}

/// A flight power-up hovering above its owning floor.
///
/// The owning floor is referenced by id, not held directly: when the floor
/// is pruned the lookup misses and the power-up is dropped with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub terrain_id: u32,
    pub rect: Rect,
}

/// The reference floor the next terrain entity is placed from
#[derive(Debug, Clone, Copy)]
pub struct Anchor {
    /// x of the anchor's right edge
    pub right: f32,
    /// y of the anchor's top edge
    pub y: f32,
    pub width: f32,
}

impl Anchor {
    /// Pick the live floor with the greatest right edge.
    ///
    /// Falls back to a synthesized default-width floor at the current
    /// frontier so the frontier can never be floor-less. The synthesized
    /// anchor is a reference value only and never enters the live set.
    pub fn select(terrain: &[TerrainEntity], frontier: f32) -> Anchor {
        terrain
            .iter()
            .filter(|t| t.kind == TerrainKind::Floor)
            .max_by(|a, b| a.rect.right().total_cmp(&b.rect.right()))
            .map(|t| Anchor {
                right: t.rect.right(),
                y: t.rect.top(),
                width: t.rect.w,
            })
            .unwrap_or(Anchor {
                right: frontier + FALLBACK_ANCHOR_WIDTH,
                y: TERRAIN_MAX_Y,
                width: FALLBACK_ANCHOR_WIDTH,
            })
    }
}

/// A placed terrain rectangle, before id assignment
#[derive(Debug, Clone)]
pub struct Placement {
    pub kind: TerrainKind,
    pub rect: Rect,
    /// Power-up rectangle attached above a floor, if one was rolled
    pub powerup: Option<Rect>,
}

/// Emit the next terrain entity after `anchor`.
///
/// The horizontal gap is sampled from [MIN_GAP, max_gap) where max_gap
/// shrinks with the sampled vertical offset and the anchor's own width,
/// floored at MIN_GAP + 1 so the sample range is never empty.
pub fn place_next<R: Rng + ?Sized>(anchor: &Anchor, rng: &mut R, tuning: &Tuning) -> Placement {
    let y_change = rng.random_range(-TERRAIN_Y_STEP..TERRAIN_Y_STEP) as f32;
    let adjusted_max_jump = tuning.max_jump_distance - y_change.abs() * 0.4;
    let max_gap = (adjusted_max_jump - anchor.width).max(tuning.min_gap as f32 + 1.0);
    let gap = rng.random_range(tuning.min_gap..max_gap as i32) as f32;

    let y = (anchor.y + y_change).clamp(TERRAIN_MIN_Y, TERRAIN_MAX_Y);
    let x = anchor.right + gap;

    let (kind, rect) = if rng.random::<f32>() < tuning.floor_chance {
        let w = rng.random_range(FLOOR_WIDTH_MIN..FLOOR_WIDTH_MAX) as f32;
        (TerrainKind::Floor, Rect::new(x, y, w, FLOOR_HEIGHT))
    } else {
        let h = rng.random_range(WALL_HEIGHT_MIN..WALL_HEIGHT_MAX) as f32;
        (TerrainKind::Wall, Rect::new(x, y, WALL_WIDTH, h))
    };

    let powerup = (kind == TerrainKind::Floor && rng.random::<f32>() < tuning.powerup_chance)
        .then(|| {
            Rect::new(
                rect.center_x() - POWERUP_SIZE / 2.0,
                rect.top() - POWERUP_CLEARANCE - POWERUP_SIZE,
                POWERUP_SIZE,
                POWERUP_SIZE,
            )
        });

    Placement { kind, rect, powerup }
}
