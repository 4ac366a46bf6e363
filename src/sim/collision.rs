//! Axis-separated collision resolution
//!
//! Moves the player rectangle horizontally then vertically against the
//! live terrain set, pushing out of each overlap toward the crossed edge.
//! Resolution is exact position correction: no bounce, no restitution.
//! Terrain rectangles never overlap each other by generation construction,
//! so per-entity resolution order does not matter within a tick.
//!
//! Flight bypasses gravity but not collision: a flying player still cannot
//! pass through walls.

use super::body::Body;
use super::terrain::TerrainEntity;

/// Apply the body's displacement for this tick and resolve terrain
/// penetration, updating the grounded and wall-contact flags.
///
/// While grounded and not flying the body also receives the uniform
/// leftward scroll offset, so a standing player passively rides the world
/// scroll; airborne and flying players do not.
pub fn resolve_body_move(body: &mut Body, terrain: &[TerrainEntity], scroll_speed: f32) {
    // Horizontal pass
    let mut dx = body.vel.x;
    if body.grounded && !body.ability.flying {
        dx -= scroll_speed;
    }
    body.rect.x += dx;
    body.touching_wall_left = false;
    body.touching_wall_right = false;
    for t in terrain {
        if body.rect.overlaps(&t.rect) {
            if body.vel.x > 0.0 {
                body.rect.clamp_right_to(t.rect.left());
                body.touching_wall_right = true;
                body.vel.x = 0.0;
            } else if body.vel.x < 0.0 {
                body.rect.clamp_left_to(t.rect.right());
                body.touching_wall_left = true;
                body.vel.x = 0.0;
            }
        }
    }

    // Vertical pass
    body.rect.y += body.vel.y;
    body.grounded = false;
    for t in terrain {
        if body.rect.overlaps(&t.rect) {
            if body.vel.y > 0.0 {
                body.rect.clamp_bottom_to(t.rect.top());
                if !body.ability.flying {
                    body.grounded = true;
                    body.ability.can_double_jump = true;
                }
                body.vel.y = 0.0;
            } else if body.vel.y < 0.0 {
                body.rect.clamp_top_to(t.rect.bottom());
                body.vel.y = 0.0;
            }
        }
    }
}
