//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod rect;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod view;

pub use body::Body;
pub use collision::resolve_body_move;
pub use rect::Rect;
pub use state::{RunPhase, RunState};
pub use terrain::{Anchor, PowerUp, TerrainEntity, TerrainKind};
pub use tick::{TickInput, tick};
pub use view::FrameView;
