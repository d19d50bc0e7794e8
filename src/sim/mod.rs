//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally supplied timestep only
//! - Seeded RNG only (cosmetics never feed back into physics)
//! - Stable target iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, Collider};
pub use collision::{TargetEdge, WallContact, Walls, edge_strip, hit_edge};
pub use state::{Ball, GamePhase, GameState, Paddle, Target};
pub use tick::{TickInput, tick};
