//! Wildbreak - a walled-arena ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Play-session facade (state machine, frame clock, snapshots)
//! - `skins`: Cosmetic target skins (seeded, physics-neutral)

pub mod session;
pub mod sim;
pub mod skins;

pub use session::{SceneSnapshot, Session};
pub use skins::TargetSkin;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f64 = 400.0;
    pub const ARENA_HEIGHT: f64 = 600.0;
    /// Thickness of the logical wall strips sitting just outside each edge
    pub const WALL_THICKNESS: f64 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 8.0;
    /// Initial velocity in pixels per nanosecond (down and to the right)
    pub const BALL_INITIAL_VX: f64 = 1e-7;
    pub const BALL_INITIAL_VY: f64 = 1e-7;
    /// Post-reflection position nudge along the reflected axis; keeps
    /// floating-point residual overlap from re-triggering the same boundary
    /// on the next tick
    pub const BOUNCE_NUDGE: f64 = 2.0;
    /// Speed multiplier applied once per destroyed target (uncapped)
    pub const SPEED_UP_FACTOR: f64 = 1.05;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 5.0;
    /// Vertical home of the paddle center, as a fraction of arena height
    pub const PADDLE_INITIAL_Y_FRAC: f64 = 0.8;
    /// Vertical travel limits for the paddle center
    pub const PADDLE_MIN_Y_FRAC: f64 = 0.7;
    pub const PADDLE_MAX_Y_FRAC: f64 = 0.9;

    /// Lives per session
    pub const STARTING_LIVES: u32 = 5;

    /// Target grid: one target per cell, rows outer / columns inner
    pub const TARGET_GRID_START_X: f64 = 50.0;
    pub const TARGET_GRID_END_X: f64 = 350.0;
    pub const TARGET_GRID_STEP_X: f64 = 100.0;
    pub const TARGET_GRID_START_Y: f64 = 60.0;
    pub const TARGET_GRID_END_Y: f64 = 160.0;
    pub const TARGET_GRID_STEP_Y: f64 = 50.0;
    /// Target cell dimensions
    pub const TARGET_WIDTH: f64 = 60.0;
    pub const TARGET_HEIGHT: f64 = 30.0;
    /// Thickness of the per-edge strips used for target collision tests
    pub const TARGET_EDGE_STRIP: f64 = 2.0;
}
