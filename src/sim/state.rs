//! Game state and core simulation types
//!
//! All state a play session owns lives here. Entities are plain data with
//! total-function mutators; anything that can go wrong (non-finite input,
//! negative timesteps) is clamped at the boundary rather than propagated.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, Collider};
use super::collision::Walls;
use crate::consts::*;
use crate::skins::TargetSkin;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities exist but the simulation is not advancing yet
    New,
    /// Tick-driven simulation running
    Active,
    /// All targets cleared (terminal until restart)
    Won,
    /// Out of lives (terminal until restart)
    Lost,
}

impl GamePhase {
    /// Terminal phases wait for an explicit restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball: a point mass with a square bounding box
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: DVec2,
    /// Velocity in pixels per nanosecond
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    /// A ball at the arena center with the default launch velocity
    pub fn new() -> Self {
        Self {
            pos: DVec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            vel: DVec2::new(BALL_INITIAL_VX, BALL_INITIAL_VY),
            radius: BALL_RADIUS,
        }
    }

    /// Advance the position by `vel * dt`. Negative or non-finite
    /// timesteps produce zero displacement.
    pub fn integrate(&mut self, dt_nanos: f64) {
        if !dt_nanos.is_finite() || dt_nanos < 0.0 {
            return;
        }
        self.pos += self.vel * dt_nanos;
    }

    /// Bounce off a vertical surface: negate the horizontal velocity and
    /// nudge the position clear of the boundary
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
        self.pos.x += self.vel.x.signum() * BOUNCE_NUDGE;
    }

    /// Bounce off a horizontal surface: negate the vertical velocity and
    /// nudge the position clear of the boundary
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
        self.pos.y += self.vel.y.signum() * BOUNCE_NUDGE;
    }

    /// Escalating difficulty: called once per destroyed target. Uncapped.
    pub fn increase_speed(&mut self) {
        self.vel *= SPEED_UP_FACTOR;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Collider for Ball {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.pos, self.radius * 2.0, self.radius * 2.0)
    }
}

/// The player's paddle: a pure positional actuator, no velocity or momentum
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position, always inside the legal travel rectangle
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
}

impl Paddle {
    /// A paddle at its home pose (left edge flush, 80% down the arena)
    pub fn new() -> Self {
        Self {
            pos: DVec2::new(
                PADDLE_WIDTH / 2.0,
                PADDLE_INITIAL_Y_FRAC * ARENA_HEIGHT,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Re-center the paddle on `desired`, clamped so it stays fully inside
    /// the arena horizontally and within its vertical travel band.
    /// Non-finite components fall back to the current position. Idempotent.
    pub fn move_to(&mut self, desired: DVec2) {
        let x = if desired.x.is_finite() {
            desired.x
        } else {
            self.pos.x
        };
        let y = if desired.y.is_finite() {
            desired.y
        } else {
            self.pos.y
        };
        self.pos.x = x.clamp(self.width / 2.0, ARENA_WIDTH - self.width / 2.0);
        self.pos.y = y.clamp(
            PADDLE_MIN_Y_FRAC * ARENA_HEIGHT,
            PADDLE_MAX_Y_FRAC * ARENA_HEIGHT,
        );
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Collider for Paddle {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.pos, self.width, self.height)
    }
}

/// A destructible target cell
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub rect: Aabb,
    pub alive: bool,
    /// Presentation hint only, never consulted by physics
    pub skin: TargetSkin,
}

impl Target {
    pub fn new(center: DVec2, skin: TargetSkin) -> Self {
        Self {
            rect: Aabb::from_center(center, TARGET_WIDTH, TARGET_HEIGHT),
            alive: true,
            skin,
        }
    }

    /// Mark the target destroyed. Idempotent: returns true only on the
    /// transition, so a second hit can never double-count.
    pub fn destroy(&mut self) -> bool {
        let was_alive = self.alive;
        self.alive = false;
        was_alive
    }
}

impl Collider for Target {
    fn bounding_box(&self) -> Aabb {
        self.rect
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed, drives cosmetic skin assignment only
    pub seed: u64,
    pub phase: GamePhase,
    pub lives: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Insertion order is the collision-resolution order; never reordered
    pub targets: Vec<Target>,
    /// Static wall strips bounding the play field
    pub walls: Walls,
    /// Tick counter, diagnostic only
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session in the `New` phase
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::New,
            lives: STARTING_LIVES,
            ball: Ball::new(),
            paddle: Paddle::new(),
            targets: Vec::new(),
            walls: Walls::new(),
            time_ticks: 0,
        };
        state.populate_targets();
        state
    }

    /// Lay out the target grid: rows top to bottom, columns left to right,
    /// one target per cell, skins drawn from the session RNG
    fn populate_targets(&mut self) {
        let mut rng = Pcg32::seed_from_u64(self.seed);

        let cols = ((TARGET_GRID_END_X - TARGET_GRID_START_X) / TARGET_GRID_STEP_X).round() as u32;
        let rows = ((TARGET_GRID_END_Y - TARGET_GRID_START_Y) / TARGET_GRID_STEP_Y).round() as u32;

        self.targets.clear();
        for row in 0..=rows {
            let y = TARGET_GRID_START_Y + f64::from(row) * TARGET_GRID_STEP_Y;
            for col in 0..=cols {
                let x = TARGET_GRID_START_X + f64::from(col) * TARGET_GRID_STEP_X;
                let skin = TargetSkin::roll(&mut rng);
                self.targets.push(Target::new(DVec2::new(x, y), skin));
            }
        }
    }

    /// Targets still standing, in resolution order
    pub fn alive_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.alive)
    }

    pub fn alive_target_count(&self) -> usize {
        self.alive_targets().count()
    }

    /// Begin advancing the simulation. Only meaningful from `New`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::New {
            self.phase = GamePhase::Active;
            log::info!("session started, seed {}", self.seed);
        }
    }

    /// Reset every entity for a fresh playthrough. Only meaningful from a
    /// terminal phase; the target grid and skins repopulate exactly as at
    /// session creation.
    pub fn restart(&mut self) {
        if !self.phase.is_terminal() {
            return;
        }
        self.ball = Ball::new();
        self.paddle = Paddle::new();
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.populate_targets();
        self.phase = GamePhase::New;
        log::info!("session reset, {} targets up", self.targets.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ball_starts_centered() {
        let ball = Ball::new();
        assert_eq!(ball.pos, DVec2::new(200.0, 300.0));
        assert_eq!(ball.vel, DVec2::new(1e-7, 1e-7));
        assert_eq!(ball.radius, 8.0);
    }

    #[test]
    fn test_integrate_exact() {
        let mut ball = Ball::new();
        ball.pos = DVec2::new(100.0, 50.0);
        ball.vel = DVec2::new(2e-7, -1e-7);
        ball.integrate(1e9);
        // Same multiply-then-add sequence as the assertion, bitwise equal
        assert_eq!(ball.pos.x, 100.0 + 2e-7 * 1e9);
        assert_eq!(ball.pos.y, 50.0 + -1e-7 * 1e9);
    }

    #[test]
    fn test_integrate_rejects_bad_dt() {
        let mut ball = Ball::new();
        let before = ball.pos;
        ball.integrate(-16_000_000.0);
        assert_eq!(ball.pos, before);
        ball.integrate(f64::NAN);
        assert_eq!(ball.pos, before);
        ball.integrate(f64::INFINITY);
        assert_eq!(ball.pos, before);
        ball.integrate(0.0);
        assert_eq!(ball.pos, before);
    }

    #[test]
    fn test_reflect_x_involution() {
        let mut ball = Ball::new();
        ball.vel = DVec2::new(3e-7, 1e-7);
        let (pos, vel) = (ball.pos, ball.vel);
        ball.reflect_x();
        assert_eq!(ball.vel.x, -3e-7);
        ball.reflect_x();
        // Velocity and the two opposing nudges both cancel exactly
        assert_eq!(ball.vel, vel);
        assert_eq!(ball.pos, pos);
    }

    #[test]
    fn test_reflect_y_involution() {
        let mut ball = Ball::new();
        ball.vel = DVec2::new(1e-7, -2e-7);
        let (pos, vel) = (ball.pos, ball.vel);
        ball.reflect_y();
        assert_eq!(ball.vel.y, 2e-7);
        assert_eq!(ball.pos.y, pos.y + 2.0);
        ball.reflect_y();
        assert_eq!(ball.vel, vel);
        assert_eq!(ball.pos, pos);
    }

    #[test]
    fn test_increase_speed() {
        let mut ball = Ball::new();
        ball.vel = DVec2::new(2e-7, -2e-7);
        ball.increase_speed();
        assert_eq!(ball.vel.x, 2e-7 * 1.05);
        assert_eq!(ball.vel.y, -2e-7 * 1.05);
    }

    #[test]
    fn test_paddle_home_pose() {
        let paddle = Paddle::new();
        assert_eq!(paddle.pos, DVec2::new(50.0, 480.0));
        let bb = paddle.bounding_box();
        assert_eq!(bb.width(), 100.0);
        assert_eq!(bb.height(), 5.0);
    }

    #[test]
    fn test_paddle_clamps_non_finite() {
        let mut paddle = Paddle::new();
        paddle.move_to(DVec2::new(f64::NAN, f64::NEG_INFINITY));
        // NaN x falls back to the current x; -inf y clamps to the band floor
        assert_eq!(paddle.pos.x, 50.0);
        assert_eq!(paddle.pos.y, 420.0);
    }

    #[test]
    fn test_target_destroy_idempotent() {
        let mut target = Target::new(DVec2::new(50.0, 60.0), TargetSkin::Fox);
        assert!(target.destroy());
        assert!(!target.destroy());
        assert!(!target.alive);
    }

    #[test]
    fn test_grid_is_4x3() {
        let state = GameState::new(7);
        assert_eq!(state.targets.len(), 12);
        assert_eq!(state.alive_target_count(), 12);
        // First row spans the four column centers at y = 60
        let centers: Vec<DVec2> = state.targets[..4].iter().map(|t| t.rect.center()).collect();
        assert_eq!(
            centers,
            vec![
                DVec2::new(50.0, 60.0),
                DVec2::new(150.0, 60.0),
                DVec2::new(250.0, 60.0),
                DVec2::new(350.0, 60.0),
            ]
        );
        // Last target sits at the grid's far corner
        assert_eq!(state.targets[11].rect.center(), DVec2::new(350.0, 160.0));
    }

    #[test]
    fn test_grid_targets_do_not_overlap() {
        let state = GameState::new(7);
        for (i, a) in state.targets.iter().enumerate() {
            for b in &state.targets[i + 1..] {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }

    #[test]
    fn test_same_seed_same_skins() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        let skins_a: Vec<_> = a.targets.iter().map(|t| t.skin).collect();
        let skins_b: Vec<_> = b.targets.iter().map(|t| t.skin).collect();
        assert_eq!(skins_a, skins_b);
    }

    #[test]
    fn test_restart_only_from_terminal() {
        let mut state = GameState::new(1);
        state.start();
        state.ball.pos = DVec2::new(10.0, 10.0);
        state.restart();
        // Still mid-session: restart is a no-op
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.ball.pos, DVec2::new(10.0, 10.0));

        state.phase = GamePhase::Lost;
        state.lives = 0;
        state.targets[0].destroy();
        state.restart();
        assert_eq!(state.phase, GamePhase::New);
        assert_eq!(state.lives, 5);
        assert_eq!(state.ball.pos, DVec2::new(200.0, 300.0));
        assert_eq!(state.ball.vel, DVec2::new(1e-7, 1e-7));
        assert_eq!(state.paddle.pos, Paddle::new().pos);
        assert_eq!(state.alive_target_count(), 12);
    }

    proptest! {
        #[test]
        fn prop_paddle_always_in_bounds(x in prop::num::f64::ANY, y in prop::num::f64::ANY) {
            let mut paddle = Paddle::new();
            paddle.move_to(DVec2::new(x, y));
            prop_assert!(paddle.pos.x >= 50.0 && paddle.pos.x <= 350.0);
            prop_assert!(paddle.pos.y >= 420.0 && paddle.pos.y <= 540.0);
        }

        #[test]
        fn prop_integrate_is_exact(
            px in -1e6f64..1e6,
            py in -1e6f64..1e6,
            vx in -1e-3f64..1e-3,
            vy in -1e-3f64..1e-3,
            dt in 0f64..1e10,
        ) {
            let mut ball = Ball::new();
            ball.pos = DVec2::new(px, py);
            ball.vel = DVec2::new(vx, vy);
            ball.integrate(dt);
            prop_assert_eq!(ball.pos.x, px + vx * dt);
            prop_assert_eq!(ball.pos.y, py + vy * dt);
        }

        #[test]
        fn prop_reflect_twice_restores(vx in -1e-3f64..1e-3, vy in -1e-3f64..1e-3) {
            let mut ball = Ball::new();
            ball.vel = DVec2::new(vx, vy);
            let vel = ball.vel;
            ball.reflect_x();
            ball.reflect_x();
            ball.reflect_y();
            ball.reflect_y();
            prop_assert_eq!(ball.vel, vel);
        }
    }
}
