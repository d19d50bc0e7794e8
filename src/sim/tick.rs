//! Per-tick simulation step
//!
//! Advances one externally clocked timestep: wall/paddle resolution, then
//! target resolution, then integration, then phase derivation. Collision
//! checks deliberately run against the position produced by the previous
//! tick's integration (detect-then-integrate), one policy applied
//! uniformly.

use glam::DVec2;

use super::aabb::Collider;
use super::collision::{WallContact, hit_edge};
use super::state::{GamePhase, GameState};

/// Input events staged for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position in arena coordinates (last write wins)
    pub pointer: Option<DVec2>,
    /// Start trigger from the presentation layer
    pub start: bool,
}

/// Advance the game state by one timestep of `dt_nanos` nanoseconds.
/// Outside the `Active` phase this only applies input events; entity state
/// is never touched.
pub fn tick(state: &mut GameState, input: &TickInput, dt_nanos: f64) -> GamePhase {
    // Input events apply between physics steps. The pointer is ignored in
    // terminal phases so a finished session stays frozen until restart.
    if let Some(pointer) = input.pointer
        && !state.phase.is_terminal()
    {
        state.paddle.move_to(pointer);
    }
    if input.start {
        state.start();
    }

    if state.phase != GamePhase::Active {
        return state.phase;
    }

    state.time_ticks += 1;

    // 1. Wall/paddle resolution: first match wins, one axis per tick. The
    //    paddle is only consulted when no wall fired.
    match state.walls.classify(&state.ball.bounding_box()) {
        Some(WallContact::Left) | Some(WallContact::Right) => state.ball.reflect_x(),
        Some(WallContact::Top) => state.ball.reflect_y(),
        Some(WallContact::Bottom) => {
            state.ball.reflect_y();
            state.lives = state.lives.saturating_sub(1);
            log::info!("ball out the bottom, {} lives left", state.lives);
        }
        None => {
            if state.ball.collides_with(&state.paddle) {
                state.ball.reflect_y();
            }
        }
    }

    // 2. Win check: a tick entered with nothing left to hit is already won
    if state.alive_target_count() == 0 {
        state.phase = GamePhase::Won;
        log::info!("all targets cleared after {} ticks", state.time_ticks);
        return state.phase;
    }

    // 3. Target resolution, unconditional and in insertion order. Each
    //    target resolves through at most one edge; the ball box is
    //    re-read per target because a reflection nudges the position.
    let mut destroyed = 0u32;
    for target in state.targets.iter_mut().filter(|t| t.alive) {
        if let Some(edge) = hit_edge(&target.rect, &state.ball.bounding_box()) {
            if edge.reflects_y() {
                state.ball.reflect_y();
            } else {
                state.ball.reflect_x();
            }
            target.destroy();
            state.ball.increase_speed();
            destroyed += 1;
        }
    }
    if destroyed > 0 {
        let remaining = state.alive_target_count();
        log::debug!("{destroyed} target(s) down, {remaining} remain");
        if remaining == 0 {
            // The last target fell during this tick's resolution; report
            // the win before any integration happens.
            state.phase = GamePhase::Won;
            log::info!("all targets cleared after {} ticks", state.time_ticks);
            return state.phase;
        }
    }

    // 4. Integration, after detection
    state.ball.integrate(dt_nanos);

    // 5. Loss check
    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        log::info!("out of lives after {} ticks", state.time_ticks);
        return state.phase;
    }

    state.phase
}
