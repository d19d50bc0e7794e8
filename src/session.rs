//! Play-session facade
//!
//! Owns the simulation state plus the two things the pure sim must not
//! know about: the frame-clock baseline and the event staging between the
//! presentation layer and the tick loop. Pointer and start events land
//! here at any time and are applied strictly between ticks, last write
//! wins. The presentation layer reads positions back through accessors or
//! a detached [`SceneSnapshot`], never through live references.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, Collider, GamePhase, GameState, TickInput, tick};
use crate::skins::TargetSkin;

/// One playthrough, from creation/restart to a terminal phase
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    input: TickInput,
    /// Baseline for `frame()`: the previous callback's timestamp. `None`
    /// until the first callback after (re)start, which is only used to
    /// establish the baseline and never integrated.
    last_timestamp: Option<f64>,
}

impl Session {
    /// Create a session in the `New` phase, waiting for a start trigger
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            input: TickInput::default(),
            last_timestamp: None,
        }
    }

    /// Start trigger from the presentation layer. No-op unless `New`.
    pub fn start(&mut self) {
        self.state.start();
        self.last_timestamp = None;
    }

    /// Reset everything for a fresh playthrough. No-op unless terminal.
    pub fn restart(&mut self) {
        self.state.restart();
        self.input = TickInput::default();
        self.last_timestamp = None;
    }

    /// Latest pointer position in arena coordinates; staged until the next
    /// tick, last write wins
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.input.pointer = Some(DVec2::new(x, y));
    }

    /// Advance the simulation by an explicit elapsed time in nanoseconds
    pub fn tick(&mut self, dt_nanos: f64) -> GamePhase {
        tick(&mut self.state, &self.input, dt_nanos)
    }

    /// Drive the session from a raw frame timestamp (nanoseconds). The
    /// first callback after (re)start only establishes the baseline;
    /// every later one ticks with the elapsed delta. A non-monotonic
    /// timestamp yields a zero-displacement tick.
    pub fn frame(&mut self, timestamp_nanos: f64) -> GamePhase {
        let phase = match self.last_timestamp {
            None => self.state.phase,
            Some(previous) => self.tick(timestamp_nanos - previous),
        };
        self.last_timestamp = Some(timestamp_nanos);
        phase
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn ball_position(&self) -> DVec2 {
        self.state.ball.pos
    }

    pub fn ball_radius(&self) -> f64 {
        self.state.ball.radius
    }

    pub fn paddle_position(&self) -> DVec2 {
        self.state.paddle.pos
    }

    /// Paddle size as (width, height)
    pub fn paddle_size(&self) -> DVec2 {
        DVec2::new(self.state.paddle.width, self.state.paddle.height)
    }

    /// Rectangles and skins of the targets still standing, in layout order
    pub fn alive_targets(&self) -> impl Iterator<Item = (Aabb, TargetSkin)> {
        self.state
            .targets
            .iter()
            .filter(|t| t.alive)
            .map(|t| (t.rect, t.skin))
    }

    /// Detached copy of everything the presentation layer needs for a frame
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            phase: self.state.phase,
            lives: self.state.lives,
            ball_pos: self.state.ball.pos,
            ball_radius: self.state.ball.radius,
            paddle: self.state.paddle.bounding_box(),
            targets: self
                .alive_targets()
                .map(|(rect, skin)| TargetSnapshot { rect, skin })
                .collect(),
        }
    }
}

/// A renderable view of one frame, decoupled from the live entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub phase: GamePhase,
    pub lives: u32,
    pub ball_pos: DVec2,
    pub ball_radius: f64,
    /// Paddle bounding box (the renderer draws the box, not the center)
    pub paddle: Aabb,
    pub targets: Vec<TargetSnapshot>,
}

/// One alive target as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSnapshot {
    pub rect: Aabb,
    pub skin: TargetSkin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const DT: f64 = 16_666_667.0;

    #[test]
    fn test_first_frame_only_sets_baseline() {
        let mut session = Session::new(3);
        session.start();
        let before = session.ball_position();

        // First callback: baseline only, no integration
        assert_eq!(session.frame(1_000_000.0), GamePhase::Active);
        assert_eq!(session.ball_position(), before);

        // Second callback advances by the elapsed delta
        assert_eq!(session.frame(1_000_000.0 + DT), GamePhase::Active);
        let vel = DVec2::new(BALL_INITIAL_VX, BALL_INITIAL_VY);
        assert_eq!(session.ball_position(), before + vel * DT);
    }

    #[test]
    fn test_non_monotonic_frame_is_zero_displacement() {
        let mut session = Session::new(3);
        session.start();
        session.frame(5_000_000.0);
        let pos = session.ball_position();
        session.frame(1_000_000.0);
        assert_eq!(session.ball_position(), pos);
    }

    #[test]
    fn test_restart_resets_the_baseline() {
        let mut session = Session::new(3);
        session.start();
        session.frame(1_000.0);
        session.frame(1_000.0 + DT);

        session.state.phase = GamePhase::Lost;
        session.state.lives = 0;
        session.restart();
        assert_eq!(session.phase(), GamePhase::New);
        assert_eq!(session.lives(), STARTING_LIVES);
        assert_eq!(session.alive_targets().count(), 12);
        session.start();

        // A stale timestamp from the previous run is not a delta source
        let before = session.ball_position();
        assert_eq!(session.frame(9e12), GamePhase::Active);
        assert_eq!(session.ball_position(), before);
    }

    #[test]
    fn test_pointer_is_last_write_wins() {
        let mut session = Session::new(3);
        session.start();
        session.pointer_moved(100.0, 480.0);
        session.pointer_moved(320.0, 520.0);
        session.tick(DT);
        assert_eq!(session.paddle_position(), DVec2::new(320.0, 520.0));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = Session::new(3);
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::New);
        assert_eq!(snap.lives, 5);
        assert_eq!(snap.ball_pos, DVec2::new(200.0, 300.0));
        assert_eq!(snap.ball_radius, 8.0);
        assert_eq!(snap.paddle.width(), 100.0);
        assert_eq!(snap.targets.len(), 12);

        // Snapshots drop destroyed targets
        session.state.targets[0].destroy();
        assert_eq!(session.snapshot().targets.len(), 11);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let session = Session::new(3);
        let snap = session.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.targets.len(), snap.targets.len());
        assert_eq!(back.ball_pos, snap.ball_pos);
        assert_eq!(back.phase, snap.phase);
    }
}
