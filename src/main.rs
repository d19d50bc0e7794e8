//! Wildbreak entry point
//!
//! Headless demo: drives a full session with a scripted paddle that
//! shadows the ball, then prints the final scene snapshot as JSON. This is
//! the same drive loop a renderer would run, minus the drawing.

use wildbreak::Session;
use wildbreak::consts::*;
use wildbreak::sim::GamePhase;

/// 60 Hz frame in nanoseconds
const FRAME_NS: f64 = 16_666_667.0;
/// Upper bound on demo length; the speed-up mechanic normally ends the
/// session long before this
const MAX_FRAMES: u64 = 10_000_000;

fn main() {
    env_logger::init();
    log::info!("wildbreak (headless) starting");

    let seed = 0xBA11;
    let mut session = Session::new(seed);
    session.start();

    let mut now = 0.0;
    let mut frames = 0u64;
    let mut phase = session.phase();

    while frames < MAX_FRAMES {
        // The scripted player: keep the paddle centered under the ball
        let ball = session.ball_position();
        session.pointer_moved(ball.x, PADDLE_INITIAL_Y_FRAC * ARENA_HEIGHT);

        phase = session.frame(now);
        now += FRAME_NS;
        frames += 1;

        if phase.is_terminal() {
            break;
        }
    }

    match phase {
        GamePhase::Won => log::info!("cleared the field in {frames} frames"),
        GamePhase::Lost => log::info!("ran out of lives after {frames} frames"),
        _ => log::warn!("gave up after {frames} frames without a terminal phase"),
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
