//! The session loop and the two collaborators it talks to.
//!
//! One thread owns the session. Each pass drains pending input, runs one
//! simulation step, hands a snapshot to the renderer, then idles for the
//! current tick interval. Quit and return-to-menu are seen at the next drain;
//! a tick is never interrupted.

use rand::Rng;
use std::io;
use std::time::Duration;

use super::config::GameConfig;
use super::error::Result;
use crate::snake::logic::{
    process_input, start_session, step, EndReason, GameInput, InputResult, StepOutcome,
};
use crate::snake::snapshot::Snapshot;
use crate::snake::types::Difficulty;

/// Source of player input.
pub trait InputSource {
    /// Return every input that arrived since the last call. Must not block.
    fn poll_inputs(&mut self) -> io::Result<Vec<GameInput>>;

    /// Wait out the gap between two ticks.
    fn idle(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Receives one snapshot per frame.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// How a session ended, for the menu and the best-score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub difficulty: Difficulty,
    pub score: u32,
    pub length: usize,
    /// `None` unless the session ran in lives mode.
    pub lives_left: Option<u32>,
    pub game_over: bool,
    pub ticks: u64,
    pub end_reason: EndReason,
}

/// Run one session until the player returns to the menu or quits.
///
/// A finished game keeps rendering its final frame until then.
pub fn run_session<R, I, S>(
    config: &GameConfig,
    rng: &mut R,
    input: &mut I,
    sink: &mut S,
) -> Result<SessionSummary>
where
    R: Rng,
    I: InputSource,
    S: RenderSink,
{
    let mut session = start_session(config, rng)?;
    sink.render(&Snapshot::capture(&session))?;

    let end_reason = 'session: loop {
        for event in input.poll_inputs()? {
            if let InputResult::End(reason) = process_input(&mut session, event) {
                break 'session reason;
            }
        }

        let outcome = step(&mut session, rng)?;
        if matches!(outcome, StepOutcome::GameOver { .. }) {
            log::info!(
                "{} session finished after {} ticks",
                session.difficulty,
                session.tick_count
            );
        }

        sink.render(&Snapshot::capture(&session))?;
        input.idle(Duration::from_millis(session.tick_interval_ms));
    };

    log::info!(
        "Leaving session ({:?}) with score {}",
        end_reason,
        session.score
    );

    Ok(SessionSummary {
        difficulty: session.difficulty,
        score: session.score,
        length: session.snake.len(),
        lives_left: session.lives_remaining(),
        game_over: session.is_game_over(),
        ticks: session.tick_count,
        end_reason,
    })
}
