//! Read-only view of a session handed to the renderer each frame.

use super::types::{Difficulty, FailurePolicy, Grid, Position, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub difficulty: Difficulty,
    pub failure_policy: FailurePolicy,
    /// Head first.
    pub body: Vec<Position>,
    pub length: usize,
    pub food: Position,
    pub obstacles: Vec<Position>,
    pub score: u32,
    /// `None` unless the session runs in lives mode.
    pub lives: Option<u32>,
    pub paused: bool,
    pub game_over: bool,
    pub tick_interval_ms: u64,
    pub tick_count: u64,
}

impl Snapshot {
    pub fn capture(session: &SessionState) -> Self {
        Self {
            grid: session.grid,
            difficulty: session.difficulty,
            failure_policy: session.failure_policy,
            body: session.snake.body.iter().copied().collect(),
            length: session.snake.len(),
            food: session.food,
            obstacles: session.obstacles.active().collect(),
            score: session.score,
            lives: session.lives_remaining(),
            paused: session.is_paused(),
            game_over: session.is_game_over(),
            tick_interval_ms: session.tick_interval_ms,
            tick_count: session.tick_count,
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }
}
