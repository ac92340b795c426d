//! Snake game logic: session setup, input processing, the per-tick step,
//! collision handling and the speed curve.

use rand::Rng;

use super::spawner::{place_food, place_obstacles};
use super::types::*;
use crate::core::config::GameConfig;
use crate::core::constants::{MIN_TICK_INTERVAL_MS, RATCHET_SCORE_DIVISOR, RECOMPUTE_MS_PER_POINT};
use crate::core::error::Result;

/// UI-agnostic input actions during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Steer(Direction),
    TogglePause,
    ReturnToMenu,
    Quit,
}

/// Why a session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    ReturnToMenu,
    Quit,
}

/// Result of handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    End(EndReason),
}

/// What the head ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionCause {
    Wall,
    SelfBite,
    Obstacle,
}

impl CollisionCause {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Wall => "hit the wall",
            Self::SelfBite => "bit its own tail",
            Self::Obstacle => "crashed into an obstacle",
        }
    }
}

/// What one call to [`step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Paused or over; nothing moved.
    Skipped,
    Moved,
    /// Head landed on the food: grew by one and scored.
    Ate,
    /// Lives mode: a life was spent and the session paused.
    LifeLost { cause: CollisionCause, lives_left: u32 },
    GameOver { cause: CollisionCause },
}

/// Start a session: validate the config, spawn the snake, then the food,
/// then the obstacles.
pub fn start_session<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<SessionState> {
    config.validate()?;

    let grid = config.grid;
    let snake = SnakeState::spawn(&grid);
    let budget = config.spawn_attempt_budget;

    // Obstacles are not placed yet, so the food only has to dodge the snake.
    let food = place_food(&grid, &snake, &ObstacleSet::default(), budget, rng)?;
    let obstacles = place_obstacles(
        config.difficulty.obstacle_count(),
        &grid,
        &snake,
        food,
        budget,
        rng,
    )?;

    log::info!(
        "Session start: {} on {}x{}, {}, {} curve",
        config.difficulty,
        grid.width,
        grid.height,
        config.failure_policy.name(),
        config.speed_curve.name()
    );

    Ok(SessionState {
        grid,
        difficulty: config.difficulty,
        failure_policy: config.failure_policy,
        speed_curve: config.speed_curve,
        snake,
        pending_direction: None,
        food,
        obstacles,
        score: 0,
        lives: config.starting_lives,
        phase: Phase::Running,
        tick_interval_ms: config.difficulty.base_interval_ms(),
        tick_count: 0,
        spawn_attempt_budget: budget,
    })
}

/// Process player input.
///
/// Direction requests are not validated here: only the last one before a
/// step counts, and the step rejects a reversal against the heading it has
/// at that moment.
pub fn process_input(session: &mut SessionState, input: GameInput) -> InputResult {
    match input {
        GameInput::Steer(direction) => {
            if !session.is_game_over() {
                session.pending_direction = Some(direction);
            }
            InputResult::Continue
        }
        GameInput::TogglePause => {
            match session.phase {
                Phase::Running => {
                    session.phase = Phase::Paused;
                    log::debug!("Paused at score {}", session.score);
                }
                Phase::Paused => {
                    session.phase = Phase::Running;
                    log::debug!("Resumed");
                }
                Phase::GameOver => {}
            }
            InputResult::Continue
        }
        GameInput::ReturnToMenu => InputResult::End(EndReason::ReturnToMenu),
        GameInput::Quit => InputResult::End(EndReason::Quit),
    }
}

/// Advance the session by one tick.
///
/// Paused and finished sessions are left untouched. A pending direction held
/// while paused is applied on the first tick after resuming.
pub fn step<R: Rng>(session: &mut SessionState, rng: &mut R) -> Result<StepOutcome> {
    if session.phase != Phase::Running {
        return Ok(StepOutcome::Skipped);
    }

    session.tick_count += 1;

    if let Some(requested) = session.pending_direction.take() {
        if requested != session.snake.direction.opposite() {
            session.snake.direction = requested;
        }
    }

    let outcome = advance(session, rng)?;

    session.tick_interval_ms = next_interval(
        session.speed_curve,
        session.difficulty.base_interval_ms(),
        session.tick_interval_ms,
        session.score,
    );

    Ok(outcome)
}

/// Move the snake one cell and resolve what the head landed on.
fn advance<R: Rng>(session: &mut SessionState, rng: &mut R) -> Result<StepOutcome> {
    let length = session.snake.len();
    let new_head = session.snake.head().step(session.snake.direction);

    // Every segment shifts one slot toward the tail. The old tail stays at
    // index `length` until we know whether the snake grows this tick.
    session.snake.body.push_front(new_head);

    if !session.grid.contains(new_head) {
        return Ok(collide(session, CollisionCause::Wall));
    }

    if session
        .snake
        .body
        .iter()
        .take(length)
        .skip(1)
        .any(|&seg| seg == new_head)
    {
        return Ok(collide(session, CollisionCause::SelfBite));
    }

    if session.obstacles.blocks(new_head) {
        return Ok(collide(session, CollisionCause::Obstacle));
    }

    if new_head == session.food {
        // Keep the old tail: that is the growth.
        session.score += 1;
        debug_assert!(session.snake.len() <= session.grid.cell_count());
        session.food = place_food(
            &session.grid,
            &session.snake,
            &session.obstacles,
            session.spawn_attempt_budget,
            rng,
        )?;
        log::debug!(
            "Ate at {:?}: score {}, length {}, next food {:?}",
            new_head,
            session.score,
            session.snake.len(),
            session.food
        );
        return Ok(StepOutcome::Ate);
    }

    session.snake.body.pop_back();
    Ok(StepOutcome::Moved)
}

/// Apply the consequence of a collision.
///
/// The move that caused it is undone first, so the snake always rests on
/// in-bounds cells it actually occupied.
fn collide(session: &mut SessionState, cause: CollisionCause) -> StepOutcome {
    session.snake.body.pop_front();

    let fatal = match (cause, session.failure_policy) {
        (CollisionCause::SelfBite, _) => true,
        (_, FailurePolicy::InstantDeath) => true,
        (_, FailurePolicy::Lives) => {
            session.lives = session.lives.saturating_sub(1);
            session.lives == 0
        }
    };

    if fatal {
        session.phase = Phase::GameOver;
        log::info!(
            "Game over: snake {} with score {} (length {})",
            cause.describe(),
            session.score,
            session.snake.len()
        );
        StepOutcome::GameOver { cause }
    } else {
        session.phase = Phase::Paused;
        log::info!(
            "Life lost: snake {}, {} lives left",
            cause.describe(),
            session.lives
        );
        StepOutcome::LifeLost {
            cause,
            lives_left: session.lives,
        }
    }
}

/// Tick interval after a moving tick, never below the 50ms floor.
pub fn next_interval(curve: SpeedCurve, base_ms: u64, current_ms: u64, score: u32) -> u64 {
    let score = u64::from(score);
    let interval = match curve {
        SpeedCurve::Ratchet => current_ms.saturating_sub(score / RATCHET_SCORE_DIVISOR),
        SpeedCurve::Recompute => base_ms.saturating_sub(score * RECOMPUTE_MS_PER_POINT),
    };
    interval.max(MIN_TICK_INTERVAL_MS)
}
