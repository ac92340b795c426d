//! Food and obstacle placement.
//!
//! Candidates are drawn uniformly from the grid interior (the one-cell border
//! is never used) and rejected while they land on an occupied cell. Each
//! placement gets a fixed budget of draws; running out is reported as
//! [`GameError::SpawnExhausted`] instead of spinning forever on a full grid.

use rand::Rng;

use super::types::{Grid, Obstacle, ObstacleSet, Position, SnakeState};
use crate::core::constants::MAX_OBSTACLES;
use crate::core::error::{GameError, Result};

/// Draw one uniformly random interior cell.
fn random_interior_cell<R: Rng>(grid: &Grid, rng: &mut R) -> Position {
    Position {
        x: rng.gen_range(1..grid.width - 1),
        y: rng.gen_range(1..grid.height - 1),
    }
}

/// Rejection-sample an interior cell for which `blocked` is false.
fn sample_free_cell<R, F>(
    grid: &Grid,
    budget: u32,
    what: &'static str,
    rng: &mut R,
    blocked: F,
) -> Result<Position>
where
    R: Rng,
    F: Fn(Position) -> bool,
{
    for attempt in 1..=budget {
        let candidate = random_interior_cell(grid, rng);
        if !blocked(candidate) {
            if attempt > 1 {
                log::trace!("Placed {} at {:?} after {} draws", what, candidate, attempt);
            }
            return Ok(candidate);
        }
    }
    Err(GameError::SpawnExhausted {
        what,
        attempts: budget,
    })
}

/// Pick a food cell that is clear of the snake and every active obstacle.
pub fn place_food<R: Rng>(
    grid: &Grid,
    snake: &SnakeState,
    obstacles: &ObstacleSet,
    budget: u32,
    rng: &mut R,
) -> Result<Position> {
    sample_free_cell(grid, budget, "food", rng, |pos| {
        snake.occupies(pos) || obstacles.blocks(pos)
    })
}

/// Place `count` obstacles clear of the snake, the food and each other.
///
/// Slots past `count` stay inactive.
pub fn place_obstacles<R: Rng>(
    count: usize,
    grid: &Grid,
    snake: &SnakeState,
    food: Position,
    budget: u32,
    rng: &mut R,
) -> Result<ObstacleSet> {
    let mut set = ObstacleSet::default();
    for i in 0..count.min(MAX_OBSTACLES) {
        let position = sample_free_cell(grid, budget, "obstacle", rng, |pos| {
            pos == food || snake.occupies(pos) || set.blocks(pos)
        })?;
        set.slots[i] = Obstacle {
            position,
            active: true,
        };
    }
    Ok(set)
}
