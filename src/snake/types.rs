//! Snake game data structures.
//!
//! Grid geometry, the snake itself, food, obstacles and the per-session
//! aggregate that the simulation step mutates.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::core::constants::{
    EASY_OBSTACLES, EASY_TICK_MS, HARD_OBSTACLES, HARD_TICK_MS, INITIAL_SNAKE_LENGTH,
    MAX_OBSTACLES, MEDIUM_OBSTACLES, MEDIUM_TICK_MS,
};

/// Difficulty levels, chosen once before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse a difficulty label. Accepts the French menu labels as well.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facile" => Some(Self::Easy),
            "medium" | "med" | "moyen" => Some(Self::Medium),
            "hard" | "difficile" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Number of obstacles placed at session start.
    pub fn obstacle_count(&self) -> usize {
        match self {
            Self::Easy => EASY_OBSTACLES,
            Self::Medium => MEDIUM_OBSTACLES,
            Self::Hard => HARD_OBSTACLES,
        }
    }

    /// Base tick interval in milliseconds (lower = faster).
    pub fn base_interval_ms(&self) -> u64 {
        match self {
            Self::Easy => EASY_TICK_MS,
            Self::Medium => MEDIUM_TICK_MS,
            Self::Hard => HARD_TICK_MS,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Up decreases y.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed play-field bounds in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// True if `pos` is inside the grid and not on the one-cell border.
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Cells available to the spawner (everything but the border ring).
    pub fn interior_cell_count(&self) -> usize {
        (self.width - 2).max(0) as usize * (self.height - 2).max(0) as usize
    }
}

/// The snake: ordered body (head first), and its heading.
///
/// `body.len()` is the live length and never exceeds the grid cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    pub body: VecDeque<Position>,
    pub direction: Direction,
}

#[allow(clippy::len_without_is_empty)]
impl SnakeState {
    /// A fresh snake with every segment stacked on `start`.
    ///
    /// The stacked segments unfold over the first ticks; the head always
    /// moves off the shared cell so the overlap never reads as a collision.
    pub fn new(start: Position, length: usize, direction: Direction) -> Self {
        Self {
            body: std::iter::repeat(start).take(length.max(1)).collect(),
            direction,
        }
    }

    pub fn spawn(grid: &Grid) -> Self {
        Self::new(grid.center(), INITIAL_SNAKE_LENGTH, Direction::Right)
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

/// A single obstacle slot. Only `active` slots block the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub position: Position,
    pub active: bool,
}

/// Obstacle slots, sized for the hardest difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSet {
    pub slots: [Obstacle; MAX_OBSTACLES],
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self {
            slots: [Obstacle {
                position: Position::new(0, 0),
                active: false,
            }; MAX_OBSTACLES],
        }
    }
}

impl ObstacleSet {
    pub fn active(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots.iter().filter(|o| o.active).map(|o| o.position)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    pub fn blocks(&self, pos: Position) -> bool {
        self.active().any(|p| p == pos)
    }
}

/// How boundary and obstacle contact is punished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Any wall or obstacle contact ends the session.
    #[default]
    InstantDeath,
    /// Wall or obstacle contact costs a life and pauses; zero lives ends it.
    Lives,
}

impl FailurePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "instant" | "instant-death" | "instantdeath" | "classic" => Some(Self::InstantDeath),
            "lives" | "retry" => Some(Self::Lives),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InstantDeath => "Instant death",
            Self::Lives => "Lives",
        }
    }
}

/// How the tick interval shrinks as the score grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedCurve {
    /// Every moving tick shaves `score / 5` ms off the running interval.
    /// The interval never grows back.
    #[default]
    Ratchet,
    /// Interval is `base - score * 5` ms, recomputed every tick.
    Recompute,
}

impl SpeedCurve {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ratchet" => Some(Self::Ratchet),
            "recompute" | "linear" => Some(Self::Recompute),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ratchet => "Ratchet",
            Self::Recompute => "Recompute",
        }
    }
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Everything that belongs to one playthrough.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub grid: Grid,
    pub difficulty: Difficulty,
    pub failure_policy: FailurePolicy,
    pub speed_curve: SpeedCurve,

    pub snake: SnakeState,
    /// Last direction requested this tick, applied (or rejected) by the step.
    pub pending_direction: Option<Direction>,
    pub food: Position,
    pub obstacles: ObstacleSet,

    pub score: u32,
    /// Remaining lives. Only consulted under [`FailurePolicy::Lives`].
    pub lives: u32,
    pub phase: Phase,

    /// Current delay between ticks in milliseconds.
    pub tick_interval_ms: u64,
    /// Total movement steps elapsed.
    pub tick_count: u64,
    /// Random draws the spawner may spend on one food placement.
    pub spawn_attempt_budget: u32,
}

impl SessionState {
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Lives left, or `None` when the session has no lives mechanic.
    pub fn lives_remaining(&self) -> Option<u32> {
        match self.failure_policy {
            FailurePolicy::Lives => Some(self.lives),
            FailurePolicy::InstantDeath => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_profiles() {
        assert_eq!(Difficulty::Easy.obstacle_count(), 0);
        assert_eq!(Difficulty::Easy.base_interval_ms(), 300);
        assert_eq!(Difficulty::Medium.obstacle_count(), 3);
        assert_eq!(Difficulty::Medium.base_interval_ms(), 250);
        assert_eq!(Difficulty::Hard.obstacle_count(), 6);
        assert_eq!(Difficulty::Hard.base_interval_ms(), 200);
    }

    #[test]
    fn test_max_obstacles_covers_every_difficulty() {
        for d in &Difficulty::ALL {
            assert!(d.obstacle_count() <= MAX_OBSTACLES);
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse(" moyen "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("difficile"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("nightmare"), None);
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(20, 10);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 9)));
        assert!(!grid.contains(Position::new(20, 9)));
        assert!(!grid.contains(Position::new(-1, 3)));
        assert!(!grid.is_interior(Position::new(0, 5)));
        assert!(grid.is_interior(Position::new(1, 1)));
        assert!(grid.is_interior(Position::new(18, 8)));
        assert!(!grid.is_interior(Position::new(19, 8)));
        assert_eq!(grid.cell_count(), 200);
        assert_eq!(grid.interior_cell_count(), 18 * 8);
    }

    #[test]
    fn test_snake_spawns_stacked_at_center() {
        let grid = Grid::new(20, 20);
        let snake = SnakeState::spawn(&grid);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.direction, Direction::Right);
        assert!(snake.body.iter().all(|&p| p == Position::new(10, 10)));
    }

    #[test]
    fn test_obstacle_set_only_active_block() {
        let mut set = ObstacleSet::default();
        set.slots[0] = Obstacle {
            position: Position::new(4, 4),
            active: true,
        };
        set.slots[1].position = Position::new(5, 5);
        assert!(set.blocks(Position::new(4, 4)));
        assert!(!set.blocks(Position::new(5, 5)));
        assert_eq!(set.active_count(), 1);
    }
}
