// Grid (the classic 800x600 window, 20px cells, 50px margin on every side)
pub const DEFAULT_GRID_WIDTH: i16 = 35;
pub const DEFAULT_GRID_HEIGHT: i16 = 25;
pub const MIN_GRID_DIMENSION: i16 = 5;
pub const MAX_GRID_DIMENSION: i16 = 200;

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const DEFAULT_LIVES: u32 = 3;

// Obstacles per difficulty
pub const EASY_OBSTACLES: usize = 0;
pub const MEDIUM_OBSTACLES: usize = 3;
pub const HARD_OBSTACLES: usize = 6;
pub const MAX_OBSTACLES: usize = HARD_OBSTACLES;

// Tick timing (milliseconds)
pub const EASY_TICK_MS: u64 = 300;
pub const MEDIUM_TICK_MS: u64 = 250;
pub const HARD_TICK_MS: u64 = 200;
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
/// Ratchet curve: each moving tick subtracts `score / RATCHET_SCORE_DIVISOR`.
pub const RATCHET_SCORE_DIVISOR: u64 = 5;
/// Recompute curve: interval is `base - score * RECOMPUTE_MS_PER_POINT`.
pub const RECOMPUTE_MS_PER_POINT: u64 = 5;

// Spawner
pub const DEFAULT_SPAWN_ATTEMPT_BUDGET: u32 = 10_000;

// Presentation
pub const SPLASH_DURATION_MS: u64 = 2_000;
pub const MENU_POLL_MS: u64 = 50;

/// Best scores shown before any game has been played this run.
pub const PLACEHOLDER_BEST_SCORES: [(&str, u32); 3] =
    [("Easy", 100), ("Medium", 200), ("Hard", 300)];
