//! Session configuration and persisted player preferences.

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::error::{GameError, Result};
use crate::snake::types::{Difficulty, FailurePolicy, Grid, SpeedCurve};
use crate::utils::persistence;

/// Everything needed to start one session. Validated before play begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub difficulty: Difficulty,
    pub failure_policy: FailurePolicy,
    pub speed_curve: SpeedCurve,
    /// Lives at session start (lives mode only).
    pub starting_lives: u32,
    /// Random draws the spawner may spend on a single placement.
    pub spawn_attempt_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT),
            difficulty: Difficulty::default(),
            failure_policy: FailurePolicy::default(),
            speed_curve: SpeedCurve::default(),
            starting_lives: DEFAULT_LIVES,
            spawn_attempt_budget: DEFAULT_SPAWN_ATTEMPT_BUDGET,
        }
    }
}

impl GameConfig {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Reject configurations that could never be played.
    ///
    /// The spawner needs a free interior cell for the food plus one per
    /// obstacle, and the snake must start on an interior cell.
    pub fn validate(&self) -> Result<()> {
        let Grid { width, height } = self.grid;
        if width < MIN_GRID_DIMENSION || height < MIN_GRID_DIMENSION {
            return Err(GameError::Config(format!(
                "grid {}x{} is smaller than the {}x{} minimum",
                width, height, MIN_GRID_DIMENSION, MIN_GRID_DIMENSION
            )));
        }

        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(GameError::Config(format!(
                "grid {}x{} is larger than the {}x{} maximum",
                width, height, MAX_GRID_DIMENSION, MAX_GRID_DIMENSION
            )));
        }

        if !self.grid.is_interior(self.grid.center()) {
            return Err(GameError::Config(format!(
                "grid {}x{} has no interior cell at its center",
                width, height
            )));
        }

        let obstacles = self.difficulty.obstacle_count();
        if obstacles > MAX_OBSTACLES {
            return Err(GameError::Config(format!(
                "{} obstacles requested, at most {} supported",
                obstacles, MAX_OBSTACLES
            )));
        }

        // snake start cell + obstacles + food
        let required = 1 + obstacles + 1;
        let available = self.grid.interior_cell_count();
        if available < required {
            return Err(GameError::Config(format!(
                "grid {}x{} has {} interior cells, {} needed for {} difficulty",
                width, height, available, required, self.difficulty
            )));
        }

        if self.failure_policy == FailurePolicy::Lives && self.starting_lives == 0 {
            return Err(GameError::Config(
                "lives mode needs at least one starting life".to_string(),
            ));
        }

        if self.spawn_attempt_budget == 0 {
            return Err(GameError::Config(
                "spawn attempt budget must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Player preferences remembered between runs in `~/.snake/settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default)]
    pub speed_curve: SpeedCurve,
    #[serde(default = "default_lives")]
    pub starting_lives: u32,
    #[serde(default)]
    pub skip_splash: bool,
}

fn default_lives() -> u32 {
    DEFAULT_LIVES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            failure_policy: FailurePolicy::default(),
            speed_curve: SpeedCurve::default(),
            starting_lives: DEFAULT_LIVES,
            skip_splash: false,
        }
    }
}

impl Settings {
    pub const FILENAME: &'static str = "settings.json";

    /// Load settings, falling back to defaults if missing or unreadable.
    pub fn load() -> Self {
        persistence::load_json_or_default(Self::FILENAME)
    }

    pub fn save(&self) -> Result<()> {
        persistence::save_json(Self::FILENAME, self)
    }

    /// Build a session config from these preferences on the default grid.
    pub fn to_config(&self) -> GameConfig {
        GameConfig {
            difficulty: self.difficulty,
            failure_policy: self.failure_policy,
            speed_curve: self.speed_curve,
            starting_lives: self.starting_lives,
            ..GameConfig::default()
        }
    }
}
