//! Snake: the grid simulation core.

pub mod logic;
pub mod snapshot;
pub mod spawner;
pub mod types;

pub use logic::{
    next_interval, process_input, start_session, step, CollisionCause, EndReason, GameInput,
    InputResult, StepOutcome,
};
pub use snapshot::Snapshot;
pub use spawner::{place_food, place_obstacles};
pub use types::{
    Difficulty, Direction, FailurePolicy, Grid, Obstacle, ObstacleSet, Phase, Position,
    SessionState, SnakeState, SpeedCurve,
};
