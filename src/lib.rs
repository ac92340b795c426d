//! Snake Arcade - grid snake game library
//!
//! The simulation core (`snake`) is free of terminal code; the binary wires it
//! to crossterm input and the ratatui screens in `ui`.

pub mod core;
pub mod input;
pub mod menu;
pub mod scores;
pub mod snake;
pub mod ui;
pub mod utils;

pub use crate::core::{
    run_session, GameConfig, GameError, InputSource, RenderSink, Result, SessionSummary, Settings,
};
pub use crate::snake::{
    process_input, start_session, step, Difficulty, Direction, EndReason, GameInput, SessionState,
    Snapshot, StepOutcome,
};
