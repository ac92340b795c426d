//! Crate-wide error type.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Session configuration that can never produce a playable game.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The spawner ran out of draws before finding a free cell.
    #[error("Could not place {what} after {attempts} attempts; the grid has no room left")]
    SpawnExhausted { what: &'static str, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
