//! Log setup.
//!
//! The terminal is in the alternate screen while playing, so log records go
//! to `~/.snake/snake.log` instead of stderr. `RUST_LOG` sets the filter.

use std::fs::OpenOptions;
use std::path::PathBuf;

use super::persistence;

pub const LOG_FILENAME: &str = "snake.log";

/// Install the file logger. Returns the log path, or `None` if the file could
/// not be opened (the game then runs without logging).
pub fn init() -> Option<PathBuf> {
    let path = persistence::data_path(LOG_FILENAME).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    Some(path)
}
