//! Core plumbing: constants, configuration, errors and the session loop.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_loop;

pub use config::{GameConfig, Settings};
pub use error::{GameError, Result};
pub use game_loop::{run_session, InputSource, RenderSink, SessionSummary};
