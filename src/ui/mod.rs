//! Terminal presentation: play screen, menus and shared widgets.

pub mod game_common;
pub mod menu_scene;
pub mod snake_scene;

pub use snake_scene::TerminalSink;
