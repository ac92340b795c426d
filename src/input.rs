//! Keyboard handling: maps terminal key events to game and menu inputs.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::core::game_loop::InputSource;
use crate::snake::logic::GameInput;
use crate::snake::types::Direction;

/// UI-agnostic input actions for the menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    /// Direct pick by number key (0-based).
    Choose(usize),
    Back,
    Quit,
    Other,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Map a key pressed during play. Unbound keys yield `None`.
pub fn map_game_key(key: KeyEvent) -> Option<GameInput> {
    if is_ctrl_c(&key) {
        return Some(GameInput::Quit);
    }
    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            GameInput::Steer(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameInput::Steer(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameInput::Steer(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameInput::Steer(Direction::Right)
        }
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => GameInput::TogglePause,
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => GameInput::ReturnToMenu,
        KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => return None,
    };
    Some(input)
}

/// Map a key pressed on a menu screen.
pub fn map_menu_key(key: KeyEvent) -> MenuInput {
    if is_ctrl_c(&key) {
        return MenuInput::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter => MenuInput::Select,
        KeyCode::Char(c @ '1'..='9') => MenuInput::Choose(c as usize - '1' as usize),
        KeyCode::Esc | KeyCode::Backspace => MenuInput::Back,
        KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

/// Read one key press, waiting at most `timeout`.
pub fn read_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

/// Game input read from the terminal's event queue.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_inputs(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        while let Some(key) = read_key(Duration::ZERO)? {
            if let Some(input) = map_game_key(key) {
                inputs.push(input);
            }
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_wasd_steer() {
        assert_eq!(
            map_game_key(key(KeyCode::Up)),
            Some(GameInput::Steer(Direction::Up))
        );
        assert_eq!(
            map_game_key(key(KeyCode::Char('a'))),
            Some(GameInput::Steer(Direction::Left))
        );
        assert_eq!(
            map_game_key(key(KeyCode::Char('D'))),
            Some(GameInput::Steer(Direction::Right))
        );
        assert_eq!(
            map_game_key(key(KeyCode::Down)),
            Some(GameInput::Steer(Direction::Down))
        );
    }

    #[test]
    fn test_classic_pause_and_menu_keys() {
        assert_eq!(
            map_game_key(key(KeyCode::Char('p'))),
            Some(GameInput::TogglePause)
        );
        assert_eq!(
            map_game_key(key(KeyCode::Char('m'))),
            Some(GameInput::ReturnToMenu)
        );
        assert_eq!(map_game_key(key(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(map_game_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_game_key(ctrl_c), Some(GameInput::Quit));
        assert_eq!(map_menu_key(ctrl_c), MenuInput::Quit);
    }

    #[test]
    fn test_menu_number_keys() {
        assert_eq!(map_menu_key(key(KeyCode::Char('1'))), MenuInput::Choose(0));
        assert_eq!(map_menu_key(key(KeyCode::Char('4'))), MenuInput::Choose(3));
        assert_eq!(map_menu_key(key(KeyCode::Enter)), MenuInput::Select);
        assert_eq!(map_menu_key(key(KeyCode::Esc)), MenuInput::Back);
        assert_eq!(map_menu_key(key(KeyCode::Char('z'))), MenuInput::Other);
    }
}
