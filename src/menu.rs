//! Menu state: the main menu and the level picker.

use crate::input::MenuInput;
use crate::snake::types::Difficulty;

pub const MAIN_MENU_ITEMS: [&str; 4] = ["Play", "Best Scores", "Tutorial", "Quit"];
pub const LEVEL_MENU_ITEMS: [&str; 4] = ["Easy", "Medium", "Hard", "Back"];

pub const TUTORIAL_LINES: [&str; 12] = [
    "Controls:",
    "Arrow Up / W : move up",
    "Arrow Down / S : move down",
    "Arrow Left / A : move left",
    "Arrow Right / D : move right",
    "P : pause",
    "M : back to the main menu",
    "Q : quit",
    "",
    "Goal:",
    "Eat the food to grow.",
    "Avoid the obstacles, the walls and your own body.",
];

/// What a menu did with one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Picked(usize),
    Back,
    Quit,
}

/// Cursor over a fixed list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub selected_index: usize,
    len: usize,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self {
            selected_index: 0,
            len,
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < self.len {
            self.selected_index += 1;
        }
    }

    pub fn process_input(&mut self, input: MenuInput) -> MenuAction {
        match input {
            MenuInput::Up => self.navigate_up(),
            MenuInput::Down => self.navigate_down(),
            MenuInput::Select => {
                log::debug!("Menu pick {}", self.selected_index);
                return MenuAction::Picked(self.selected_index);
            }
            MenuInput::Choose(index) if index < self.len => {
                log::debug!("Menu pick {} by number", index);
                self.selected_index = index;
                return MenuAction::Picked(index);
            }
            MenuInput::Back => return MenuAction::Back,
            MenuInput::Quit => return MenuAction::Quit,
            MenuInput::Choose(_) | MenuInput::Other => {}
        }
        MenuAction::None
    }
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Play,
    BestScores,
    Tutorial,
    Quit,
}

impl MainMenuChoice {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Play,
            1 => Self::BestScores,
            2 => Self::Tutorial,
            _ => Self::Quit,
        }
    }
}

/// Level picker result: a difficulty, or `None` for "Back".
pub fn level_from_index(index: usize) -> Option<Difficulty> {
    Difficulty::ALL.get(index).copied()
}
