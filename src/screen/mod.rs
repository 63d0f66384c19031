//! The screens the game moves between and how each one reacts to keys
//!
//! ```text
//! StartMenu --difficulty--> Playing --collision or full board--> GameOver --> EnterName --name--> Highscores --> StartMenu
//!                            |    ^
//!                       quit v    | resume
//!                          ExitConfirm --quit--> exit
//! ```
//!
//! Handlers never block and never touch the session or the leaderboard. They
//! only say which [`Transition`] a key asks for; the app carries it out.

pub mod name_entry;
pub mod standings;
pub mod start_menu;

pub use name_entry::NameEntry;
pub use standings::Standings;
pub use start_menu::StartMenu;

use crate::game::{Difficulty, Direction};
use crate::input::Key;

/// A requested change of screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Start a fresh session at this speed
    StartGame(Difficulty),
    /// The snake ran into itself
    GameOver,
    /// Open the quit prompt over a running game
    Pause,
    /// Close the quit prompt and keep playing
    Resume,
    /// Drop the running game and go back to the menu
    Abandon,
    /// Move from the game over notice to name entry, optionally with a first letter
    EnterName(Option<char>),
    /// Store the finished game under this name
    SaveScore(String),
    /// Back to the start menu
    ToMenu,
    /// Leave the program
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    StartMenu(StartMenu),
    Playing {
        /// Turn to apply on the next tick
        pending: Option<Direction>,
    },
    ExitConfirm,
    GameOver,
    EnterName(NameEntry),
    Highscores(Standings),
}

impl Screen {
    pub fn playing() -> Self {
        Screen::Playing { pending: None }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::StartMenu(_) => "start menu",
            Screen::Playing { .. } => "playing",
            Screen::ExitConfirm => "exit confirm",
            Screen::GameOver => "game over",
            Screen::EnterName(_) => "enter name",
            Screen::Highscores(_) => "highscores",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Screen::Playing { .. })
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match self {
            Screen::StartMenu(menu) => menu.handle_key(key),
            Screen::Playing { pending } => {
                if key.is_quit() {
                    return Some(Transition::Pause);
                }
                if let Some(direction) = key.direction() {
                    *pending = Some(direction);
                }
                None
            }
            Screen::ExitConfirm => match key {
                key if key.is_quit() => Some(Transition::Exit),
                Key::Confirm => Some(Transition::Resume),
                Key::Backspace => Some(Transition::Abandon),
                _ => None,
            },
            Screen::GameOver => match key {
                Key::Confirm => Some(Transition::EnterName(None)),
                key => key.name_char().map(|c| Transition::EnterName(Some(c))),
            },
            Screen::EnterName(entry) => entry.handle_key(key),
            Screen::Highscores(standings) => standings.handle_key(key),
        }
    }
}
