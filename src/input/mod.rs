pub mod handler;

pub use handler::InputHandler;

use crate::game::Direction;

/// Keys as the game sees them, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Backspace,
    Quit,
    Char(char),
}

impl Key {
    /// Arrow keys, plus WASD
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up | Key::Char('w' | 'W') => Some(Direction::Up),
            Key::Down | Key::Char('s' | 'S') => Some(Direction::Down),
            Key::Left | Key::Char('a' | 'A') => Some(Direction::Left),
            Key::Right | Key::Char('d' | 'D') => Some(Direction::Right),
            _ => None,
        }
    }

    /// Quit, or `q` outside of text entry
    pub fn is_quit(self) -> bool {
        matches!(self, Key::Quit | Key::Char('q' | 'Q'))
    }

    /// Characters accepted into a player name
    pub fn name_char(self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        }
    }
}
