use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Key;

/// Translates crossterm key events into [`Key`]s
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Key> {
        // Only presses count, not releases or repeats
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Key::Quit);
        }

        match key.code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Enter => Some(Key::Confirm),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Esc => Some(Key::Quit),
            KeyCode::Char(c) => Some(Key::Char(c)),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
