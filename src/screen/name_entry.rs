use super::Transition;
use crate::input::Key;

/// Text box for the player's name after a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    buffer: String,
    max_len: usize,
}

impl NameEntry {
    /// Starts out holding `name`, cut down to `max_len` characters.
    pub fn new(name: &str, max_len: usize) -> Self {
        Self {
            buffer: name.chars().take(max_len).collect(),
            max_len,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns false when the character is not allowed or the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_alphanumeric() || self.buffer.len() >= self.max_len {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Confirm with an empty buffer does nothing.
    pub fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match key {
            Key::Confirm if !self.buffer.is_empty() => Some(Transition::SaveScore(self.buffer.clone())),
            Key::Backspace => {
                self.buffer.pop();
                None
            }
            key => {
                if let Some(c) = key.name_char() {
                    self.push(c);
                }
                None
            }
        }
    }
}
