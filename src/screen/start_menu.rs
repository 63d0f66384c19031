use super::Transition;
use crate::game::Difficulty;
use crate::input::Key;

/// Difficulty picker shown when the program starts and after each game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartMenu {
    selected: usize,
}

impl StartMenu {
    pub fn new(selected: Difficulty) -> Self {
        Self {
            selected: selected.index(),
        }
    }

    pub fn selected(&self) -> Difficulty {
        Difficulty::from_index(self.selected).unwrap_or_default()
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Transition> {
        let count = Difficulty::ALL.len();
        match key {
            Key::Up => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            Key::Down => {
                self.selected = (self.selected + 1) % count;
                None
            }
            Key::Confirm => Some(Transition::StartGame(self.selected())),
            key if key.is_quit() => Some(Transition::Exit),
            _ => None,
        }
    }
}
