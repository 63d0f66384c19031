use super::Transition;
use crate::input::Key;
use crate::leaderboard::Row;

/// The highscore table as shown after a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    /// `None` when the store could not be read
    rows: Option<Vec<Row>>,
    size: usize,
}

impl Standings {
    pub fn new(rows: Vec<Row>, size: usize) -> Self {
        Self {
            rows: Some(rows),
            size,
        }
    }

    pub fn unavailable(size: usize) -> Self {
        Self { rows: None, size }
    }

    pub fn is_available(&self) -> bool {
        self.rows.is_some()
    }

    /// Numbered lines, padded with `N. -` for empty places
    pub fn lines(&self) -> Vec<String> {
        let rows = self.rows.as_deref().unwrap_or_default();
        (0..self.size)
            .map(|i| match rows.get(i) {
                Some(row) if row.score > 0 => format!("{}. {} {}", i + 1, row.name, row.score),
                _ => format!("{}. -", i + 1),
            })
            .collect()
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match key {
            Key::Confirm => Some(Transition::ToMenu),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, score: u32) -> Row {
        Row {
            id: 0,
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_lines_pad_and_hide_zero_scores() {
        let standings = Standings::new(vec![row("Ada", 420), row("Bob", 0)], 5);

        assert_eq!(
            standings.lines(),
            vec!["1. Ada 420", "2. -", "3. -", "4. -", "5. -"]
        );
    }

    #[test]
    fn test_unavailable_still_renders_placeholders() {
        let standings = Standings::unavailable(2);
        assert!(!standings.is_available());
        assert_eq!(standings.lines(), vec!["1. -", "2. -"]);
    }

    #[test]
    fn test_confirm_returns_to_menu() {
        let mut standings = Standings::new(Vec::new(), 5);
        assert_eq!(standings.handle_key(Key::Up), None);
        assert_eq!(standings.handle_key(Key::Confirm), Some(Transition::ToMenu));
    }
}
