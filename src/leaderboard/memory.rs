use super::{Leaderboard, LeaderboardError, Row, next_row, rank};

/// Leaderboard that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboard {
    rows: Vec<Row>,
}

impl MemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row, in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl Leaderboard for MemoryLeaderboard {
    fn append(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        let row = next_row(&self.rows, name, score);
        self.rows.push(row);
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<Row>, LeaderboardError> {
        Ok(rank(&self.rows, n))
    }
}
