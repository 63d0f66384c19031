//! Highscore storage
//!
//! The game only ever appends a finished game's score and asks for the best
//! few rows. Rows are never updated or deleted.

pub mod json;
pub mod memory;

pub use json::JsonLeaderboard;
pub use memory::MemoryLeaderboard;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::game::config::NAME_MAX_LEN;

/// One stored result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Surrogate key, increasing in insertion order
    pub id: u64,
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to access highscore file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("highscore file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An append-only table of `(name, score)` rows
pub trait Leaderboard {
    fn append(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError>;

    /// Best `n` rows, highest score first. Equal scores keep insertion order.
    fn top_n(&self, n: usize) -> Result<Vec<Row>, LeaderboardError>;
}

/// Build the row that would be appended after `rows`.
fn next_row(rows: &[Row], name: &str, score: u32) -> Row {
    let id = rows.iter().map(|row| row.id).max().map_or(1, |id| id + 1);
    Row {
        id,
        name: name.chars().take(NAME_MAX_LEN).collect(),
        score,
    }
}

fn rank(rows: &[Row], n: usize) -> Vec<Row> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, name: &str, score: u32) -> Row {
        Row {
            id,
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_rank_orders_by_score_then_insertion() {
        let rows = vec![
            row(1, "a", 10),
            row(2, "b", 30),
            row(3, "c", 10),
            row(4, "d", 20),
        ];

        let top = rank(&rows, 3);

        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_next_row_ids_and_name_limit() {
        assert_eq!(next_row(&[], "ada", 1).id, 1);

        let rows = vec![row(4, "x", 0), row(9, "y", 0)];
        let next = next_row(&rows, "abcdefghijklmnopqrstuvwxyz", 5);
        assert_eq!(next.id, 10);
        assert_eq!(next.name, "abcdefghijklmnop");
    }
}
