//! Highscores kept in a JSON file next to the game
//!
//! The file holds every row ever appended:
//!
//! ```json
//! { "rows": [ { "id": 1, "name": "Ada", "score": 420 } ] }
//! ```
//!
//! Every operation goes back to disk, so two games sharing a file see each
//! other's scores. Writes land in a temporary file first and are renamed over
//! the real one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Leaderboard, LeaderboardError, Row, next_row, rank};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Table {
    rows: Vec<Row>,
}

#[derive(Debug, Clone)]
pub struct JsonLeaderboard {
    path: PathBuf,
}

impl JsonLeaderboard {
    /// Open the table at `path`, creating an empty one if the file is missing.
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LeaderboardError> {
        let board = Self { path: path.into() };

        match fs::read_to_string(&board.path) {
            Ok(json) => {
                board.parse(&json)?;
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if let Some(parent) = board.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|source| board.io_error(source))?;
                }
                board.store(&Table::default())?;
            }
            Err(source) => return Err(board.io_error(source)),
        }

        Ok(board)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Table, LeaderboardError> {
        let json = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        self.parse(&json)
    }

    fn parse(&self, json: &str) -> Result<Table, LeaderboardError> {
        serde_json::from_str(json).map_err(|source| LeaderboardError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, table: &Table) -> Result<(), LeaderboardError> {
        let json = serde_json::to_vec_pretty(table).map_err(|source| LeaderboardError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> LeaderboardError {
        LeaderboardError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Leaderboard for JsonLeaderboard {
    fn append(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        let mut table = self.load()?;
        let row = next_row(&table.rows, name, score);
        table.rows.push(row);
        self.store(&table)
    }

    fn top_n(&self, n: usize) -> Result<Vec<Row>, LeaderboardError> {
        let table = self.load()?;
        Ok(rank(&table.rows, n))
    }
}
