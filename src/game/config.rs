use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::action::Direction;
use super::grid::{Grid, Position};

/// Seed every new game is started from unless told otherwise
pub const DEFAULT_SEED: u64 = 3_141_592_654;

/// Points for one apple on the easiest difficulty
pub const BASE_APPLE_BONUS: u32 = 42;

/// Longest name the highscore table keeps
pub const NAME_MAX_LEN: usize = 16;

/// Game speed, chosen on the start screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a 0-based menu index. Out-of-range indices yield `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Steps per second
    pub fn tick_rate(self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 20,
            Difficulty::Hard => 25,
        }
    }

    /// Time each tick may spend waiting for a key
    pub fn tick_budget(self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.tick_rate()))
    }

    /// Points awarded per apple: `base * rate / easy_rate`
    pub fn apple_bonus(self, base: u32) -> u32 {
        base * self.tick_rate() / Difficulty::Easy.tick_rate()
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Tail cell of a freshly spawned snake
    pub start_position: Position,
    /// Heading of a freshly spawned snake
    pub start_direction: Direction,
    /// Points per apple before the difficulty multiplier
    pub base_apple_bonus: u32,
    /// Seed for apple placement; `None` seeds each game from OS entropy
    pub seed: Option<u64>,

    /// Longest accepted player name
    pub name_max_len: usize,
    /// Rows shown on the highscore screen
    pub leaderboard_size: usize,
    /// Input poll interval outside of gameplay
    pub menu_poll: Duration,

    /// Highscore store location
    pub leaderboard_path: PathBuf,
    /// Log file location
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 15,
            initial_snake_length: 3,
            start_position: Position::new(0, 0),
            start_direction: Direction::Right,
            base_apple_bonus: BASE_APPLE_BONUS,
            seed: Some(DEFAULT_SEED),
            name_max_len: NAME_MAX_LEN,
            leaderboard_size: 5,
            menu_poll: Duration::from_millis(100),
            leaderboard_path: PathBuf::from("highscores.json"),
            log_path: PathBuf::from("sneeky.log"),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}
