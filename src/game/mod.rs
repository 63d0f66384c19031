//! Core game logic for Sneeky
//!
//! Nothing in here touches the terminal or the disk, so every rule can be
//! exercised directly from tests.

pub mod action;
pub mod config;
pub mod grid;
pub mod session;
pub mod snake;
pub mod world;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{Difficulty, GameConfig};
pub use grid::{Grid, Position};
pub use session::{Player, Session};
pub use snake::Snake;
pub use world::{StepInfo, World};
