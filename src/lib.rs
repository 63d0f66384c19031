//! Sneeky - a terminal snake game with a local highscore table
//!
//! This library provides:
//! - Core game logic: board, snake, apples, scoring (game module)
//! - The screen state machine and its main loop (app, screen modules)
//! - Keyboard mapping and the terminal console (input, console modules)
//! - TUI rendering (render module)
//! - Highscore storage (leaderboard module)

pub mod app;
pub mod console;
pub mod game;
pub mod input;
pub mod leaderboard;
pub mod render;
pub mod screen;
