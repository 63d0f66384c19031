use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

use sneeky::app::App;
use sneeky::console::TerminalConsole;
use sneeky::game::GameConfig;
use sneeky::leaderboard::JsonLeaderboard;

#[derive(Parser)]
#[command(name = "sneeky")]
#[command(version, about = "Snake in the terminal, with highscores")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = GameConfig::default();

    // The terminal belongs to the game, so logs go to a file
    let log_file = File::create(&config.log_path)
        .with_context(|| format!("Failed to create log file {:?}", config.log_path))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    info!("Starting Sneeky");

    let leaderboard = JsonLeaderboard::open(&config.leaderboard_path)
        .context("Failed to open highscore table")?;
    info!("Highscores in {}", leaderboard.path().display());

    let mut app = App::new(config, leaderboard);

    // Run game loop with cleanup
    let mut console = TerminalConsole::new()?;
    let result = app.run(&mut console);
    console.restore()?;

    result
}
