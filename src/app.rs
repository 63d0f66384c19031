//! The screen state machine
//!
//! One loop drives everything: draw, wait for a key, let the current screen
//! react, and advance the game when playing.

use anyhow::Result;
use log::{debug, error, info};
use std::time::Duration;

use crate::console::{Console, wait_for_tick};
use crate::game::{Action, Difficulty, GameConfig, Session};
use crate::input::Key;
use crate::leaderboard::Leaderboard;
use crate::screen::{NameEntry, Screen, Standings, StartMenu, Transition};

/// Whether the main loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a console needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub screen: &'a Screen,
    pub session: Option<&'a Session>,
    pub config: &'a GameConfig,
}

pub struct App<L> {
    config: GameConfig,
    leaderboard: L,
    screen: Screen,
    session: Option<Session>,
    /// Remembered between games to pre-fill name entry
    player_name: String,
    difficulty: Difficulty,
}

impl<L: Leaderboard> App<L> {
    pub fn new(config: GameConfig, leaderboard: L) -> Self {
        Self {
            config,
            leaderboard,
            screen: Screen::StartMenu(StartMenu::default()),
            session: None,
            player_name: String::new(),
            difficulty: Difficulty::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn leaderboard(&self) -> &L {
        &self.leaderboard
    }

    pub fn view(&self) -> View<'_> {
        View {
            screen: &self.screen,
            session: self.session.as_ref(),
            config: &self.config,
        }
    }

    /// How long to wait for input before the next update
    pub fn poll_budget(&self) -> Duration {
        match (&self.screen, &self.session) {
            (Screen::Playing { .. }, Some(session)) => session.difficulty.tick_budget(),
            _ => self.config.menu_poll,
        }
    }

    /// Run until the player quits.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<()> {
        info!("Entering {}", self.screen.name());
        loop {
            console.draw(&self.view())?;

            let budget = self.poll_budget();
            let key = if self.screen.is_playing() {
                wait_for_tick(console, budget)?
            } else {
                console.poll_key(budget)?
            };

            if self.update(key) == Flow::Exit {
                info!("Player quit");
                return Ok(());
            }
        }
    }

    /// One pass of the loop: react to the key, then advance the game.
    /// A key that changes the screen skips the game step.
    pub fn update(&mut self, key: Option<Key>) -> Flow {
        if let Some(transition) = key.and_then(|key| self.screen.handle_key(key)) {
            return self.apply(transition);
        }
        match self.tick() {
            Some(transition) => self.apply(transition),
            None => Flow::Continue,
        }
    }

    /// Advance the running game by one step. Does nothing outside of play.
    pub fn tick(&mut self) -> Option<Transition> {
        let Screen::Playing { pending } = &mut self.screen else {
            return None;
        };
        let session = self.session.as_mut()?;

        let info = session.tick(Action::from(pending.take()));
        if info.ate_apple {
            debug!("Apple eaten, score {}", session.player.score);
        }
        if info.board_full {
            info!("Board filled");
        }
        (info.collided || info.board_full).then_some(Transition::GameOver)
    }

    pub fn apply(&mut self, transition: Transition) -> Flow {
        debug!("{} -> {:?}", self.screen.name(), transition);

        match transition {
            Transition::StartGame(difficulty) => {
                info!("New game on {}", difficulty.label());
                self.difficulty = difficulty;
                self.session = Some(Session::new(
                    &self.config,
                    difficulty,
                    self.player_name.clone(),
                ));
                self.screen = Screen::playing();
            }
            Transition::GameOver => {
                if let Some(session) = &self.session {
                    info!(
                        "Game over: score {}, length {}, {} steps",
                        session.player.score,
                        session.snake.len(),
                        session.steps
                    );
                }
                self.screen = Screen::GameOver;
            }
            Transition::Pause => self.screen = Screen::ExitConfirm,
            Transition::Resume => self.screen = Screen::playing(),
            Transition::Abandon => {
                info!("Game abandoned");
                self.to_menu();
            }
            Transition::EnterName(first) => {
                let mut entry = NameEntry::new(&self.player_name, self.config.name_max_len);
                if let Some(c) = first {
                    entry.push(c);
                }
                self.screen = Screen::EnterName(entry);
            }
            Transition::SaveScore(name) => {
                let score = self.session.as_ref().map_or(0, |s| s.player.score);
                if let Some(session) = self.session.as_mut() {
                    session.player.name = name.clone();
                }
                self.player_name = name;
                self.screen = Screen::Highscores(self.record_score(score));
            }
            Transition::ToMenu => self.to_menu(),
            Transition::Exit => return Flow::Exit,
        }

        Flow::Continue
    }

    fn to_menu(&mut self) {
        self.session = None;
        self.screen = Screen::StartMenu(StartMenu::new(self.difficulty));
    }

    /// Store errors are logged and shown, never fatal.
    fn record_score(&mut self, score: u32) -> Standings {
        let size = self.config.leaderboard_size;

        if let Err(err) = self.leaderboard.append(&self.player_name, score) {
            error!("Could not save score {} for {}: {}", score, self.player_name, err);
        } else {
            info!("Saved score {} for {}", score, self.player_name);
        }

        match self.leaderboard.top_n(size) {
            Ok(rows) => Standings::new(rows, size),
            Err(err) => {
                error!("Could not read highscores: {}", err);
                Standings::unavailable(size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::ScriptedConsole;
    use crate::game::{Direction, Position};
    use crate::leaderboard::{LeaderboardError, MemoryLeaderboard, Row};

    fn app() -> App<MemoryLeaderboard> {
        App::new(GameConfig::small(), MemoryLeaderboard::new())
    }

    /// Start an Easy game with the apple moved out of the way.
    fn playing() -> App<MemoryLeaderboard> {
        let mut app = app();
        app.update(Some(Key::Confirm));
        app.session.as_mut().unwrap().world.set_apple(Position::new(9, 9));
        app
    }

    /// Play a square so a five-cell snake runs into itself.
    fn crash(app: &mut App<MemoryLeaderboard>) {
        app.session.as_mut().unwrap().snake.grow();
        app.update(None);
        app.session.as_mut().unwrap().snake.grow();
        app.update(None);
        app.update(Some(Key::Down));
        app.update(Some(Key::Left));
        app.update(Some(Key::Up));
    }

    struct BrokenLeaderboard;

    impl Leaderboard for BrokenLeaderboard {
        fn append(&mut self, _name: &str, _score: u32) -> Result<(), LeaderboardError> {
            Err(LeaderboardError::Io {
                path: "highscores.json".into(),
                source: std::io::Error::other("disk gone"),
            })
        }

        fn top_n(&self, _n: usize) -> Result<Vec<Row>, LeaderboardError> {
            Err(LeaderboardError::Io {
                path: "highscores.json".into(),
                source: std::io::Error::other("disk gone"),
            })
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let app = app();
        assert!(matches!(app.screen(), Screen::StartMenu(_)));
        assert!(app.session().is_none());
        assert_eq!(app.poll_budget(), Duration::from_millis(100));
    }

    #[test]
    fn test_menu_confirm_starts_fresh_session() {
        let mut app = app();
        app.update(Some(Key::Down));
        app.update(Some(Key::Confirm));

        assert!(app.screen().is_playing());
        let session = app.session().unwrap();
        assert_eq!(session.difficulty, Difficulty::Medium);
        assert_eq!(session.player.score, 0);
        assert_eq!(app.poll_budget(), Duration::from_millis(50));
    }

    #[test]
    fn test_ticks_without_input_keep_heading() {
        let mut app = playing();
        for _ in 0..3 {
            assert_eq!(app.update(None), Flow::Continue);
        }
        assert_eq!(app.session().unwrap().snake.head(), Position::new(5, 0));
        assert_eq!(app.session().unwrap().steps, 3);
    }

    #[test]
    fn test_turn_key_applies_on_same_tick() {
        let mut app = playing();
        app.update(Some(Key::Down));

        let snake = &app.session().unwrap().snake;
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), Position::new(2, 1));
    }

    #[test]
    fn test_quit_opens_prompt_and_resume_keeps_session() {
        let mut app = playing();
        app.update(None);

        app.update(Some(Key::Char('q')));
        assert_eq!(app.screen(), &Screen::ExitConfirm);
        assert_eq!(app.poll_budget(), Duration::from_millis(100));
        // The game is frozen while the prompt is open
        app.update(None);
        assert_eq!(app.session().unwrap().steps, 1);

        app.update(Some(Key::Confirm));
        assert!(app.screen().is_playing());
        assert_eq!(app.session().unwrap().steps, 1);
    }

    #[test]
    fn test_confirmed_quit_exits() {
        let mut app = playing();
        app.update(Some(Key::Quit));
        assert_eq!(app.update(Some(Key::Char('q'))), Flow::Exit);
    }

    #[test]
    fn test_abandon_returns_to_menu() {
        let mut app = playing();
        app.update(Some(Key::Quit));
        app.update(Some(Key::Backspace));

        assert!(matches!(app.screen(), Screen::StartMenu(_)));
        assert!(app.session().is_none());
    }

    #[test]
    fn test_collision_leads_to_game_over() {
        let mut app = playing();
        crash(&mut app);
        assert_eq!(app.screen(), &Screen::GameOver);
    }

    #[test]
    fn test_filling_the_board_ends_the_game() {
        let mut config = GameConfig::new(5, 1);
        config.initial_snake_length = 4;
        let mut app = App::new(config, MemoryLeaderboard::new());
        app.update(Some(Key::Confirm));
        assert_eq!(app.session().unwrap().world.apple(), Position::new(4, 0));

        app.update(None);

        assert_eq!(app.screen(), &Screen::GameOver);
        let session = app.session().unwrap();
        assert_eq!(session.snake.len(), 5);
        assert_eq!(session.player.score, 42);

        // Further updates neither move nor score
        for _ in 0..20 {
            app.update(None);
        }
        assert_eq!(app.session().unwrap().player.score, 42);
        assert_eq!(app.session().unwrap().steps, 1);
    }

    #[test]
    fn test_empty_name_confirm_stays_in_name_entry() {
        let mut app = playing();
        crash(&mut app);
        app.update(Some(Key::Confirm));
        assert!(matches!(app.screen(), Screen::EnterName(_)));

        app.update(Some(Key::Confirm));

        assert!(matches!(app.screen(), Screen::EnterName(_)));
        assert!(app.leaderboard().rows().is_empty());
    }

    #[test]
    fn test_full_round_persists_score() {
        let mut app = playing();
        let apple = app.session().unwrap().snake.next_head();
        app.session.as_mut().unwrap().world.set_apple(apple);
        app.update(None);
        app.session.as_mut().unwrap().world.set_apple(Position::new(9, 9));
        crash(&mut app);

        app.update(Some(Key::Char('A')));
        app.update(Some(Key::Char('d')));
        app.update(Some(Key::Char('a')));
        app.update(Some(Key::Confirm));

        let Screen::Highscores(standings) = app.screen() else {
            panic!("expected highscores, got {:?}", app.screen());
        };
        assert_eq!(standings.lines()[0], "1. Ada 42");
        assert_eq!(app.leaderboard().rows().len(), 1);

        app.update(Some(Key::Confirm));
        assert!(matches!(app.screen(), Screen::StartMenu(_)));
        assert!(app.session().is_none());
    }

    #[test]
    fn test_name_is_remembered_for_next_game() {
        let mut app = playing();
        crash(&mut app);
        app.update(Some(Key::Char('Z')));
        app.update(Some(Key::Confirm));
        app.update(Some(Key::Confirm));

        app.update(Some(Key::Confirm));
        app.session.as_mut().unwrap().world.set_apple(Position::new(9, 9));
        crash(&mut app);
        app.update(Some(Key::Confirm));

        let Screen::EnterName(entry) = app.screen() else {
            panic!("expected name entry");
        };
        assert_eq!(entry.buffer(), "Z");
    }

    #[test]
    fn test_broken_store_does_not_stop_the_game() {
        let mut app = App::new(GameConfig::small(), BrokenLeaderboard);
        app.apply(Transition::StartGame(Difficulty::Easy));
        app.apply(Transition::GameOver);
        app.apply(Transition::EnterName(Some('x')));

        let flow = app.apply(Transition::SaveScore("x".to_string()));

        assert_eq!(flow, Flow::Continue);
        let Screen::Highscores(standings) = app.screen() else {
            panic!("expected highscores");
        };
        assert!(!standings.is_available());
    }

    #[test]
    fn test_run_drives_scripted_session() {
        let mut app = app();
        let mut console = ScriptedConsole::new([
            Some(Key::Down),
            Some(Key::Down),
            Some(Key::Confirm),
            None,
            None,
            Some(Key::Quit),
            Some(Key::Char('q')),
        ]);

        app.run(&mut console).unwrap();

        assert_eq!(app.session().unwrap().difficulty, Difficulty::Hard);
        assert_eq!(app.session().unwrap().steps, 2);
        assert_eq!(
            console.frames(),
            &[
                "start menu",
                "start menu",
                "start menu",
                "playing",
                "playing",
                "playing",
                "exit confirm"
            ]
        );
        // Every playing frame sits out the rest of Hard's 40ms tick
        assert!(console.idle_time() > Duration::from_millis(100));
        assert!(console.idle_time() <= Duration::from_millis(120));
    }
}
