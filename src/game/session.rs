use super::action::Action;
use super::config::{Difficulty, GameConfig};
use super::snake::Snake;
use super::world::{StepInfo, World};

/// The person at the keyboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

/// Everything one running game owns. Only one is live at a time.
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pub snake: Snake,
    pub player: Player,
    pub difficulty: Difficulty,
    pub steps: u32,
    apple_bonus: u32,
}

impl Session {
    /// Fresh snake, zero score, first apple placed.
    pub fn new(config: &GameConfig, difficulty: Difficulty, name: String) -> Self {
        let grid = config.grid();
        let snake = Snake::new(
            grid,
            config.start_position,
            config.start_direction,
            config.initial_snake_length,
        );
        let mut world = World::with_seed(grid, config.seed);
        world.place_apple_randomly(&snake);

        Self {
            world,
            snake,
            player: Player { name, score: 0 },
            difficulty,
            steps: 0,
            apple_bonus: difficulty.apple_bonus(config.base_apple_bonus),
        }
    }

    /// Points one apple is worth in this session
    pub fn apple_bonus(&self) -> u32 {
        self.apple_bonus
    }

    /// Apply the player's input, then advance the world by one step.
    pub fn tick(&mut self, action: Action) -> StepInfo {
        if let Action::Move(direction) = action {
            self.snake.advance(direction);
        }

        let info = self.world.step(&mut self.snake);
        if info.ate_apple {
            self.player.score += self.apple_bonus;
        }
        self.steps += 1;

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::grid::Position;

    fn session(difficulty: Difficulty) -> Session {
        Session::new(&GameConfig::small(), difficulty, String::new())
    }

    #[test]
    fn test_new_session() {
        let session = session(Difficulty::Easy);
        assert_eq!(session.player.score, 0);
        assert_eq!(session.steps, 0);
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.snake.head(), Position::new(2, 0));
        assert!(!session.snake.contains(session.world.apple()));
    }

    #[test]
    fn test_tick_without_apple_keeps_score_and_size() {
        let mut session = session(Difficulty::Easy);
        session.world.set_apple(Position::new(9, 9));

        session.tick(Action::Continue);

        assert_eq!(session.snake.head(), Position::new(3, 0));
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.player.score, 0);
        assert_eq!(session.steps, 1);
    }

    #[test]
    fn test_apple_scores_by_difficulty() {
        for (difficulty, bonus) in [
            (Difficulty::Easy, 42),
            (Difficulty::Medium, 56),
            (Difficulty::Hard, 70),
        ] {
            let mut session = session(difficulty);
            session.world.set_apple(session.snake.next_head());

            let info = session.tick(Action::Continue);

            assert!(info.ate_apple);
            assert_eq!(session.player.score, bonus);
            assert_eq!(session.snake.len(), 4);
        }
    }

    #[test]
    fn test_tick_applies_turn_before_moving() {
        let mut session = session(Difficulty::Easy);
        session.world.set_apple(Position::new(9, 9));

        session.tick(Action::Move(Direction::Down));
        assert_eq!(session.snake.head(), Position::new(2, 1));

        // Reversal is dropped, the snake keeps going down
        session.tick(Action::Move(Direction::Up));
        assert_eq!(session.snake.head(), Position::new(2, 2));
    }

    #[test]
    fn test_full_board_stops_scoring() {
        let mut config = GameConfig::new(5, 1);
        config.initial_snake_length = 4;
        let mut session = Session::new(&config, Difficulty::Easy, String::new());

        let first = session.tick(Action::Continue);
        assert!(first.ate_apple);
        assert!(first.board_full);

        for _ in 0..50 {
            let info = session.tick(Action::Continue);
            assert!(!info.ate_apple);
            assert!(!info.collided);
        }
        assert_eq!(session.snake.len(), 5);
        assert_eq!(session.player.score, 42);
    }

    #[test]
    fn test_same_seed_same_apples() {
        let a = session(Difficulty::Easy);
        let b = session(Difficulty::Hard);
        assert_eq!(a.world.apple(), b.world.apple());
    }
}
