use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::{Grid, Position};
use super::snake::Snake;

/// What happened during one world step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Head position after the step
    pub head: Position,
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Whether the new head landed on the snake's own body
    pub collided: bool,
    /// Whether the snake now covers every cell, leaving nowhere for an apple
    pub board_full: bool,
}

/// The board and its single apple
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    apple: Position,
    rng: StdRng,
}

impl World {
    /// The apple starts in the top-left corner until [`World::place_apple_randomly`] runs.
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            apple: Position::default(),
            rng,
        }
    }

    /// Seeded worlds place apples in the same order every time.
    pub fn with_seed(grid: Grid, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(grid, rng)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    /// Put the apple at a uniformly random cell the snake does not occupy.
    /// A snake filling the whole board leaves the apple where it is.
    pub fn place_apple_randomly(&mut self, snake: &Snake) {
        if snake.len() >= self.grid.area() {
            return;
        }
        loop {
            let x = self.rng.gen_range(0..self.grid.width) as i32;
            let y = self.rng.gen_range(0..self.grid.height) as i32;
            let pos = Position::new(x, y);

            if !snake.contains(pos) {
                self.apple = pos;
                return;
            }
        }
    }

    /// Advance the snake one cell, feeding it if it reaches the apple.
    /// Once the snake fills the board the leftover apple sits under its body
    /// and can no longer be eaten.
    pub fn step(&mut self, snake: &mut Snake) -> StepInfo {
        let area = self.grid.area();
        let ate_apple = snake.len() < area && snake.next_head() == self.apple;
        if ate_apple {
            snake.grow();
        }

        let head = snake.step();

        if ate_apple {
            self.place_apple_randomly(snake);
        }

        StepInfo {
            head,
            ate_apple,
            collided: snake.detects_self_collision(),
            board_full: snake.len() >= area,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_apple(&mut self, pos: Position) {
        self.apple = pos;
    }
}
