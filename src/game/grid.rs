use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed-size toroidal board. Moving off one edge re-enters from the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Both dimensions are raised to at least 1.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Number of cells, which is also the longest a snake can ever get.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Bring any coordinate back onto the board.
    pub fn wrap(&self, x: i32, y: i32) -> Position {
        Position {
            x: x.rem_euclid(self.width as i32),
            y: y.rem_euclid(self.height as i32),
        }
    }

    /// The neighbour of `pos` in `direction`, with wraparound.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.wrap(pos.x + dx, pos.y + dy)
    }

    /// Clamp a requested position into bounds without wrapping.
    pub fn clamp(&self, x: i32, y: i32) -> Position {
        Position {
            x: x.clamp(0, self.width as i32 - 1),
            y: y.clamp(0, self.height as i32 - 1),
        }
    }
}
