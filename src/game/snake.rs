//! The snake as a fixed-capacity ring of positions.
//!
//! The buffer is sized to the whole board, so the snake can never outgrow it.
//! Each step writes the new head one slot past the previous one; the body is
//! the `size` most recently written slots ending at the head cursor. Nothing
//! is ever shifted.

use super::action::Direction;
use super::grid::{Grid, Position};

/// Cells this close behind the head are never tested against it. A turning
/// snake needs at least four moves to come back to a cell it just left.
pub const COLLISION_EXEMPT_SEGMENTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    cells: Vec<Position>,
    head: usize,
    size: usize,
    direction: Direction,
    growth_pending: bool,
    vacated: Option<Position>,
}

impl Snake {
    /// Lay out `initial_size` consecutive cells from `start` along `direction`.
    /// The last cell laid is the head.
    pub fn new(grid: Grid, start: Position, direction: Direction, initial_size: usize) -> Self {
        let capacity = grid.area();
        let size = initial_size.clamp(1, capacity);
        let start = grid.clamp(start.x, start.y);

        let mut cells = vec![start; capacity];
        let mut pos = start;
        for (i, cell) in cells.iter_mut().take(size).enumerate() {
            if i > 0 {
                pos = grid.step(pos, direction);
            }
            *cell = pos;
        }

        Self {
            grid,
            cells,
            head: size - 1,
            size,
            direction,
            growth_pending: false,
            vacated: None,
        }
    }

    pub fn head(&self) -> Position {
        self.cells[self.head]
    }

    pub fn tail(&self) -> Position {
        self.cells[self.slot(self.size - 1)]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell given up by the last step, if the snake did not grow.
    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }

    /// Segments from the head back to the tail.
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).map(move |back| self.cells[self.slot(back)])
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body().any(|cell| cell == pos)
    }

    /// Request a turn. Reversing straight into the neck is ignored.
    /// Returns whether the heading changed.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if direction == self.direction || self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Where the head will be after the next step.
    pub fn next_head(&self) -> Position {
        self.grid.step(self.head(), self.direction)
    }

    /// Grow by one segment on the next step.
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    /// Move one cell in the current direction and return the new head.
    pub fn step(&mut self) -> Position {
        let next = self.next_head();

        if self.growth_pending && self.size < self.capacity() {
            self.size += 1;
            self.vacated = None;
        } else {
            self.vacated = Some(self.tail());
        }
        self.growth_pending = false;

        self.head = (self.head + 1) % self.capacity();
        self.cells[self.head] = next;
        next
    }

    /// True when the head sits on a body cell at least
    /// [`COLLISION_EXEMPT_SEGMENTS`] behind it.
    pub fn detects_self_collision(&self) -> bool {
        if self.size <= COLLISION_EXEMPT_SEGMENTS {
            return false;
        }
        let head = self.head();
        (COLLISION_EXEMPT_SEGMENTS..self.size).any(|back| self.cells[self.slot(back)] == head)
    }

    fn slot(&self, back: usize) -> usize {
        let capacity = self.capacity();
        (self.head + capacity - back % capacity) % capacity
    }

    /// Index of the head inside the ring buffer.
    #[cfg(test)]
    pub(crate) fn head_index(&self) -> usize {
        self.head
    }

    /// Segment `back` cells behind the head, `0` being the head itself.
    #[cfg(test)]
    pub(crate) fn segment(&self, back: usize) -> Option<Position> {
        (back < self.size).then(|| self.cells[self.slot(back)])
    }

    /// Build a snake from explicit segments, tail first and head last.
    #[cfg(test)]
    pub(crate) fn from_segments(grid: Grid, segments: &[Position], direction: Direction) -> Self {
        let mut snake = Self::new(grid, segments[0], direction, 1);
        for (i, &pos) in segments.iter().enumerate() {
            snake.cells[i] = pos;
        }
        snake.head = segments.len() - 1;
        snake.size = segments.len();
        snake
    }
}
