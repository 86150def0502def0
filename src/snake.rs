use std::collections::VecDeque;

use crate::{Coords, TermInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    /// One step from `pos` on a `size` x `size` torus.
    pub fn step(self, pos: Coords, size: TermInt) -> Coords {
        let (x, y) = pos;
        match self {
            Up => (x, (y + size - 1) % size),
            Down => (x, (y + 1) % size),
            Left => ((x + size - 1) % size, y),
            Right => ((x + 1) % size, y),
        }
    }
}

/// Head is the front of `body`, tail the back.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
    turn_locked: bool,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![pos]), direction, turn_locked: false }
    }

    #[cfg(test)]
    pub fn from_body(body: &[Coords], direction: Direction) -> Self {
        assert!(!body.is_empty());
        Snake { body: body.iter().copied().collect(), direction, turn_locked: false }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: &Coords) -> bool {
        self.body.contains(pos)
    }

    pub fn next_head(&self, size: TermInt) -> Coords {
        self.direction.step(self.head(), size)
    }

    /// Moves the head to `new_head`. The tail stays in place when growing.
    pub fn advance(&mut self, new_head: Coords, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
        self.turn_locked = false;
    }

    /// Returns whether the turn was taken. At most one turn is taken per step.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if self.turn_locked || self.direction.is_opposite(new_direction) {
            return false;
        }

        self.direction = new_direction;
        self.turn_locked = true;
        true
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));
        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn step_wraps_around_edges() {
        assert_eq!(Left.step((0, 4), 15), (14, 4));
        assert_eq!(Up.step((3, 0), 15), (3, 14));
        assert_eq!(Right.step((14, 4), 15), (0, 4));
        assert_eq!(Down.step((3, 14), 15), (3, 0));
        assert_eq!(Right.step((7, 7), 15), (8, 7));
    }

    #[test]
    fn advance_keeps_length_unless_growing() {
        let mut snake = Snake::from_body(&[(5, 5), (4, 5), (3, 5)], Right);

        snake.advance(snake.next_head(10), false);
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), vec![(6, 5), (5, 5), (4, 5)]);

        snake.advance(snake.next_head(10), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), (7, 5));
    }

    #[test]
    fn one_turn_per_step() {
        let mut snake = Snake::new((7, 7), Right);

        assert!(snake.set_direction(Up));
        assert!(!snake.set_direction(Left));
        assert_eq!(snake.get_direction(), Up);

        snake.advance(snake.next_head(15), false);
        assert!(snake.set_direction(Left));
    }

    #[test]
    fn reverse_turn_is_ignored() {
        let mut snake = Snake::new((7, 7), Right);
        assert!(!snake.set_direction(Left));
        assert_eq!(snake.get_direction(), Right);
        assert!(snake.set_direction(Up));
    }
}
