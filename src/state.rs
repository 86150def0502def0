use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::snake::{Direction, Snake};
use crate::{Coords, TermInt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    /// The snake ran into itself
    Terminated,
    /// The snake covers the whole board
    Won,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Crashed,
    BoardFilled,
    /// The game was already over, nothing happened
    Idle,
}

impl TickOutcome {
    /// Whether another tick has to be scheduled after this one.
    pub fn schedules_next(self) -> bool {
        matches!(self, TickOutcome::Moved | TickOutcome::Ate)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Marker {
    Food,
    Body,
    Empty,
}

/// Row-major board contents, `cells[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub cells: Vec<Vec<Marker>>,
}

pub struct GameState {
    size: TermInt,
    snake: Snake,
    food: Coords,
    status: Status,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let snake = Snake::new(config.center(), config.initial_direction);
        let mut state = GameState { size: config.grid_size, food: snake.head(), snake, status: Status::Running, rng };

        match state.spawn_food() {
            Some(food) => state.food = food,
            None => state.status = Status::Won,
        }
        state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns whether the heading changed.
    pub fn handle_direction_input(&mut self, requested: Direction) -> bool {
        if self.status != Status::Running {
            return false;
        }

        let current = self.snake.get_direction();
        let accepted = self.snake.set_direction(requested);
        debug!("turn {:?} -> {:?} {}", current, requested, if accepted { "accepted" } else { "rejected" });
        accepted
    }

    pub fn advance_tick(&mut self) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::Idle;
        }

        let new_head = self.snake.next_head(self.size);

        // Checked against the body before the tail moves away
        if self.snake.contains(&new_head) {
            self.status = Status::Terminated;
            return TickOutcome::Crashed;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if !ate {
            self.check_invariants();
            return TickOutcome::Moved;
        }

        match self.spawn_food() {
            Some(food) => {
                self.food = food;
                self.check_invariants();
                TickOutcome::Ate
            }
            None => {
                self.status = Status::Won;
                TickOutcome::BoardFilled
            }
        }
    }

    pub fn render_snapshot(&self) -> Snapshot {
        let cells = (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| {
                        let pos = (x, y);
                        if self.status != Status::Won && pos == self.food {
                            Marker::Food
                        } else if self.snake.contains(&pos) {
                            Marker::Body
                        } else {
                            Marker::Empty
                        }
                    })
                    .collect()
            })
            .collect();

        Snapshot { cells }
    }

    fn spawn_food(&mut self) -> Option<Coords> {
        let free: Vec<Coords> = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .filter(|pos| !self.snake.contains(pos))
            .collect();

        let food = free.choose(&mut self.rng).copied();
        if let Some(pos) = food {
            debug!("food placed at {:?}, {} free cells", pos, free.len());
        }
        food
    }

    fn check_invariants(&self) {
        debug_assert!(!self.snake.contains(&self.food), "food inside the snake");
        debug_assert!(self.snake.body().iter().all(|&(x, y)| x < self.size && y < self.size));
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_parts(size: TermInt, snake: Snake, food: Coords, seed: u64) -> Self {
        GameState { size, snake, food, status: Status::Running, rng: StdRng::seed_from_u64(seed) }
    }

    fn food(&self) -> Coords {
        self.food
    }

    fn size(&self) -> TermInt {
        self.size
    }
}
