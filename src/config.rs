use std::time::Duration;

use anyhow::{ensure, Result};

use crate::TermInt;
use crate::snake::Direction;

pub const GRID_SIZE: TermInt = 15;
pub const TICK_INTERVAL_MS: u64 = 200;

/// Name of the environment variable holding the log file path.
pub const LOG_ENV_VAR: &str = "SNAKE_LOG";

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Side of the square board
    pub grid_size: TermInt,
    /// Time between two movement steps
    pub tick_interval: Duration,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: GRID_SIZE,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    #[cfg(test)]
    pub fn new(grid_size: TermInt) -> Self {
        GameConfig { grid_size, ..Default::default() }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size >= 2, "grid size must be at least 2, got {}", self.grid_size);
        ensure!(self.grid_size <= TermInt::MAX / 2, "grid size {} is too large", self.grid_size);
        ensure!(!self.tick_interval.is_zero(), "tick interval must be non-zero");
        Ok(())
    }

    pub fn center(&self) -> (TermInt, TermInt) {
        (self.grid_size / 2, self.grid_size / 2)
    }
}
