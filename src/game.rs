use std::time::Instant;

use anyhow::Result;
use log::info;

use crate::config::GameConfig;
use crate::input::{map_key, KeyCommand};
use crate::render;
use crate::state::{GameState, Status};
use crate::term::TermManager;

const GAME_OVER_MSG: &str = "Game over!";
const WIN_MSG: &str = "You won!";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ending {
    GameOver { length: usize },
    Won { length: usize },
    Quit,
}

impl Ending {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Ending::GameOver { .. } => Some(GAME_OVER_MSG),
            Ending::Won { .. } => Some(WIN_MSG),
            Ending::Quit => None,
        }
    }

    pub fn length(&self) -> Option<usize> {
        match self {
            Ending::GameOver { length } | Ending::Won { length } => Some(*length),
            Ending::Quit => None,
        }
    }
}

pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
    state: GameState,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let term = TermManager::new()?;
        let state = GameState::new(&config);
        Ok(SnakeGame { config, term, state })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()
    }

    /// Runs until the snake crashes, fills the board, or the player quits.
    pub fn play(&mut self) -> Result<Ending> {
        let interval = self.config.tick_interval;
        let mut next_tick = Some(Instant::now() + interval);

        self.redraw()?;

        while let Some(deadline) = next_tick {
            let timeout = deadline.saturating_duration_since(Instant::now());
            let mut changed = false;

            for key_ev in self.term.read_key_events(timeout)? {
                match map_key(&key_ev) {
                    Some(KeyCommand::Quit) => {
                        info!("quit requested");
                        return Ok(Ending::Quit);
                    }
                    Some(KeyCommand::Turn(dir)) => changed |= self.state.handle_direction_input(dir),
                    None => {}
                }
            }

            if Instant::now() >= deadline {
                let outcome = self.state.advance_tick();
                next_tick = outcome.schedules_next().then(|| Instant::now() + interval);
                changed = true;
            }

            if changed {
                self.redraw()?;
            }
        }

        let length = self.state.snake().len();
        info!("game finished with status {:?}, length {}", self.state.status(), length);

        Ok(match self.state.status() {
            Status::Won => Ending::Won { length },
            _ => Ending::GameOver { length },
        })
    }

    pub fn finish(&mut self) {
        self.term.restore();
    }

    fn redraw(&mut self) -> Result<()> {
        let lines = render::frame(&self.state.render_snapshot());
        self.term.draw_frame(&lines)
    }
}
